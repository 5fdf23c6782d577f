//! boxphys: physics and collision subsystem for `bevy_ecs` game worlds.
//!
//! The crate advances rigid-body motion, detects overlaps between
//! axis-aligned box colliders, classifies solid collisions versus trigger
//! zones, and publishes collision notifications into a FIFO event queue.
//! It also exposes ray-versus-world queries for gameplay code.
//!
//! The per-frame entry point is [`world::manage_world`]; the read-only
//! query entry point is [`raycast::raycast_hit_world`].

pub mod aabb;
pub mod components;
pub mod events;
pub mod raycast;
pub mod resources;
pub mod systems;
pub mod world;
