//! ECS components for physics-capable entities.
//!
//! This module groups the component types the physics subsystem attaches to
//! entities. Component memory is owned by the `bevy_ecs` world; the types
//! here are plain data read and written in place through queries.
//!
//! Submodules overview:
//! - [`boxcollider`] – axis-aligned box collider, solid or trigger
//! - [`name`] – entity identity used in collision event payloads
//! - [`rigidbody`] – mass, drag, velocity, and named external forces
//! - [`transform`] – world-space position (pivot) of an entity

pub mod boxcollider;
pub mod name;
pub mod rigidbody;
pub mod transform;
