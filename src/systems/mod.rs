//! Physics systems.
//!
//! Submodules overview
//! - [`collision`] – broad/narrow phase detection and collision event dispatch
//! - [`movement`] – integrate positions from rigid body forces and velocities
//! - [`time`] – update simulation time and delta
//!
//! The per-frame ordering (integrate, then detect, then dispatch) is
//! composed by [`manage_world`](crate::world::manage_world).

pub mod collision;
pub mod movement;
pub mod time;
