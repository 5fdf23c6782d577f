//! ECS resources made available to the physics systems.
//!
//! Submodules:
//! - [`config`] – broad-phase tuning knobs, optional with safe defaults
//! - [`eventqueue`] – FIFO queue the collision dispatcher publishes into
//! - [`worldtime`] – simulation clock consumed by the movement system

pub mod config;
pub mod eventqueue;
pub mod worldtime;
