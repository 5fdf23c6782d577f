//! Event payload types published by the physics subsystem.
//!
//! Events are the decoupling seam between detection and reaction: the
//! collision pass only pushes payloads into the frame's
//! [`EventQueue`](crate::resources::eventqueue::EventQueue), and listeners
//! drain the queue on their own schedule, after the pass has completed.
//!
//! Submodules:
//! - [`collision`] – collision/trigger notifications and their wire names

pub mod collision;
