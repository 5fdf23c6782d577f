//! World update orchestrator.
//!
//! [`manage_world`] is the single entry point gameplay code calls once per
//! frame tick. It runs the physics pass in a strict order with no
//! interleaving:
//!
//! 1. clock update
//! 2. integration (movement system)
//! 3. collision detection and dispatch (collision system)
//!
//! Detection works on a frame-local snapshot and reactions only ever see
//! the [`EventQueue`](crate::resources::eventqueue::EventQueue) after the
//! pass returns, so a listener can never change a trigger flag or despawn a
//! collider mid-dispatch. Entity creation/destruction in response to an
//! event belongs in the queue-draining code that runs after this call.

use bevy_ecs::prelude::*;

use crate::resources::config::PhysicsConfig;
use crate::resources::eventqueue::EventQueue;
use crate::resources::worldtime::WorldTime;
use crate::systems::collision::collision;
use crate::systems::movement::movement;
use crate::systems::time::update_world_time;

/// Run one full physics/collision pass over the world.
///
/// `dt` is the unscaled frame delta in seconds. Missing ambient resources
/// (clock, event queue, config) are initialized with defaults, so a freshly
/// constructed `World` works out of the box. The pass is synchronous,
/// bounded by entity count, and always completes; per-entity problems are
/// logged and skipped, never propagated.
pub fn manage_world(world: &mut World, dt: f32) {
    world.init_resource::<WorldTime>();
    world.init_resource::<EventQueue>();
    world.init_resource::<PhysicsConfig>();

    update_world_time(world, dt);

    let mut schedule = Schedule::default();
    schedule.add_systems((movement, collision).chain());
    schedule.run(world);
}
