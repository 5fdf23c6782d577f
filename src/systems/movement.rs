//! Movement system: integrates rigid body velocities into positions.
//!
//! Per frame, for every entity with both a
//! [`Transform`](crate::components::transform::Transform) and a
//! [`RigidBody`](crate::components::rigidbody::RigidBody):
//!
//! 1. `velocity += (sum of enabled forces / mass) * delta`
//! 2. `velocity *= max(0, 1 - drag * delta)`
//! 3. `translation += velocity * delta`
//!
//! Mass is clamped at every write point (see
//! [`MIN_MASS`](crate::components::rigidbody::MIN_MASS)), so step 1 never
//! divides by zero. The damping factor is floored at zero so a large
//! `drag * delta` stops the body instead of reversing it.
//!
//! A body whose velocity goes non-finite (bad force data, NaN poisoning) is
//! zeroed and skipped with a warning; one malformed entity never aborts the
//! frame.

use bevy_ecs::prelude::*;
use log::warn;

use crate::components::rigidbody::RigidBody;
use crate::components::transform::Transform;
use crate::resources::worldtime::WorldTime;

/// Advance every rigid body by one frame of the simulation clock.
pub fn movement(mut query: Query<(&mut Transform, &mut RigidBody)>, time: Res<WorldTime>) {
    let dt = time.delta;
    if dt <= 0.0 {
        return;
    }

    for (mut transform, mut body) in query.iter_mut() {
        let acceleration = body.total_force() / body.mass();
        body.velocity += acceleration * dt;

        let damping = (1.0 - body.drag.max(0.0) * dt).max(0.0);
        body.velocity *= damping;

        if !body.velocity.is_finite() {
            warn!("skipping rigid body with non-finite velocity: {:?}", body.velocity);
            body.velocity = glam::Vec3::ZERO;
            continue;
        }

        transform.translation += body.velocity * dt;
    }
}
