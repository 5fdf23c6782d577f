//! Ray-versus-world queries for gameplay code (picking, line of sight).
//!
//! [`raycast_hit_world`] linearly scans every box collider in the world and
//! returns the nearest hit. Linear scan is deliberate: raycasts are far
//! rarer than collision passes, and scanning keeps the query independent of
//! any broad-phase acceleration state.

use bevy_ecs::prelude::*;
use glam::Vec3;
use log::warn;

use crate::components::boxcollider::BoxCollider;
use crate::components::transform::Transform;

/// A ray in world space. `direction` need not be normalized; hit distances
/// are reported in world units along the normalized direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self { origin, direction }
    }
}

/// Nearest intersection found by [`raycast_hit_world`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    /// Entity owning the hit collider.
    pub entity: Entity,
    /// Distance from the ray origin to the entry face, in world units.
    /// Zero when the origin is inside the box.
    pub distance: f32,
    /// World-space intersection point.
    pub point: Vec3,
    /// Entry face normal. Zero when the origin is inside the box.
    pub normal: Vec3,
}

/// Nearest-hit test of a ray against every box collider in the world.
///
/// Returns `None` for an empty world, a degenerate (zero-length) direction,
/// or a ray that misses everything. Ties on distance resolve to the first
/// collider in the world's stable iteration order. Read-only: no component
/// is mutated (the `&mut World` is only needed to build the query state).
pub fn raycast_hit_world(ray: &Ray, world: &mut World) -> Option<RayHit> {
    if ray.direction.length_squared() <= f32::EPSILON {
        warn!("raycast with zero-length direction always misses");
        return None;
    }
    let dir = ray.direction.normalize();

    let mut best: Option<RayHit> = None;
    let mut query = world.query::<(Entity, &Transform, &BoxCollider)>();
    for (entity, transform, collider) in query.iter(world) {
        let aabb = collider.world_aabb(transform.translation);
        if !aabb.is_finite() {
            continue;
        }
        if let Some((distance, normal)) = aabb.ray_intersection(ray.origin, dir) {
            // Strict comparison keeps the first collider on equal distance.
            if best.as_ref().is_none_or(|b| distance < b.distance) {
                best = Some(RayHit {
                    entity,
                    distance,
                    point: ray.origin + dir * distance,
                    normal,
                });
            }
        }
    }
    best
}
