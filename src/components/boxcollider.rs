use bevy_ecs::prelude::Component;
use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::aabb::Aabb;

/// Axis-aligned box collider for collision detection.
///
/// The box is defined in the owning entity's local space: `center` is an
/// offset from the entity's [`Transform`](crate::components::transform::Transform)
/// translation and `scale` is the per-axis half-extent. The world-space
/// volume spans `translation + center ± scale`.
///
/// When `is_trigger` is true the collider reports overlaps without taking
/// part in physical response; the collision system names events accordingly
/// (see [`crate::events::collision`]).
#[derive(Debug, Clone, Copy, PartialEq, Component, Serialize, Deserialize)]
pub struct BoxCollider {
    /// Local offset from the owning entity's translation.
    pub center: Vec3,
    /// Per-axis half-extent of the box volume.
    pub scale: Vec3,
    /// Overlaps are reported as trigger events instead of collisions.
    pub is_trigger: bool,
}

impl Default for BoxCollider {
    fn default() -> Self {
        Self {
            center: Vec3::ZERO,
            scale: Vec3::ONE,
            is_trigger: false,
        }
    }
}

impl BoxCollider {
    /// Create a solid collider with the given half-extents, centered on the
    /// owning entity.
    pub fn new(scale: Vec3) -> Self {
        Self {
            scale,
            ..Default::default()
        }
    }

    /// Offset the box from the entity's pivot.
    pub fn with_center(mut self, center: Vec3) -> Self {
        self.center = center;
        self
    }

    /// Mark the collider as a trigger zone.
    pub fn with_trigger(mut self, is_trigger: bool) -> Self {
        self.is_trigger = is_trigger;
        self
    }

    /// World-space bounds for a given entity translation. Negative scale
    /// components are normalized by the [`Aabb`] constructor.
    pub fn world_aabb(&self, translation: Vec3) -> Aabb {
        Aabb::from_center_half_extents(translation + self.center, self.scale)
    }

    /// AABB-vs-AABB overlap test against another collider at a different
    /// entity translation. Touching faces count as overlap.
    pub fn overlaps(&self, translation: Vec3, other: &Self, other_translation: Vec3) -> bool {
        self.world_aabb(translation)
            .overlaps(&other.world_aabb(other_translation))
    }

    /// Point containment in world space.
    pub fn contains_point(&self, translation: Vec3, point: Vec3) -> bool {
        self.world_aabb(translation).contains_point(point)
    }
}
