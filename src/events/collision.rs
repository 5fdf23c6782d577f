//! Collision event payloads and wire names.
//!
//! The collision system emits one [`CollisionEvent`] per overlapping pair
//! *per direction*: for a confirmed pair (A, B), A's side receives an event
//! carrying a snapshot of B, and B's side receives one carrying a snapshot
//! of A. The event name depends on the *other* party's trigger flag, so the
//! two directions of one pair can carry different names.
//!
//! Payloads hold copied values, never references into component storage.
//! A listener may consume an event after the colliders that produced it
//! moved, changed, or were despawned; the snapshot stays valid.

use bevy_ecs::prelude::Entity;
use glam::Vec3;

/// Wire name for an overlap where the other collider is solid.
pub const ON_COLLISION_BOX: &str = "on-collision-box";
/// Wire name for an overlap where the other collider is a trigger.
pub const ON_TRIGGER_BOX: &str = "on-trigger-box";

/// Copied state of the collider on the far side of an overlap, captured at
/// detection time.
#[derive(Debug, Clone, PartialEq)]
pub struct ColliderSnapshot {
    /// Entity id of the other collider's owner.
    pub entity: Entity,
    /// Name of the other collider's owner.
    pub name: String,
    /// World-space center of the other collider at detection time.
    pub center: Vec3,
    /// Half-extents of the other collider.
    pub scale: Vec3,
    /// Trigger flag of the other collider (also selects the event name).
    pub is_trigger: bool,
}

/// Event fired for one side of a confirmed overlap.
///
/// `owner` identifies the entity being notified; `other` describes what it
/// overlapped with. A collider never learns about itself this way: the
/// collision system never pairs an entity against itself.
#[derive(Debug, Clone, PartialEq)]
pub struct CollisionEvent {
    /// Name of the entity that owns the collider issuing the notification.
    pub owner: String,
    /// Snapshot of the collider it overlapped with.
    pub other: ColliderSnapshot,
}

impl CollisionEvent {
    /// Event name for a notification about `other`: trigger colliders are
    /// reported as [`ON_TRIGGER_BOX`], solid ones as [`ON_COLLISION_BOX`].
    pub fn wire_name(other_is_trigger: bool) -> &'static str {
        if other_is_trigger {
            ON_TRIGGER_BOX
        } else {
            ON_COLLISION_BOX
        }
    }
}
