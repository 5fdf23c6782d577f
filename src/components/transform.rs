use bevy_ecs::prelude::Component;
use glam::Vec3;
use serde::{Deserialize, Serialize};

/// World-space position (pivot) of an entity.
///
/// Collision and raycast read it to place collider volumes in the world;
/// the movement system writes it when integrating velocities.
#[derive(Component, Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct Transform {
    pub translation: Vec3,
}

impl Transform {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self {
            translation: Vec3::new(x, y, z),
        }
    }

    pub fn from_translation(translation: Vec3) -> Self {
        Self { translation }
    }
}
