//! Tuning knobs for the collision pass.

use bevy_ecs::prelude::Resource;
use serde::{Deserialize, Serialize};

/// Default broad-phase grid cell edge length, in world units. Works well when
/// typical collider extents are a few units; tune per game.
const DEFAULT_CELL_SIZE: f32 = 8.0;
/// Below this entity count the broad phase skips the grid and tests all
/// pairs directly.
const DEFAULT_ALL_PAIRS_THRESHOLD: usize = 32;

/// Physics configuration resource.
///
/// Optional: systems fall back to [`PhysicsConfig::default`] when the
/// resource is absent from the world.
#[derive(Resource, Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PhysicsConfig {
    /// Broad-phase grid cell edge length in world units.
    pub cell_size: f32,
    /// Entity count at or below which broad phase degenerates to all-pairs.
    pub all_pairs_threshold: usize,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            cell_size: DEFAULT_CELL_SIZE,
            all_pairs_threshold: DEFAULT_ALL_PAIRS_THRESHOLD,
        }
    }
}
