//! Rigid body component with multiple named external forces.
//!
//! The [`RigidBody`] component stores mass, drag, velocity, and a set of
//! named forces (gravity, wind, thrust...) that compose additively. Each
//! force can be individually enabled or disabled, so game logic can toggle
//! contributions without recomputing them every frame.
//!
//! # Zero-mass policy
//!
//! Mass is a divisor in force application, so a zero or negative mass is an
//! invalid configuration. This crate clamps: every write point
//! ([`RigidBody::new`], [`RigidBody::with_params`], [`RigidBody::set_mass`])
//! raises the stored mass to at least [`MIN_MASS`], and force application
//! divides unconditionally. There is no "infinite mass" special case.

use bevy_ecs::prelude::Component;
use glam::Vec3;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Smallest mass a [`RigidBody`] will store. Keeps `force / mass` finite.
pub const MIN_MASS: f32 = 1e-4;

/// A named force that can be toggled on/off.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Force {
    /// The force vector in world units (mass · distance / s²).
    pub value: Vec3,
    /// Whether this force currently contributes to the total.
    pub enabled: bool,
}

impl Force {
    /// Create a new enabled force.
    pub fn new(value: Vec3) -> Self {
        Self {
            value,
            enabled: true,
        }
    }

    /// Create a force with an explicit enabled state.
    pub fn with_enabled(value: Vec3, enabled: bool) -> Self {
        Self { value, enabled }
    }
}

/// Physics-simulated body storing mass, drag, velocity, and named forces.
///
/// Consumed by the movement system, which applies the total enabled force
/// scaled by `1 / mass`, damps velocity by `drag`, and integrates the
/// owner's [`Transform`](crate::components::transform::Transform).
///
/// # Fields
/// - `mass` - divisor for force application, clamped to [`MIN_MASS`]
/// - `drag` - damping factor, applied as `velocity *= 1 - drag * delta`
/// - `velocity` - current linear velocity in world units per second
/// - `forces` - named force contributions, summed when enabled
#[derive(Component, Clone, Debug, Serialize, Deserialize)]
pub struct RigidBody {
    mass: f32,
    /// Velocity damping factor. Negative values are treated as zero by the
    /// movement system. Typical values: 0.0 (none) to 10.0 (heavy drag).
    pub drag: f32,
    /// Current linear velocity in world units per second.
    pub velocity: Vec3,
    /// Named external forces. The total applied force is the sum of all
    /// enabled entries.
    pub forces: FxHashMap<String, Force>,
}

impl Default for RigidBody {
    fn default() -> Self {
        Self::new()
    }
}

impl RigidBody {
    /// Create a body with unit mass, light drag, zero velocity, no forces.
    pub fn new() -> Self {
        Self {
            mass: 1.0,
            drag: 0.2,
            velocity: Vec3::ZERO,
            forces: FxHashMap::default(),
        }
    }

    /// Create a body with explicit mass and drag. Mass is clamped to
    /// [`MIN_MASS`].
    pub fn with_params(mass: f32, drag: f32) -> Self {
        Self {
            mass: mass.max(MIN_MASS),
            drag,
            velocity: Vec3::ZERO,
            forces: FxHashMap::default(),
        }
    }

    /// Current mass. Always at least [`MIN_MASS`].
    pub fn mass(&self) -> f32 {
        self.mass
    }

    /// Set the mass, clamping to [`MIN_MASS`].
    pub fn set_mass(&mut self, mass: f32) {
        self.mass = mass.max(MIN_MASS);
    }

    /// Add or replace a named force (enabled by default).
    pub fn add_force(&mut self, name: &str, value: Vec3) {
        self.forces.insert(name.to_string(), Force::new(value));
    }

    /// Add or replace a named force with an explicit enabled state.
    pub fn add_force_with_state(&mut self, name: &str, value: Vec3, enabled: bool) {
        self.forces
            .insert(name.to_string(), Force::with_enabled(value, enabled));
    }

    /// Remove a named force entirely.
    pub fn remove_force(&mut self, name: &str) {
        self.forces.remove(name);
    }

    /// Enable or disable a force by name. Returns false if it doesn't exist.
    pub fn set_force_enabled(&mut self, name: &str, enabled: bool) -> bool {
        if let Some(force) = self.forces.get_mut(name) {
            force.enabled = enabled;
            true
        } else {
            false
        }
    }

    /// Check if a force exists and is enabled.
    pub fn is_force_enabled(&self, name: &str) -> bool {
        self.forces.get(name).map(|f| f.enabled).unwrap_or(false)
    }

    /// Look up a force by name.
    pub fn get_force(&self, name: &str) -> Option<&Force> {
        self.forces.get(name)
    }

    /// Sum of all enabled forces.
    pub fn total_force(&self) -> Vec3 {
        let mut total = Vec3::ZERO;
        for force in self.forces.values() {
            if force.enabled {
                total += force.value;
            }
        }
        total
    }

    /// Apply an instantaneous impulse: `velocity += impulse / mass`.
    pub fn apply_impulse(&mut self, impulse: Vec3) {
        self.velocity += impulse / self.mass;
    }

    pub fn set_velocity(&mut self, velocity: Vec3) {
        self.velocity = velocity;
    }

    pub fn velocity(&self) -> Vec3 {
        self.velocity
    }
}
