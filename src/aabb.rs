//! Axis-aligned bounding box geometry shared by the collision systems and
//! the raycast query.
//!
//! Everything in here is plain math on [`glam::Vec3`] with no ECS coupling,
//! so it can be unit tested in isolation and reused by gameplay code that
//! wants to do its own volume checks.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// World-space axis-aligned box stored as min/max corners.
///
/// Construct via [`Aabb::from_center_half_extents`]; negative half-extents
/// are normalized so `min <= max` always holds on every axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    /// Build a box from a center point and per-axis half-extents.
    pub fn from_center_half_extents(center: Vec3, half_extents: Vec3) -> Self {
        let h = half_extents.abs();
        Self {
            min: center - h,
            max: center + h,
        }
    }

    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    pub fn half_extents(&self) -> Vec3 {
        (self.max - self.min) * 0.5
    }

    /// True when every corner coordinate is a finite number.
    pub fn is_finite(&self) -> bool {
        self.min.is_finite() && self.max.is_finite()
    }

    /// Exact AABB-vs-AABB overlap test.
    ///
    /// Touching faces count as overlap: for each axis the test is
    /// `|center_a - center_b| <= half_a + half_b`, expressed on min/max
    /// corners. Symmetric by construction.
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.min.x <= other.max.x
            && self.max.x >= other.min.x
            && self.min.y <= other.max.y
            && self.max.y >= other.min.y
            && self.min.z <= other.max.z
            && self.max.z >= other.min.z
    }

    /// Point containment, inclusive of the faces.
    pub fn contains_point(&self, point: Vec3) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
            && point.z >= self.min.z
            && point.z <= self.max.z
    }

    /// Slab-method ray intersection.
    ///
    /// `dir` must be non-zero (callers normalize it so the returned distance
    /// is in world units). Returns `(distance, entry_normal)` for the nearest
    /// non-negative intersection, or `None` when the ray misses or the box
    /// lies entirely behind the origin. An origin inside the box reports
    /// distance `0.0` with a zero normal, since no entry face was crossed.
    pub fn ray_intersection(&self, origin: Vec3, dir: Vec3) -> Option<(f32, Vec3)> {
        let mut tmin = f32::NEG_INFINITY;
        let mut tmax = f32::INFINITY;
        let mut normal = Vec3::ZERO;

        for axis in 0..3 {
            if dir[axis].abs() < f32::EPSILON {
                // Ray parallel to this slab: must already be inside it.
                if origin[axis] < self.min[axis] || origin[axis] > self.max[axis] {
                    return None;
                }
                continue;
            }
            let inv = 1.0 / dir[axis];
            let mut t1 = (self.min[axis] - origin[axis]) * inv;
            let mut t2 = (self.max[axis] - origin[axis]) * inv;
            let mut sign = -1.0;
            if t1 > t2 {
                core::mem::swap(&mut t1, &mut t2);
                sign = 1.0;
            }
            if t1 > tmin {
                tmin = t1;
                normal = Vec3::ZERO;
                normal[axis] = sign;
            }
            if t2 < tmax {
                tmax = t2;
            }
            if tmin > tmax {
                return None;
            }
        }

        if tmax < 0.0 {
            return None;
        }
        if tmin < 0.0 {
            // Origin inside the box: no entry face was crossed.
            return Some((0.0, Vec3::ZERO));
        }
        Some((tmin, normal))
    }
}
