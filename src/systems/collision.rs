//! Collision pass: broad-phase culling, narrow-phase AABB tests, and event
//! dispatch.
//!
//! The pass runs over a frame-local snapshot ([`CollisionProcedureData`])
//! gathered once from the world, so detection never re-reads component
//! storage mid-iteration and never observes structural mutation. Reactions
//! are deferred: the dispatcher only pushes payloads into the
//! [`EventQueue`](crate::resources::eventqueue::EventQueue) resource, and
//! listeners drain it after the pass.
//!
//! # Phases
//!
//! 1. **Gather** – snapshot entity id, owner name, world-space AABB, and
//!    collider data into index-aligned vectors.
//! 2. **Broad phase** – uniform grid over the AABBs produces candidate index
//!    pairs; a conservative superset of the true overlaps. Small worlds skip
//!    the grid and emit all pairs.
//! 3. **Narrow phase** – exact per-axis AABB test on each candidate.
//! 4. **Dispatch** – two events per confirmed pair, one per direction, named
//!    by the *other* party's trigger flag.
//!
//! Candidate pairs are sorted before the narrow phase, so the published
//! event sequence is identical across runs on identical input.

use bevy_ecs::prelude::*;
use log::{debug, warn};
use rustc_hash::{FxHashMap, FxHashSet};
use smallvec::SmallVec;

use crate::aabb::Aabb;
use crate::components::boxcollider::BoxCollider;
use crate::components::name::EntityName;
use crate::components::transform::Transform;
use crate::events::collision::{ColliderSnapshot, CollisionEvent};
use crate::resources::config::PhysicsConfig;
use crate::resources::eventqueue::EventQueue;

/// Floor for the grid cell size; keeps cell-coordinate math finite when a
/// config carries a zero or negative value.
const MIN_CELL_SIZE: f32 = 1e-3;

/// Frame-local working set for one collision pass.
///
/// Parallel vectors indexed by entity ordinal: index `i` refers to the same
/// entity in all four. Built once per pass so repeated store lookups and
/// mid-pass mutation hazards are impossible.
pub struct CollisionProcedureData {
    pub entities: Vec<Entity>,
    pub owners: Vec<String>,
    pub aabbs: Vec<Aabb>,
    pub colliders: Vec<BoxCollider>,
}

impl CollisionProcedureData {
    /// Snapshot every entity carrying a transform and a box collider.
    ///
    /// Entities whose world-space bounds come out non-finite are skipped
    /// with a warning rather than poisoning the whole pass.
    pub fn gather(
        query: &Query<(Entity, &Transform, &BoxCollider, Option<&EntityName>)>,
    ) -> Self {
        let mut data = Self {
            entities: Vec::new(),
            owners: Vec::new(),
            aabbs: Vec::new(),
            colliders: Vec::new(),
        };
        for (entity, transform, collider, name) in query.iter() {
            let aabb = collider.world_aabb(transform.translation);
            if !aabb.is_finite() {
                warn!("skipping collider with non-finite bounds on {entity:?}");
                continue;
            }
            data.entities.push(entity);
            data.owners.push(match name {
                Some(name) => name.0.clone(),
                None => format!("entity-{entity:?}"),
            });
            data.aabbs.push(aabb);
            data.colliders.push(*collider);
        }
        debug_assert!(
            data.entities.len() == data.owners.len()
                && data.entities.len() == data.aabbs.len()
                && data.entities.len() == data.colliders.len()
        );
        data
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    fn snapshot(&self, index: usize) -> ColliderSnapshot {
        ColliderSnapshot {
            entity: self.entities[index],
            name: self.owners[index].clone(),
            center: self.aabbs[index].center(),
            scale: self.colliders[index].scale,
            is_trigger: self.colliders[index].is_trigger,
        }
    }
}

/// Integer grid cell containing a world-space coordinate.
fn cell_coord(v: f32, cell_size: f32) -> i32 {
    (v / cell_size).floor() as i32
}

/// Broad phase: candidate index pairs whose AABBs might overlap.
///
/// Conservative: every truly overlapping pair is present (entities sharing a
/// grid cell always pair up, and an AABB is inserted into every cell it
/// touches). Each unordered pair appears at most once, as `(i, j)` with
/// `i < j`, and the result is sorted so downstream dispatch order is
/// deterministic. At or below `all_pairs_threshold` entities the grid is
/// skipped entirely.
pub fn broad_phase(aabbs: &[Aabb], config: &PhysicsConfig) -> Vec<(usize, usize)> {
    let n = aabbs.len();
    if n < 2 {
        return Vec::new();
    }

    if n <= config.all_pairs_threshold {
        let mut pairs = Vec::with_capacity(n * (n - 1) / 2);
        for i in 0..n {
            for j in (i + 1)..n {
                pairs.push((i, j));
            }
        }
        return pairs;
    }

    let cell_size = config.cell_size.max(MIN_CELL_SIZE);
    let mut grid: FxHashMap<(i32, i32, i32), SmallVec<[usize; 8]>> = FxHashMap::default();
    for (i, aabb) in aabbs.iter().enumerate() {
        let lo = (
            cell_coord(aabb.min.x, cell_size),
            cell_coord(aabb.min.y, cell_size),
            cell_coord(aabb.min.z, cell_size),
        );
        let hi = (
            cell_coord(aabb.max.x, cell_size),
            cell_coord(aabb.max.y, cell_size),
            cell_coord(aabb.max.z, cell_size),
        );
        for x in lo.0..=hi.0 {
            for y in lo.1..=hi.1 {
                for z in lo.2..=hi.2 {
                    grid.entry((x, y, z)).or_default().push(i);
                }
            }
        }
    }

    let mut seen: FxHashSet<(usize, usize)> = FxHashSet::default();
    let mut pairs = Vec::new();
    for bucket in grid.values() {
        for a in 0..bucket.len() {
            for b in (a + 1)..bucket.len() {
                let (i, j) = if bucket[a] < bucket[b] {
                    (bucket[a], bucket[b])
                } else {
                    (bucket[b], bucket[a])
                };
                if seen.insert((i, j)) {
                    pairs.push((i, j));
                }
            }
        }
    }
    // Grid iteration order is not deterministic; the pair list must be.
    pairs.sort_unstable();
    pairs
}

/// Narrow phase: keep only the candidate pairs whose AABBs exactly overlap.
pub fn narrow_phase(aabbs: &[Aabb], candidates: Vec<(usize, usize)>) -> Vec<(usize, usize)> {
    candidates
        .into_iter()
        .filter(|&(i, j)| aabbs[i].overlaps(&aabbs[j]))
        .collect()
}

/// Dispatch: two notifications per confirmed pair, one per direction.
///
/// Side `a` receives `(owner_a, snapshot(b))` under the name selected by
/// `b`'s trigger flag, and vice versa. Dispatch only pushes into the queue;
/// it never mutates collider or body state.
fn dispatch(data: &CollisionProcedureData, confirmed: &[(usize, usize)], queue: &mut EventQueue) {
    for &(a, b) in confirmed {
        notify(data, a, b, queue);
        notify(data, b, a, queue);
    }
}

fn notify(data: &CollisionProcedureData, me: usize, other: usize, queue: &mut EventQueue) {
    let name = CollisionEvent::wire_name(data.colliders[other].is_trigger);
    queue.push(
        name,
        CollisionEvent {
            owner: data.owners[me].clone(),
            other: data.snapshot(other),
        },
    );
}

/// Run one collision pass: gather, broad phase, narrow phase, dispatch.
///
/// Falls back to [`PhysicsConfig::default`] when no config resource is
/// present.
pub fn collision(
    query: Query<(Entity, &Transform, &BoxCollider, Option<&EntityName>)>,
    config: Option<Res<PhysicsConfig>>,
    mut queue: ResMut<EventQueue>,
) {
    let config = config.map(|c| *c).unwrap_or_default();
    let data = CollisionProcedureData::gather(&query);
    if data.len() < 2 {
        return;
    }

    let candidates = broad_phase(&data.aabbs, &config);
    let confirmed = narrow_phase(&data.aabbs, candidates);
    if !confirmed.is_empty() {
        debug!(
            "collision pass: {} entities, {} confirmed pairs",
            data.len(),
            confirmed.len()
        );
    }
    dispatch(&data, &confirmed, &mut queue);
}
