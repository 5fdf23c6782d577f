//! End-to-end tests for the per-frame physics pass: integration, collision
//! detection, event dispatch, and determinism.

use bevy_ecs::prelude::*;
use glam::Vec3;

use boxphys::components::boxcollider::BoxCollider;
use boxphys::components::name::EntityName;
use boxphys::components::rigidbody::RigidBody;
use boxphys::components::transform::Transform;
use boxphys::events::collision::{ON_COLLISION_BOX, ON_TRIGGER_BOX};
use boxphys::resources::config::PhysicsConfig;
use boxphys::resources::eventqueue::{EventQueue, QueuedEvent};
use boxphys::world::manage_world;

const EPSILON: f32 = 1e-5;

fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

/// Install the test logger so skipped-entity warnings show up under
/// `RUST_LOG=warn cargo test`. Safe to call from every test.
fn init_logs() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn spawn_box(world: &mut World, name: &str, at: Vec3, is_trigger: bool) -> Entity {
    world
        .spawn((
            EntityName::new(name),
            Transform::from_translation(at),
            BoxCollider::default().with_trigger(is_trigger),
        ))
        .id()
}

fn drain(world: &mut World) -> Vec<QueuedEvent> {
    world.resource_mut::<EventQueue>().drain()
}

#[test]
fn overlapping_solids_notify_both_sides() {
    let mut world = World::new();
    spawn_box(&mut world, "a", Vec3::ZERO, false);
    spawn_box(&mut world, "b", Vec3::new(1.0, 0.0, 0.0), false);

    manage_world(&mut world, 0.016);

    let events = drain(&mut world);
    assert_eq!(events.len(), 2);
    assert!(events.iter().all(|e| e.name == ON_COLLISION_BOX));

    let owners: Vec<_> = events.iter().map(|e| e.payload.owner.as_str()).collect();
    assert_eq!(owners, vec!["a", "b"]);
    assert_eq!(events[0].payload.other.name, "b");
    assert_eq!(events[1].payload.other.name, "a");
}

#[test]
fn trigger_naming_is_asymmetric_per_direction() {
    let mut world = World::new();
    spawn_box(&mut world, "solid", Vec3::ZERO, false);
    spawn_box(&mut world, "zone", Vec3::new(0.5, 0.0, 0.0), true);

    manage_world(&mut world, 0.016);

    let events = drain(&mut world);
    assert_eq!(events.len(), 2);

    // The solid side learns about the trigger, so its event is named
    // on-trigger-box; the trigger side learns about the solid.
    let solid_side = events.iter().find(|e| e.payload.owner == "solid").unwrap();
    let zone_side = events.iter().find(|e| e.payload.owner == "zone").unwrap();
    assert_eq!(solid_side.name, ON_TRIGGER_BOX);
    assert!(solid_side.payload.other.is_trigger);
    assert_eq!(zone_side.name, ON_COLLISION_BOX);
    assert!(!zone_side.payload.other.is_trigger);
}

#[test]
fn separated_boxes_produce_no_events() {
    let mut world = World::new();
    spawn_box(&mut world, "a", Vec3::ZERO, false);
    spawn_box(&mut world, "b", Vec3::new(10.0, 0.0, 0.0), false);

    manage_world(&mut world, 0.016);

    assert!(drain(&mut world).is_empty());
}

#[test]
fn non_finite_collider_is_skipped_not_fatal() {
    init_logs();
    let mut world = World::new();
    spawn_box(&mut world, "a", Vec3::ZERO, false);
    spawn_box(&mut world, "b", Vec3::new(1.0, 0.0, 0.0), false);
    spawn_box(&mut world, "broken", Vec3::new(f32::NAN, 0.0, 0.0), false);

    // The pass completes and the malformed entity is left out of detection.
    manage_world(&mut world, 0.016);

    let events = drain(&mut world);
    assert_eq!(events.len(), 2);
    assert!(events
        .iter()
        .all(|e| e.payload.owner != "broken" && e.payload.other.name != "broken"));
}

#[test]
fn no_event_pairs_a_collider_with_itself() {
    let mut world = World::new();
    spawn_box(&mut world, "loner", Vec3::ZERO, false);

    manage_world(&mut world, 0.016);

    assert!(drain(&mut world).is_empty());
}

#[test]
fn static_world_dispatch_is_deterministic() {
    let mut world = World::new();
    for i in 0..6 {
        // Chain of overlapping boxes, no velocity anywhere.
        spawn_box(&mut world, &format!("e{i}"), Vec3::new(i as f32 * 1.5, 0.0, 0.0), false);
    }

    manage_world(&mut world, 0.016);
    let first = drain(&mut world);
    manage_world(&mut world, 0.016);
    let second = drain(&mut world);

    assert!(!first.is_empty());
    assert_eq!(first, second);
}

#[test]
fn dispatch_order_follows_sorted_pairs() {
    let mut world = World::new();
    spawn_box(&mut world, "e0", Vec3::ZERO, false);
    spawn_box(&mut world, "e1", Vec3::new(1.0, 0.0, 0.0), false);
    spawn_box(&mut world, "e2", Vec3::new(0.5, 1.0, 0.0), false);

    manage_world(&mut world, 0.016);

    // Pairs (0,1), (0,2), (1,2), two events each, owner side first.
    let owners: Vec<String> = drain(&mut world)
        .into_iter()
        .map(|e| e.payload.owner)
        .collect();
    assert_eq!(owners, vec!["e0", "e1", "e0", "e2", "e1", "e2"]);
}

#[test]
fn grid_broadphase_matches_all_pairs_results() {
    let positions: Vec<Vec3> = (0..50)
        .map(|i| {
            let f = i as f32;
            Vec3::new((f * 7.3) % 20.0, (f * 3.1) % 6.0, (f * 1.7) % 4.0)
        })
        .collect();

    let run = |config: PhysicsConfig| -> Vec<(String, String)> {
        let mut world = World::new();
        world.insert_resource(config);
        for (i, &pos) in positions.iter().enumerate() {
            spawn_box(&mut world, &format!("e{i}"), pos, false);
        }
        manage_world(&mut world, 0.016);
        drain(&mut world)
            .into_iter()
            .map(|e| (e.payload.owner, e.payload.other.name))
            .collect()
    };

    let via_grid = run(PhysicsConfig {
        cell_size: 4.0,
        all_pairs_threshold: 0,
    });
    let via_all_pairs = run(PhysicsConfig {
        cell_size: 4.0,
        all_pairs_threshold: usize::MAX,
    });
    assert!(!via_grid.is_empty());
    assert_eq!(via_grid, via_all_pairs);
}

#[test]
fn moving_body_collides_after_integration() {
    let mut world = World::new();
    let mut body = RigidBody::with_params(1.0, 0.0);
    body.velocity = Vec3::new(5.0, 0.0, 0.0);
    world.spawn((
        EntityName::new("mover"),
        Transform::from_translation(Vec3::new(-5.0, 0.0, 0.0)),
        BoxCollider::default(),
        body,
    ));
    spawn_box(&mut world, "wall", Vec3::ZERO, false);

    // Before moving: 5 units apart, no overlap.
    manage_world(&mut world, 0.0);
    assert!(drain(&mut world).is_empty());

    // One second at 5 u/s closes the gap; detection sees the post-move AABB.
    manage_world(&mut world, 1.0);
    let events = drain(&mut world);
    assert_eq!(events.len(), 2);
    assert!(events.iter().any(|e| e.payload.owner == "mover"));
    assert!(events.iter().any(|e| e.payload.owner == "wall"));
}

#[test]
fn event_payload_survives_despawn_of_the_other_entity() {
    let mut world = World::new();
    spawn_box(&mut world, "keeper", Vec3::ZERO, false);
    let doomed = spawn_box(&mut world, "doomed", Vec3::new(1.0, 0.0, 0.0), true);

    manage_world(&mut world, 0.016);
    world.despawn(doomed);

    // Payloads are copied snapshots, so delivery after destruction is safe.
    let events = drain(&mut world);
    let keeper_side = events.iter().find(|e| e.payload.owner == "keeper").unwrap();
    assert_eq!(keeper_side.payload.other.name, "doomed");
    assert!(keeper_side.payload.other.is_trigger);
    assert!(approx_eq(keeper_side.payload.other.center.x, 1.0));
}

#[test]
fn unnamed_entities_fall_back_to_entity_ids() {
    let mut world = World::new();
    world.spawn((Transform::default(), BoxCollider::default()));
    world.spawn((
        Transform::from_translation(Vec3::new(1.0, 0.0, 0.0)),
        BoxCollider::default(),
    ));

    manage_world(&mut world, 0.016);

    let events = drain(&mut world);
    assert_eq!(events.len(), 2);
    for event in &events {
        assert!(event.payload.owner.starts_with("entity-"));
    }
}

#[test]
fn integration_and_damping_compose_over_frames() {
    let mut world = World::new();
    let mut body = RigidBody::with_params(1.0, 0.5);
    body.velocity = Vec3::new(1.0, 0.0, 0.0);
    let entity = world.spawn((Transform::default(), body)).id();

    manage_world(&mut world, 1.0);
    {
        let body = world.get::<RigidBody>(entity).unwrap();
        let transform = world.get::<Transform>(entity).unwrap();
        assert!(approx_eq(body.velocity.x, 0.5));
        assert!(approx_eq(transform.translation.x, 0.5));
    }

    manage_world(&mut world, 1.0);
    let body = world.get::<RigidBody>(entity).unwrap();
    let transform = world.get::<Transform>(entity).unwrap();
    assert!(approx_eq(body.velocity.x, 0.25));
    assert!(approx_eq(transform.translation.x, 0.75));
}

#[test]
fn time_scale_slows_integration() {
    let mut world = World::new();
    manage_world(&mut world, 0.0); // init resources
    world.resource_mut::<boxphys::resources::worldtime::WorldTime>().time_scale = 0.5;

    let mut body = RigidBody::with_params(1.0, 0.0);
    body.velocity = Vec3::new(2.0, 0.0, 0.0);
    let entity = world.spawn((Transform::default(), body)).id();

    manage_world(&mut world, 1.0);

    let transform = world.get::<Transform>(entity).unwrap();
    assert!(approx_eq(transform.translation.x, 1.0));
}
