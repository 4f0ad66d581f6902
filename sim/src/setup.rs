use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use bevy_ecs::prelude::*;
use bevy_math::{Quat, Vec3};
use bevy_time::Time;
use rand::SeedableRng as _;
use rand::rngs::StdRng;
use tracing::info;

use gameplay::{
    HealthBook, LivesCounter, Obstacles, PatrolController, Sentry, WindFan,
    components::{FaceDirection, Layered, NpcMarker, PlayerMarker, Position, TargetId, Velocity},
    constants::{MAX_HEARTS, MAX_LIVES},
    geometry::Aabb,
    layers::Layers,
};

use crate::{
    components::Patrol,
    resources::*,
    scenario::Scenario,
    systems::{fans_wind_system, npcs_patrol_system, players_wander_system, sentries_detection_system},
};

// ============================================================================
// World Construction
// ============================================================================

fn vec3(a: [f32; 3]) -> Vec3 {
    Vec3::from_array(a)
}

// Build the ECS world and the fixed-order tick schedule from a scenario.
pub fn build_world(scenario: &Scenario, seed: u64) -> (World, Schedule) {
    let mut world = World::new();

    let obstacles = Obstacles(
        scenario
            .walls
            .iter()
            .map(|wall| Aabb::from_corners(vec3(wall.min), vec3(wall.max), Layers::ENVIRONMENT))
            .collect(),
    );
    info!(walls = obstacles.0.len(), "loaded scenario geometry");

    let catch_counter = Arc::new(AtomicUsize::new(0));

    // Sentries, with listeners wired up before the first tick.
    let mut sentries = HashMap::new();
    for spec in &scenario.sentries {
        let base = Quat::from_rotation_y(spec.yaw_degrees.to_radians());
        let tilt = Quat::from_rotation_x(spec.tilt_degrees.to_radians());
        let mut sentry = Sentry::new(spec.config.clone(), vec3(spec.position), base).with_head_tilt(tilt);

        let counter = Arc::clone(&catch_counter);
        let sentry_label = spec.id;
        sentry.on_target_detected(move |detection| {
            counter.fetch_add(1, Ordering::Relaxed);
            info!(
                sentry = sentry_label,
                target = detection.target.0,
                distance = detection.distance,
                "security camera alarm"
            );
        });

        sentries.insert(SentryId(spec.id), sentry);
    }

    // Players: hearts, lives, spawn points, wandering bodies.
    let mut health = HealthBook::new(MAX_HEARTS);
    let mut lives = HashMap::new();
    let mut spawns = HashMap::new();
    for player in &scenario.players {
        let id = TargetId(player.id);
        let spawn = vec3(player.spawn);

        health.register(id);
        let mut counter = LivesCounter::new(MAX_LIVES);
        let label = player.id;
        counter.on_lives_changed(move |current| {
            info!(player = label, lives = current, "lives changed");
        });
        lives.insert(id, counter);
        spawns.insert(id, spawn);

        world.spawn((
            PlayerMarker,
            id,
            Position(spawn),
            Velocity::default(),
            FaceDirection::default(),
            Layered(Layers::PLAYERS),
        ));
    }

    for npc in &scenario.npcs {
        let route: Vec<Vec3> = npc.route.iter().copied().map(vec3).collect();
        let start = route.first().copied().unwrap_or(Vec3::ZERO);
        world.spawn((
            NpcMarker,
            Patrol(PatrolController::new(npc.config.clone(), route)),
            Position(start),
            FaceDirection::default(),
            Layered(Layers::NPCS),
        ));
    }

    let fans = scenario
        .fans
        .iter()
        .map(|spec| {
            WindFan::new(
                spec.config.clone(),
                vec3(spec.position),
                Quat::from_rotation_y(spec.yaw_degrees.to_radians()),
                spec.half_width,
                spec.half_height,
                spec.depth,
            )
        })
        .collect();

    world.insert_resource(Time::<()>::default());
    world.insert_resource(WorldGeometry(obstacles));
    world.insert_resource(SentryMap(sentries));
    world.insert_resource(FanMap(fans));
    world.insert_resource(HealthState(health));
    world.insert_resource(LivesState(lives));
    world.insert_resource(SpawnPoints(spawns));
    world.insert_resource(FieldBounds {
        half_x: scenario.bounds[0],
        half_z: scenario.bounds[1],
    });
    world.insert_resource(WanderRng(StdRng::seed_from_u64(seed)));
    world.insert_resource(GameOverFlag::default());
    world.insert_resource(CatchCounter(catch_counter));

    let mut schedule = Schedule::default();
    schedule.add_systems(
        (
            players_wander_system,
            npcs_patrol_system,
            fans_wind_system,
            sentries_detection_system,
        )
            .chain(),
    );

    (world, schedule)
}
