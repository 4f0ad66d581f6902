use bevy_ecs::prelude::*;
use bevy_math::Vec3;
use bevy_time::Time;
use tracing::{debug, info};

use gameplay::{
    LifeOutcome, TargetSnapshot, WorldView,
    components::{Layered, PlayerMarker, Position, TargetId, Velocity},
};

use crate::resources::{GameOverFlag, HealthState, LivesState, SentryMap, SpawnPoints, WorldGeometry};

// ============================================================================
// Sentry Detection System
// ============================================================================

// One detection pass per tick: snapshot target state once, hand every sentry
// the same frozen view, then settle the fallout (hearts, lives, respawns).
// Each sentry advances its own sweep inside `tick`, so vision always runs
// with that tick's post-advance heading.
pub fn sentries_detection_system(
    mut commands: Commands,
    time: Res<Time>,
    geometry: Res<WorldGeometry>,
    spawns: Res<SpawnPoints>,
    mut sentries: ResMut<SentryMap>,
    mut health: ResMut<HealthState>,
    mut lives: ResMut<LivesState>,
    mut game_over: ResMut<GameOverFlag>,
    mut players: Query<(Entity, &TargetId, &mut Position, &mut Velocity, &Layered), With<PlayerMarker>>,
) {
    let delta = time.delta_secs();
    let now = time.elapsed_secs_f64();

    let snapshot: Vec<TargetSnapshot> = players
        .iter()
        .map(|(_, id, position, _, layered)| TargetSnapshot {
            id: *id,
            position: position.0,
            layers: layered.0,
        })
        .collect();
    let view = WorldView {
        obstacles: &geometry.0,
        targets: &snapshot,
    };

    for (sentry_id, sentry) in &mut sentries.0 {
        for detection in sentry.tick(delta, now, &view, Some(&mut health.0)) {
            debug!(
                sentry = sentry_id.0,
                target = detection.target.0,
                distance = detection.distance,
                "sentry caught a target"
            );
        }
    }

    // Depleted hearts cost a life; a remaining life respawns the player with
    // full hearts, the last one ends the run.
    for (entity, id, mut position, mut velocity, _) in &mut players {
        if !health.0.is_depleted(*id) {
            continue;
        }
        let Some(counter) = lives.0.get_mut(id) else {
            continue;
        };

        match counter.lose_life() {
            LifeOutcome::Respawn => {
                if let Some(spawn) = spawns.0.get(id) {
                    position.0 = *spawn;
                    velocity.0 = Vec3::ZERO;
                }
                health.0.refill(*id);
                info!(player = id.0, lives = counter.current(), "player caught, respawning");
            }
            LifeOutcome::GameOver => {
                info!(player = id.0, "player out of lives");
                health.0.unregister(*id);
                for sentry in sentries.0.values_mut() {
                    sentry.forget_target(*id);
                }
                commands.entity(entity).despawn();
                game_over.0 = true;
            }
        }
    }
}
