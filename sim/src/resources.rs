use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::AtomicUsize;

use bevy_ecs::prelude::*;
use bevy_math::Vec3;
use rand::rngs::StdRng;

use gameplay::{HealthBook, LivesCounter, Obstacles, Sentry, TargetId, WindFan};

// ============================================================================
// Resources
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SentryId(pub u32);

// Static solid geometry of the loaded scenario.
#[derive(Resource, Default)]
pub struct WorldGeometry(pub Obstacles);

// All security cameras, one rig per placement.
#[derive(Resource, Default)]
pub struct SentryMap(pub HashMap<SentryId, Sentry>);

// All wind fans.
#[derive(Resource, Default)]
pub struct FanMap(pub Vec<WindFan>);

// Hearts for every player, shared damage sink for all sentries.
#[derive(Resource, Default)]
pub struct HealthState(pub HealthBook);

// Per-player lives counters.
#[derive(Resource, Default)]
pub struct LivesState(pub HashMap<TargetId, LivesCounter>);

// Where each player reappears after losing a life.
#[derive(Resource, Default)]
pub struct SpawnPoints(pub HashMap<TargetId, Vec3>);

// Playable area half-extents in the XZ plane.
#[derive(Resource)]
pub struct FieldBounds {
    pub half_x: f32,
    pub half_z: f32,
}

// Seeded randomness for the wander system.
#[derive(Resource)]
pub struct WanderRng(pub StdRng);

// Raised when any player runs out of lives; the host loop stops on it.
#[derive(Resource, Default)]
pub struct GameOverFlag(pub bool);

// Total catches across all sentries, bumped from detection listeners.
#[derive(Resource, Default)]
pub struct CatchCounter(pub Arc<AtomicUsize>);
