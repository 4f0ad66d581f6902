use bevy_ecs::prelude::*;
use bevy_math::Vec3;

use crate::layers::Layers;

// ============================================================================
// Shared Game Components
// ============================================================================

// World position in meters.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Position(pub Vec3);

// Movement in meters per second.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq)]
pub struct Velocity(pub Vec3);

// Yaw heading in radians (0 faces +Z, positive turns toward +X).
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct FaceDirection(pub f32);

// Stable identity for anything a sentry can catch. Keys per-target state
// (cooldowns, hearts), independent of the entity's transient position.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TargetId(pub u32);

// Layer classification carried by detectable entities.
#[derive(Component, Debug, Clone, Copy)]
pub struct Layered(pub Layers);

// ============================================================================
// Markers
// ============================================================================

// Marker components to disambiguate entity archetypes.
#[derive(Component, Debug, Default)]
pub struct PlayerMarker;

#[derive(Component, Debug, Default)]
pub struct NpcMarker;

#[derive(Component, Debug, Default)]
pub struct SentryMarker;
