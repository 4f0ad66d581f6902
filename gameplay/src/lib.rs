//! Gameplay behaviors for a small two-player stealth platformer: the
//! security-camera detection core (sweep, vision, occlusion, per-target
//! cooldowns), NPC waypoint patrol, wind fans, and health/lives bookkeeping.
//! Everything is host-agnostic: a tick-driven host supplies the clock, the
//! world geometry and the entity state.

pub mod components;
pub mod config;
pub mod constants;
pub mod fan;
pub mod geometry;
pub mod health;
pub mod layers;
pub mod patrol;
pub mod sentry;
pub mod world;

pub use components::TargetId;
pub use config::{FanConfig, PatrolConfig, SentryConfig};
pub use fan::WindFan;
pub use geometry::{Aabb, Obstacles};
pub use health::{HealthBook, LifeOutcome, LivesCounter};
pub use layers::Layers;
pub use patrol::PatrolController;
pub use sentry::{Detection, Sentry, SweepState};
pub use world::{DamageSink, SpatialQuery, TargetSnapshot, WorldView};
