#[cfg(feature = "json")]
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::{constants::*, layers::Layers};

// ============================================================================
// Sentry Configuration
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "json", derive(Serialize, Deserialize), serde(default))]
pub struct SentryConfig {
    // Full sweep arc in degrees; the head oscillates within +/- half of it.
    pub sweep_arc_degrees: f32,
    pub sweep_speed_deg_per_sec: f32,
    pub pause_at_ends_seconds: f32,
    pub view_distance: f32,
    pub view_half_angle_degrees: f32,
    pub obstruction_mask: Layers,
    pub target_mask: Layers,
    pub damage_amount: i32,
    pub hit_cooldown_seconds: f32,
}

impl Default for SentryConfig {
    fn default() -> Self {
        Self {
            sweep_arc_degrees: SENTRY_SWEEP_ARC,
            sweep_speed_deg_per_sec: SENTRY_SWEEP_SPEED,
            pause_at_ends_seconds: SENTRY_PAUSE_AT_ENDS,
            view_distance: SENTRY_VIEW_DISTANCE,
            view_half_angle_degrees: SENTRY_VIEW_HALF_ANGLE,
            obstruction_mask: Layers::ENVIRONMENT,
            target_mask: Layers::PLAYERS,
            damage_amount: SENTRY_DAMAGE,
            hit_cooldown_seconds: SENTRY_HIT_COOLDOWN,
        }
    }
}

impl SentryConfig {
    // Clamp degenerate values into safe ranges, warning once at construction.
    // Misconfiguration must never fault the tick loop, so everything here
    // resolves to a trivial behavior (stationary sweep, zero-range vision, no
    // cooldown) instead of an error.
    #[must_use]
    pub fn validated(mut self) -> Self {
        self.sweep_arc_degrees = clamp_non_negative("sweep_arc_degrees", self.sweep_arc_degrees);
        self.sweep_speed_deg_per_sec = clamp_non_negative("sweep_speed_deg_per_sec", self.sweep_speed_deg_per_sec);
        self.pause_at_ends_seconds = clamp_non_negative("pause_at_ends_seconds", self.pause_at_ends_seconds);
        self.view_distance = clamp_non_negative("view_distance", self.view_distance);
        self.hit_cooldown_seconds = clamp_non_negative("hit_cooldown_seconds", self.hit_cooldown_seconds);

        if !self.view_half_angle_degrees.is_finite() || !(0.0..=180.0).contains(&self.view_half_angle_degrees) {
            warn!(
                value = self.view_half_angle_degrees,
                "view_half_angle_degrees outside [0, 180], clamping"
            );
            self.view_half_angle_degrees = self.view_half_angle_degrees.clamp(0.0, 180.0);
            if !self.view_half_angle_degrees.is_finite() {
                self.view_half_angle_degrees = 0.0;
            }
        }

        if self.damage_amount < 0 {
            warn!(value = self.damage_amount, "negative damage_amount, clamping to 0");
            self.damage_amount = 0;
        }

        if self.target_mask.is_empty() {
            warn!("empty target_mask, sentry will never detect anything");
        }

        self
    }
}

fn clamp_non_negative(name: &str, value: f32) -> f32 {
    if value.is_finite() && value >= 0.0 {
        value
    } else {
        warn!(field = name, value, "non-finite or negative value, clamping to 0");
        0.0
    }
}

// ============================================================================
// NPC Patrol Configuration
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "json", derive(Serialize, Deserialize), serde(default))]
pub struct PatrolConfig {
    pub arrive_distance: f32,
    pub wait_at_point_seconds: f32,
    pub walk_speed: f32,
    pub turn_speed_deg_per_sec: f32,
    // Bounce back and forth; off = loop around.
    pub ping_pong: bool,
}

impl Default for PatrolConfig {
    fn default() -> Self {
        Self {
            arrive_distance: PATROL_ARRIVE_DISTANCE,
            wait_at_point_seconds: PATROL_WAIT_AT_POINT,
            walk_speed: PATROL_WALK_SPEED,
            turn_speed_deg_per_sec: PATROL_TURN_SPEED,
            ping_pong: true,
        }
    }
}

// ============================================================================
// Wind Fan Configuration
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "json", derive(Serialize, Deserialize), serde(default))]
pub struct FanConfig {
    pub max_acceleration: f32,
    pub affected_mask: Layers,
    pub occluder_mask: Layers,
    pub face_offset: f32,
    pub probe_radius: f32,
    pub turbulence: f32,
    pub turbulence_frequency: f32,
}

impl Default for FanConfig {
    fn default() -> Self {
        Self {
            max_acceleration: FAN_MAX_ACCELERATION,
            affected_mask: Layers::ALL,
            occluder_mask: Layers::ENVIRONMENT,
            face_offset: FAN_FACE_OFFSET,
            probe_radius: FAN_PROBE_RADIUS,
            turbulence: 0.0,
            turbulence_frequency: FAN_TURBULENCE_FREQUENCY,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn degenerate_values_clamp_to_trivial_behavior() {
        let config = SentryConfig {
            sweep_arc_degrees: -10.0,
            view_distance: f32::NAN,
            hit_cooldown_seconds: -1.0,
            view_half_angle_degrees: 400.0,
            damage_amount: -3,
            ..SentryConfig::default()
        }
        .validated();

        assert_eq!(config.sweep_arc_degrees, 0.0);
        assert_eq!(config.view_distance, 0.0);
        assert_eq!(config.hit_cooldown_seconds, 0.0);
        assert_eq!(config.view_half_angle_degrees, 180.0);
        assert_eq!(config.damage_amount, 0);
    }

    #[test]
    fn valid_config_passes_through_unchanged() {
        let config = SentryConfig::default();
        assert_eq!(config.clone().validated(), config);
    }
}
