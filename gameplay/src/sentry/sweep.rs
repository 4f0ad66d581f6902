use bevy_math::{Quat, Vec3};

use crate::constants::SWEEP_BOUNDARY_EPSILON;

// ============================================================================
// Sweep State Machine
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SweepState {
    Sweeping,
    Paused,
}

// Oscillates an angle between the two ends of an arc, holding still for a
// configured pause at each end. Owns nothing but the angle and its timers;
// the sentry composes the result into a world rotation.
#[derive(Debug, Clone)]
pub struct SweepController {
    arc_degrees: f32,
    speed_deg_per_sec: f32,
    pause_seconds: f32,
    angle: f32,
    direction: f32,
    state: SweepState,
    pause_timer: f32,
}

impl SweepController {
    #[must_use]
    pub fn new(arc_degrees: f32, speed_deg_per_sec: f32, pause_seconds: f32) -> Self {
        Self {
            arc_degrees: arc_degrees.max(0.0),
            speed_deg_per_sec: speed_deg_per_sec.max(0.0),
            pause_seconds: pause_seconds.max(0.0),
            angle: 0.0,
            direction: 1.0,
            state: SweepState::Sweeping,
            pause_timer: 0.0,
        }
    }

    // Advance the machine by one tick. While sweeping the angle is clamped to
    // the arc, so an oversized delta overshoots into the boundary instead of
    // past it; the boundary test tolerates the step landing slightly short.
    pub fn advance(&mut self, delta: f32) {
        match self.state {
            SweepState::Paused => {
                self.pause_timer += delta;
                if self.pause_timer >= self.pause_seconds {
                    self.pause_timer = 0.0;
                    self.direction = -self.direction;
                    self.state = SweepState::Sweeping;
                }
            }
            SweepState::Sweeping => {
                let half = self.arc_degrees * 0.5;
                let step = self.speed_deg_per_sec * delta * self.direction;
                self.angle = (self.angle + step).clamp(-half, half);

                // Latch only while moving toward the near boundary; right after
                // a flip the angle still sits on the boundary it just left.
                if self.direction * self.angle > 0.0
                    && half - self.angle.abs() <= SWEEP_BOUNDARY_EPSILON
                {
                    self.angle = half * self.direction;
                    self.state = SweepState::Paused;
                    self.pause_timer = 0.0;
                }
            }
        }
    }

    // Current world rotation: base frame, then the sweep about `axis`. A fixed
    // head tilt composes after this so sweeping never perturbs the tilt.
    #[must_use]
    pub fn rotation(&self, base: Quat, axis: Vec3) -> Quat {
        base * Quat::from_axis_angle(axis, self.angle.to_radians())
    }

    #[must_use]
    pub const fn angle(&self) -> f32 {
        self.angle
    }

    #[must_use]
    pub const fn direction(&self) -> f32 {
        self.direction
    }

    #[must_use]
    pub const fn state(&self) -> SweepState {
        self.state
    }
}
