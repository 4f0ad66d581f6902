use std::time::Duration;

use bevy_math::Vec3;
use bevy_time::{Timer, TimerMode};

use crate::{config::PatrolConfig, constants::PHYSICS_EPSILON};

// ============================================================================
// Waypoint Patrol
// ============================================================================

// Walks an NPC along a fixed route: head for the current waypoint, wait a
// beat on arrival, then take the next one - bouncing at the ends or looping
// around, per config. Heading eases toward the move direction at the
// configured turn rate. Vertical motion is the host's problem; the route is
// followed in the XZ plane.
pub struct PatrolController {
    config: PatrolConfig,
    waypoints: Vec<Vec3>,
    index: usize,
    direction: i64,
    wait: Timer,
}

impl PatrolController {
    #[must_use]
    pub fn new(config: PatrolConfig, waypoints: Vec<Vec3>) -> Self {
        let mut wait = Timer::from_seconds(config.wait_at_point_seconds.max(0.0), TimerMode::Once);
        // Start already walking; the first wait happens at the first arrival.
        let duration = wait.duration();
        wait.tick(duration);
        Self {
            config,
            waypoints,
            index: 0,
            direction: 1,
            wait,
        }
    }

    // Advance one tick, steering `position` and `yaw`. Returns the current
    // walk speed (zero while waiting), which hosts can feed to animation.
    pub fn tick(&mut self, delta: f32, position: &mut Vec3, yaw: &mut f32) -> f32 {
        if self.waypoints.is_empty() {
            return 0.0;
        }

        if !self.wait.is_finished() {
            self.wait.tick(Duration::from_secs_f32(delta.max(0.0)));
            return 0.0;
        }

        let target = self.waypoints[self.index];
        let mut to = target - *position;
        to.y = 0.0;
        let distance = to.length();

        if distance > PHYSICS_EPSILON {
            let dir = to / distance;
            let desired_yaw = dir.x.atan2(dir.z);
            let max_turn = self.config.turn_speed_deg_per_sec.to_radians() * delta;
            *yaw = rotate_towards(*yaw, desired_yaw, max_turn);

            let step = (self.config.walk_speed * delta).min(distance);
            *position += dir * step;
        }

        let remaining = {
            let mut left = target - *position;
            left.y = 0.0;
            left.length()
        };

        if remaining <= self.config.arrive_distance {
            self.wait.reset();
            self.advance_waypoint();
            return 0.0;
        }

        self.config.walk_speed
    }

    #[must_use]
    pub fn current_waypoint(&self) -> Option<Vec3> {
        self.waypoints.get(self.index).copied()
    }

    fn advance_waypoint(&mut self) {
        let last = self.waypoints.len() - 1;
        if self.config.ping_pong {
            if self.waypoints.len() < 2 {
                return;
            }
            if self.index == 0 {
                self.direction = 1;
            } else if self.index == last {
                self.direction = -1;
            }
            self.index = self.index.wrapping_add_signed(self.direction as isize);
        } else {
            self.index = (self.index + 1) % self.waypoints.len();
        }
    }
}

// Move `current` toward `target` by at most `max_step`, taking the short way
// around the circle. Angles in radians.
fn rotate_towards(current: f32, target: f32, max_step: f32) -> f32 {
    let mut diff = (target - current) % std::f32::consts::TAU;
    if diff > std::f32::consts::PI {
        diff -= std::f32::consts::TAU;
    } else if diff < -std::f32::consts::PI {
        diff += std::f32::consts::TAU;
    }
    current + diff.clamp(-max_step, max_step)
}
