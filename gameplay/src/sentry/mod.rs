pub mod cooldown;
pub mod sweep;
pub mod vision;

pub use cooldown::CooldownTracker;
pub use sweep::{SweepController, SweepState};
pub use vision::{Detection, visible_targets};

use bevy_math::{Quat, Vec3};

use crate::{
    components::TargetId,
    config::SentryConfig,
    constants::PHYSICS_EPSILON,
    world::{DamageSink, SpatialQuery},
};

// Listeners run synchronously on the tick that catches a target.
pub type DetectionListener = Box<dyn FnMut(&Detection) + Send + Sync>;

// ============================================================================
// Sentry
// ============================================================================

// A security camera: sweeps its head across an arc, spots targets inside its
// view cone, and throttles the fallout per target. The spatial world and the
// damage sink are handed in explicitly; whether a sink is attached is the
// only difference between an alarm-only camera and one that hurts.
pub struct Sentry {
    config: SentryConfig,
    position: Vec3,
    base_rotation: Quat,
    sweep_axis: Vec3,
    head_tilt: Quat,
    sweep: SweepController,
    cooldowns: CooldownTracker,
    listeners: Vec<DetectionListener>,
}

impl Sentry {
    #[must_use]
    pub fn new(config: SentryConfig, position: Vec3, base_rotation: Quat) -> Self {
        let config = config.validated();
        let sweep = SweepController::new(
            config.sweep_arc_degrees,
            config.sweep_speed_deg_per_sec,
            config.pause_at_ends_seconds,
        );
        let cooldowns = CooldownTracker::new(config.hit_cooldown_seconds);
        Self {
            config,
            position,
            base_rotation,
            sweep_axis: Vec3::Y,
            head_tilt: Quat::IDENTITY,
            sweep,
            cooldowns,
            listeners: Vec::new(),
        }
    }

    // Fixed tilt of the visible head (e.g. angled down at a walkway). Applied
    // after the sweep rotation, so the sweep never disturbs it.
    #[must_use]
    pub fn with_head_tilt(mut self, tilt: Quat) -> Self {
        self.head_tilt = tilt;
        self
    }

    #[must_use]
    pub fn with_sweep_axis(mut self, axis: Vec3) -> Self {
        self.sweep_axis = if axis.length_squared() > PHYSICS_EPSILON {
            axis.normalize()
        } else {
            Vec3::Y
        };
        self
    }

    // Register before ticking begins; every listener fires once per caught
    // target per tick.
    pub fn on_target_detected(&mut self, listener: impl FnMut(&Detection) + Send + Sync + 'static) {
        self.listeners.push(Box::new(listener));
    }

    // Direction the head currently looks along.
    #[must_use]
    pub fn head_forward(&self) -> Vec3 {
        (self.sweep.rotation(self.base_rotation, self.sweep_axis) * self.head_tilt) * Vec3::Z
    }

    // Vision only, no state change: what the head sees right now.
    #[must_use]
    pub fn query(&self, world: &dyn SpatialQuery) -> Vec<Detection> {
        visible_targets(world, self.position, self.head_forward(), &self.config)
    }

    // One frame of sentry behavior: advance the sweep, then run vision with
    // the post-advance heading, then dispatch per-target fallout. Targets
    // still cooling down are seen but produce no side effect. Returns the
    // targets actually caught this tick.
    pub fn tick(
        &mut self,
        delta: f32,
        now: f64,
        world: &dyn SpatialQuery,
        mut damage: Option<&mut dyn DamageSink>,
    ) -> Vec<Detection> {
        self.sweep.advance(delta);

        let mut caught = Vec::new();
        for detection in self.query(world) {
            if !self.cooldowns.is_ready(detection.target, now) {
                continue;
            }
            if let Some(sink) = damage.as_deref_mut() {
                sink.apply_damage(detection.target, self.config.damage_amount);
            }
            self.cooldowns.trigger(detection.target, now);
            for listener in &mut self.listeners {
                listener(&detection);
            }
            caught.push(detection);
        }
        caught
    }

    // Drop per-target state when the host despawns a target.
    pub fn forget_target(&mut self, target: TargetId) {
        self.cooldowns.prune(target);
    }

    #[must_use]
    pub const fn position(&self) -> Vec3 {
        self.position
    }

    #[must_use]
    pub const fn config(&self) -> &SentryConfig {
        &self.config
    }

    #[must_use]
    pub const fn sweep_angle(&self) -> f32 {
        self.sweep.angle()
    }

    #[must_use]
    pub const fn sweep_state(&self) -> SweepState {
        self.sweep.state()
    }

    #[must_use]
    pub fn tracked_cooldowns(&self) -> usize {
        self.cooldowns.tracked()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    };

    use super::*;
    use crate::{
        geometry::Obstacles,
        layers::Layers,
        world::{TargetSnapshot, WorldView},
    };

    #[derive(Default)]
    struct RecordingSink(Vec<(TargetId, i32)>);

    impl DamageSink for RecordingSink {
        fn apply_damage(&mut self, target: TargetId, amount: i32) {
            self.0.push((target, amount));
        }
    }

    fn player(id: u32, position: Vec3) -> TargetSnapshot {
        TargetSnapshot {
            id: TargetId(id),
            position,
            layers: Layers::PLAYERS,
        }
    }

    // Sentry that never moves its head, so tests control geometry alone.
    fn static_sentry() -> Sentry {
        let config = SentryConfig {
            sweep_arc_degrees: 0.0,
            sweep_speed_deg_per_sec: 0.0,
            hit_cooldown_seconds: 1.5,
            ..SentryConfig::default()
        };
        Sentry::new(config, Vec3::ZERO, Quat::IDENTITY)
    }

    #[test]
    fn catch_applies_damage_and_fires_listeners_once() {
        let obstacles = Obstacles::default();
        let targets = [player(1, Vec3::new(2.0, 0.0, 10.0))];
        let view = WorldView {
            obstacles: &obstacles,
            targets: &targets,
        };

        let fired = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&fired);

        let mut sentry = static_sentry();
        sentry.on_target_detected(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        let mut sink = RecordingSink::default();
        let caught = sentry.tick(0.033, 0.0, &view, Some(&mut sink));

        assert_eq!(caught.len(), 1);
        assert_eq!(sink.0, vec![(TargetId(1), 1)]);
        assert_eq!(fired.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn cooldown_suppresses_side_effects_until_elapsed() {
        let obstacles = Obstacles::default();
        let targets = [player(1, Vec3::new(0.0, 0.0, 8.0))];
        let view = WorldView {
            obstacles: &obstacles,
            targets: &targets,
        };

        let mut sentry = static_sentry();
        let mut sink = RecordingSink::default();

        assert_eq!(sentry.tick(0.033, 0.0, &view, Some(&mut sink)).len(), 1);
        // Seen but throttled inside the window.
        assert!(sentry.tick(0.033, 0.5, &view, Some(&mut sink)).is_empty());
        assert!(sentry.tick(0.033, 1.499, &view, Some(&mut sink)).is_empty());
        // Eligible again at exactly t0 + cooldown.
        assert_eq!(sentry.tick(0.033, 1.5, &view, Some(&mut sink)).len(), 1);
        assert_eq!(sink.0.len(), 2);
    }

    #[test]
    fn simultaneous_targets_get_independent_events_and_cooldowns() {
        let obstacles = Obstacles::default();
        let both = [player(1, Vec3::new(1.0, 0.0, 8.0)), player(2, Vec3::new(-1.0, 0.0, 8.0))];
        let only_second = [player(2, Vec3::new(-1.0, 0.0, 8.0))];
        let view_both = WorldView {
            obstacles: &obstacles,
            targets: &both,
        };
        let view_second = WorldView {
            obstacles: &obstacles,
            targets: &only_second,
        };

        let mut sentry = static_sentry();
        let mut sink = RecordingSink::default();

        let caught = sentry.tick(0.033, 0.0, &view_both, Some(&mut sink));
        assert_eq!(caught.len(), 2);
        assert_eq!(sink.0.len(), 2);

        // Second catch of target 2 at a later time must not be gated by
        // target 1's cooldown.
        sentry.forget_target(TargetId(2));
        let caught = sentry.tick(0.033, 0.5, &view_second, Some(&mut sink));
        assert_eq!(caught.len(), 1);
        assert_eq!(caught[0].target, TargetId(2));
    }

    #[test]
    fn no_damage_sink_still_raises_events() {
        let obstacles = Obstacles::default();
        let targets = [player(1, Vec3::new(0.0, 0.0, 8.0))];
        let view = WorldView {
            obstacles: &obstacles,
            targets: &targets,
        };

        let fired = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&fired);

        let mut sentry = static_sentry();
        sentry.on_target_detected(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        let caught = sentry.tick(0.033, 0.0, &view, None);
        assert_eq!(caught.len(), 1);
        assert_eq!(fired.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn sweep_advances_before_vision_runs() {
        // Target sits at +30 degrees, on the boundary the sweep reaches after
        // exactly one second. Detection on that very tick proves vision ran
        // with the post-advance heading.
        let config = SentryConfig {
            view_half_angle_degrees: 1.0,
            ..SentryConfig::default()
        };
        let mut sentry = Sentry::new(config, Vec3::ZERO, Quat::IDENTITY);

        let obstacles = Obstacles::default();
        let position = Quat::from_rotation_y(30.0_f32.to_radians()) * (Vec3::Z * 8.0);
        let targets = [player(1, position)];
        let view = WorldView {
            obstacles: &obstacles,
            targets: &targets,
        };

        assert!(sentry.tick(0.75, 0.0, &view, None).is_empty());
        let caught = sentry.tick(0.25, 0.25, &view, None);
        assert_eq!(caught.len(), 1);
        assert_eq!(sentry.sweep_angle(), 30.0);
    }

    #[test]
    fn head_tilt_survives_the_full_sweep() {
        // A downward tilt composes after the sweep, so the pitch of the head
        // must be identical at both arc extremes.
        let config = SentryConfig::default(); // 60 degree arc, 30 deg/s
        let tilt = Quat::from_rotation_x(15.0_f32.to_radians());
        let mut sentry = Sentry::new(config, Vec3::ZERO, Quat::IDENTITY).with_head_tilt(tilt);

        let pitch = (tilt * Vec3::Z).y;
        let obstacles = Obstacles::default();
        let empty = WorldView {
            obstacles: &obstacles,
            targets: &[],
        };

        sentry.tick(1.0, 0.0, &empty, None); // +30 boundary
        assert_eq!(sentry.sweep_angle(), 30.0);
        let at_plus = sentry.head_forward();

        sentry.tick(0.35, 1.0, &empty, None); // pause elapses, direction flips
        sentry.tick(2.0, 1.35, &empty, None); // clamp lands on -30
        assert_eq!(sentry.sweep_angle(), -30.0);
        let at_minus = sentry.head_forward();

        assert!((at_plus.y - pitch).abs() < 1e-5);
        assert!((at_minus.y - pitch).abs() < 1e-5);
        // The sweep still pans the head horizontally between the extremes.
        assert!((at_plus.x - at_minus.x).abs() > 0.5);
    }

    #[test]
    fn sweep_axis_override_pans_about_that_axis() {
        let config = SentryConfig::default();
        let mut sentry = Sentry::new(config, Vec3::ZERO, Quat::IDENTITY).with_sweep_axis(Vec3::X);

        let obstacles = Obstacles::default();
        let empty = WorldView {
            obstacles: &obstacles,
            targets: &[],
        };
        sentry.tick(1.0, 0.0, &empty, None); // +30 about X
        let forward = sentry.head_forward();
        let expected = Quat::from_rotation_x(30.0_f32.to_radians()) * Vec3::Z;
        assert!(forward.abs_diff_eq(expected, 1e-5));
    }

    #[test]
    fn forget_target_clears_cooldown_state() {
        let obstacles = Obstacles::default();
        let targets = [player(1, Vec3::new(0.0, 0.0, 8.0))];
        let view = WorldView {
            obstacles: &obstacles,
            targets: &targets,
        };

        let mut sentry = static_sentry();
        sentry.tick(0.033, 0.0, &view, None);
        assert_eq!(sentry.tracked_cooldowns(), 1);

        sentry.forget_target(TargetId(1));
        assert_eq!(sentry.tracked_cooldowns(), 0);
    }
}
