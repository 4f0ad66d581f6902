use std::collections::HashMap;

use crate::components::TargetId;

// ============================================================================
// Per-Target Cooldowns
// ============================================================================

// Throttles detection side effects per target: after a catch the same target
// cannot be caught again until the cooldown elapses. Keyed by stable target
// identity; no record means "always ready". Records are removed through
// `prune` when the host despawns a target, so the table tracks live targets
// instead of growing for the whole session.
#[derive(Debug, Clone, Default)]
pub struct CooldownTracker {
    cooldown_seconds: f64,
    ready_at: HashMap<TargetId, f64>,
}

impl CooldownTracker {
    #[must_use]
    pub fn new(cooldown_seconds: f32) -> Self {
        Self {
            cooldown_seconds: f64::from(cooldown_seconds.max(0.0)),
            ready_at: HashMap::new(),
        }
    }

    #[must_use]
    pub fn is_ready(&self, target: TargetId, now: f64) -> bool {
        self.ready_at.get(&target).is_none_or(|&at| now >= at)
    }

    pub fn trigger(&mut self, target: TargetId, now: f64) {
        self.ready_at.insert(target, now + self.cooldown_seconds);
    }

    pub fn prune(&mut self, target: TargetId) {
        self.ready_at.remove(&target);
    }

    #[must_use]
    pub fn tracked(&self) -> usize {
        self.ready_at.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_target_is_always_ready() {
        let tracker = CooldownTracker::new(1.5);
        assert!(tracker.is_ready(TargetId(1), 0.0));
    }

    #[test]
    fn cooldown_window_is_closed_left_open_right() {
        let mut tracker = CooldownTracker::new(1.5);
        tracker.trigger(TargetId(1), 10.0);

        assert!(!tracker.is_ready(TargetId(1), 10.0));
        assert!(!tracker.is_ready(TargetId(1), 11.499));
        assert!(tracker.is_ready(TargetId(1), 11.5));
        assert!(tracker.is_ready(TargetId(1), 12.0));
    }

    #[test]
    fn targets_cool_down_independently() {
        let mut tracker = CooldownTracker::new(2.0);
        tracker.trigger(TargetId(1), 0.0);
        tracker.trigger(TargetId(2), 1.0);

        assert!(tracker.is_ready(TargetId(1), 2.0));
        assert!(!tracker.is_ready(TargetId(2), 2.0));
        assert!(tracker.is_ready(TargetId(2), 3.0));
    }

    #[test]
    fn zero_cooldown_means_always_ready() {
        let mut tracker = CooldownTracker::new(0.0);
        tracker.trigger(TargetId(1), 5.0);
        assert!(tracker.is_ready(TargetId(1), 5.0));
    }

    #[test]
    fn prune_drops_the_record() {
        let mut tracker = CooldownTracker::new(10.0);
        tracker.trigger(TargetId(1), 0.0);
        assert_eq!(tracker.tracked(), 1);
        assert!(!tracker.is_ready(TargetId(1), 1.0));

        tracker.prune(TargetId(1));
        assert_eq!(tracker.tracked(), 0);
        assert!(tracker.is_ready(TargetId(1), 1.0));
    }
}
