use std::collections::HashMap;

use crate::{components::TargetId, constants::{MAX_HEARTS, MAX_LIVES}, world::DamageSink};

// ============================================================================
// Hearts
// ============================================================================

// Per-target hearts bookkeeping. Implements the damage-receiving side of a
// sentry catch; rendering the hearts is someone else's job.
#[derive(Debug, Clone)]
pub struct HealthBook {
    max_hearts: i32,
    hearts: HashMap<TargetId, i32>,
}

impl HealthBook {
    #[must_use]
    pub fn new(max_hearts: i32) -> Self {
        Self {
            max_hearts: max_hearts.max(1),
            hearts: HashMap::new(),
        }
    }

    // Start tracking a target at full hearts.
    pub fn register(&mut self, target: TargetId) {
        self.hearts.insert(target, self.max_hearts);
    }

    pub fn unregister(&mut self, target: TargetId) {
        self.hearts.remove(&target);
    }

    // Unregistered targets read as full; damage is only booked for
    // registered ones.
    #[must_use]
    pub fn hearts(&self, target: TargetId) -> i32 {
        self.hearts.get(&target).copied().unwrap_or(self.max_hearts)
    }

    pub fn set_hearts(&mut self, target: TargetId, value: i32) {
        self.hearts.insert(target, value.clamp(0, self.max_hearts));
    }

    #[must_use]
    pub fn is_depleted(&self, target: TargetId) -> bool {
        self.hearts(target) <= 0
    }

    pub fn refill(&mut self, target: TargetId) {
        self.set_hearts(target, self.max_hearts);
    }

    #[must_use]
    pub const fn max_hearts(&self) -> i32 {
        self.max_hearts
    }
}

impl Default for HealthBook {
    fn default() -> Self {
        Self::new(MAX_HEARTS)
    }
}

impl DamageSink for HealthBook {
    fn apply_damage(&mut self, target: TargetId, amount: i32) {
        if let Some(hearts) = self.hearts.get_mut(&target) {
            *hearts = (*hearts - amount).clamp(0, self.max_hearts);
        }
    }
}

// ============================================================================
// Lives
// ============================================================================

// What the host should do after a life is lost.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifeOutcome {
    // Put the player back at its spawn point and refill hearts.
    Respawn,
    GameOver,
}

pub type LivesListener = Box<dyn FnMut(i32) + Send + Sync>;
pub type GameOverListener = Box<dyn FnMut() + Send + Sync>;

// Lives counter with change/game-over notification. Where the player
// respawns is host policy; the counter only says whether there is a life
// left to spend.
pub struct LivesCounter {
    max_lives: i32,
    current: i32,
    changed_listeners: Vec<LivesListener>,
    game_over_listeners: Vec<GameOverListener>,
}

impl LivesCounter {
    #[must_use]
    pub fn new(max_lives: i32) -> Self {
        let max_lives = max_lives.max(1);
        Self {
            max_lives,
            current: max_lives,
            changed_listeners: Vec::new(),
            game_over_listeners: Vec::new(),
        }
    }

    pub fn on_lives_changed(&mut self, listener: impl FnMut(i32) + Send + Sync + 'static) {
        self.changed_listeners.push(Box::new(listener));
    }

    pub fn on_game_over(&mut self, listener: impl FnMut() + Send + Sync + 'static) {
        self.game_over_listeners.push(Box::new(listener));
    }

    #[must_use]
    pub const fn current(&self) -> i32 {
        self.current
    }

    pub fn add_life(&mut self, amount: i32) {
        let previous = self.current;
        self.current = (self.current + amount).clamp(0, self.max_lives);
        if self.current != previous {
            self.notify_changed();
        }
    }

    // Spend a life. Already at zero is a no-op (game over only fires once).
    pub fn lose_life(&mut self) -> LifeOutcome {
        if self.current <= 0 {
            return LifeOutcome::GameOver;
        }

        self.current -= 1;
        self.notify_changed();

        if self.current <= 0 {
            for listener in &mut self.game_over_listeners {
                listener();
            }
            LifeOutcome::GameOver
        } else {
            LifeOutcome::Respawn
        }
    }

    pub fn reset(&mut self) {
        self.current = self.max_lives;
        self.notify_changed();
    }

    fn notify_changed(&mut self) {
        for listener in &mut self.changed_listeners {
            listener(self.current);
        }
    }
}

impl Default for LivesCounter {
    fn default() -> Self {
        Self::new(MAX_LIVES)
    }
}
