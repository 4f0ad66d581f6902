use std::ops::{BitOr, BitOrAssign};

#[cfg(feature = "json")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Layer Masks
// ============================================================================

// Bitmask classifying entities and geometry for overlap and raycast filtering.
// Plays the role an engine layer mask would: targets, occluders and affected
// bodies are all selected by mask intersection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "json", derive(Serialize, Deserialize))]
pub struct Layers(pub u32);

impl Layers {
    pub const NONE: Self = Self(0);
    pub const PLAYERS: Self = Self(1);
    pub const NPCS: Self = Self(1 << 1);
    pub const ENVIRONMENT: Self = Self(1 << 2);
    pub const ALL: Self = Self(u32::MAX);

    // True if the two masks share at least one bit.
    #[must_use]
    pub const fn intersects(self, other: Self) -> bool {
        self.0 & other.0 != 0
    }

    // True if every bit of `other` is set in `self`.
    #[must_use]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl BitOr for Layers {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for Layers {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}
