//! Game configuration.
//!
//! `GameConfig` carries everything a `Game` needs that is not part of the
//! table state: the RNG seed, which seats are driven by an external
//! controller, and the autoplay turn budget.
//!
//! Controlled flags are applied to the fresh roster on every `reset`, so a
//! training driver can configure them once instead of after each reset.

use serde::{Deserialize, Serialize};

use super::seat::{Seat, SeatMap};

/// Default turn budget for `Game::autoplay`.
///
/// Every full rotation empties at least one group from the lead holder's
/// hand, so a 54-card deal always finishes well inside this.
pub const DEFAULT_MAX_TURNS: u32 = 3 * 54 + 3;

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Seed for deck shuffling.
    pub seed: u64,

    /// Seats whose turns are supplied through `step`.
    pub controlled: SeatMap<bool>,

    /// Turn budget for `Game::autoplay`.
    pub max_turns: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            controlled: SeatMap::with_value(false),
            max_turns: DEFAULT_MAX_TURNS,
        }
    }
}

impl GameConfig {
    /// Create a configuration with the given seed and no controlled seats.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            ..Self::default()
        }
    }

    /// Mark a seat as externally controlled.
    #[must_use]
    pub fn with_controlled(mut self, seat: Seat) -> Self {
        self.controlled[seat] = true;
        self
    }

    /// Mark every seat as externally controlled.
    #[must_use]
    pub fn all_controlled(mut self) -> Self {
        self.controlled = SeatMap::with_value(true);
        self
    }

    /// Set the autoplay turn budget.
    #[must_use]
    pub fn with_max_turns(mut self, turns: u32) -> Self {
        self.max_turns = turns;
        self
    }

    /// Check whether a seat is externally controlled.
    #[must_use]
    pub fn is_controlled(&self, seat: Seat) -> bool {
        self.controlled[seat]
    }
}
