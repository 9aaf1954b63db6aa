//! Action log records.
//!
//! Every turn, controlled or automatic, leaves one `ActionRecord` in the
//! game's log. A pass is a record with no cards.

use serde::{Deserialize, Serialize};

use super::seat::Seat;
use crate::cards::CardSet;

/// Index into the action catalog. Index 0 is pass.
pub type ActionIndex = usize;

/// The pass action.
pub const PASS: ActionIndex = 0;

/// A recorded turn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The seat that acted.
    pub seat: Seat,

    /// Turn number within the episode (starts at 0).
    pub turn: u32,

    /// Cards played, empty for a pass.
    pub cards: CardSet,

    /// Whether the seat was driven by a controller.
    pub controlled: bool,
}

impl ActionRecord {
    /// Record a play.
    #[must_use]
    pub fn play(seat: Seat, turn: u32, cards: CardSet, controlled: bool) -> Self {
        Self {
            seat,
            turn,
            cards,
            controlled,
        }
    }

    /// Record a pass.
    #[must_use]
    pub fn pass(seat: Seat, turn: u32, controlled: bool) -> Self {
        Self::play(seat, turn, CardSet::new(), controlled)
    }

    /// Check if this record is a pass.
    #[must_use]
    pub fn is_pass(&self) -> bool {
        self.cards.is_empty()
    }
}
