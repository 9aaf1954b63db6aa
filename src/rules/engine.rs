//! Episode outcomes and the controller boundary.
//!
//! An external controller (RL agent, human front end) only ever sees the
//! game through `Environment`:
//! - `get_state` / `get_mask` for the seat it drives
//! - `step` to submit one action
//! - `to_act` to learn whose decision is pending

use serde::{Deserialize, Serialize};

use crate::cards::ACTION_SPACE_SIZE;
use crate::core::{ActionIndex, GameError, Seat};
use crate::nn::EncodedState;

/// Result of a turn.
///
/// Scoring is role-based and all-or-nothing: when any hand empties, the
/// landlord either wins outright or loses outright.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// No hand is empty yet.
    #[default]
    Continue,
    /// A peasant emptied their hand.
    PeasantsWin,
    /// The landlord emptied their hand.
    LandlordWins,
}

impl Outcome {
    /// Terminal outcome for the seat that just emptied its hand.
    #[must_use]
    pub const fn emptied_by(landlord: bool) -> Self {
        if landlord {
            Outcome::LandlordWins
        } else {
            Outcome::PeasantsWin
        }
    }

    /// Numeric code: 0 continue, 1 peasants win, 2 landlord wins.
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Outcome::Continue => 0,
            Outcome::PeasantsWin => 1,
            Outcome::LandlordWins => 2,
        }
    }

    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Outcome::Continue)
    }

    /// Whether a seat with the given role is on the winning side.
    ///
    /// Always false while the game continues.
    #[must_use]
    pub const fn is_winner(self, landlord: bool) -> bool {
        match self {
            Outcome::Continue => false,
            Outcome::PeasantsWin => !landlord,
            Outcome::LandlordWins => landlord,
        }
    }

    /// Terminal reward for a seat: +1 for the winning side, -1 for the
    /// losing side, 0 while the game continues.
    #[must_use]
    pub fn reward(self, landlord: bool) -> f32 {
        match self {
            Outcome::Continue => 0.0,
            _ if self.is_winner(landlord) => 1.0,
            _ => -1.0,
        }
    }
}

/// The controller boundary.
///
/// ## Implementation Notes
///
/// - `get_mask` is the only legality gate; `step` trusts it
/// - `step` returns as soon as a controlled seat must act or a hand empties
/// - `to_act` is `None` once the game is over or before cards are dealt
pub trait Environment {
    /// Start a fresh episode: new shuffle, new roster.
    fn reset(&mut self);

    /// Deal, crown the landlord, and run uncontrolled seats up to the first
    /// controlled turn.
    fn prepare(&mut self, landlord: Seat) -> Result<Outcome, GameError>;

    /// Observation for a seat.
    fn get_state(&self, seat: Seat) -> EncodedState;

    /// Legality of every catalog action for a seat.
    fn get_mask(&self, seat: Seat) -> Vec<bool>;

    /// Apply one controlled action and advance to the next controlled turn.
    fn step(&mut self, seat: Seat, action: ActionIndex) -> Result<Outcome, GameError>;

    /// Finish the episode with the built-in policy for every seat.
    fn autoplay(&mut self) -> Result<Outcome, GameError>;

    /// Seat whose turn is pending.
    fn to_act(&self) -> Option<Seat>;

    /// Whether a seat's turns come through `step`.
    fn is_controlled(&self, seat: Seat) -> bool;

    /// The landlord, once dealt.
    fn landlord(&self) -> Option<Seat>;

    /// Seat that emptied its hand, once the game is over.
    fn winner(&self) -> Option<Seat>;

    /// Size of the action catalog.
    fn action_space_size(&self) -> usize {
        ACTION_SPACE_SIZE
    }

    /// Indices of every legal action for a seat.
    fn legal_actions(&self, seat: Seat) -> Vec<ActionIndex> {
        self.get_mask(seat)
            .iter()
            .enumerate()
            .filter_map(|(i, legal)| legal.then_some(i))
            .collect()
    }
}
