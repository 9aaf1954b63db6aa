//! Error types.
//!
//! Contract violations that can only come from a caller ignoring the mask
//! (discarding a missing card, an out-of-range action index) panic instead;
//! these are the conditions a caller can observe and react to.

use thiserror::Error;

use super::seat::Seat;

/// Errors returned by the turn engine.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GameError {
    /// Rotation reached a seat that can neither act automatically nor hand
    /// control back to a controller.
    #[error("rotation reached {seat} without a controlled turn or termination")]
    RotationExhausted { seat: Seat },

    /// `prepare` was called on a deck that has already been dealt.
    #[error("cards have already been dealt; call reset first")]
    AlreadyDealt,

    /// A turn operation was attempted before `prepare`.
    #[error("cards have not been dealt yet")]
    NotDealt,

    /// A turn operation was attempted after a hand emptied.
    #[error("the game is already over")]
    GameOver,

    /// Autoplay exceeded its turn budget without a hand emptying.
    #[error("no hand emptied within {turns} turns")]
    Stalled { turns: u32 },
}

/// Error parsing a rank or card list.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseCardError {
    #[error("unknown rank symbol `{0}`")]
    UnknownRank(String),

    #[error("too many copies of {0}")]
    TooManyCopies(String),
}
