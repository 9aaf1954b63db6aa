//! State encoding for neural network input.
//!
//! The observation for a seat is three card encodings concatenated:
//!
//! | Slice     | Contents                          |
//! |-----------|-----------------------------------|
//! | `0..54`   | every card played so far          |
//! | `54..108` | the landlord's bottom cards       |
//! | `108..162`| the observing seat's own hand     |
//!
//! Opponents' hands are never encoded.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::cards::{CardSet, ACTION_SPACE_SIZE, ENCODED_WIDTH};
use crate::core::Seat;
use crate::games::landlord::Game;

/// Card planes in an observation: history, bottom, own hand.
pub const PLANES: usize = 3;

/// Width of a seat's observation.
pub const STATE_WIDTH: usize = PLANES * ENCODED_WIDTH;

/// A seat's observation, `PLANES` card encodings end to end.
///
/// Serializes as a flat list of `STATE_WIDTH` floats.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<f32>", into = "Vec<f32>")]
pub struct EncodedState([f32; STATE_WIDTH]);

impl EncodedState {
    /// Lay out history, bottom and own hand.
    #[must_use]
    pub fn from_planes(planes: [&CardSet; PLANES]) -> Self {
        let mut values = [0.0; STATE_WIDTH];
        for (chunk, cards) in values.chunks_exact_mut(ENCODED_WIDTH).zip(planes) {
            chunk.copy_from_slice(&cards.encode());
        }
        Self(values)
    }

    #[must_use]
    pub fn as_slice(&self) -> &[f32] {
        &self.0
    }
}

/// A flat list that is not `STATE_WIDTH` long.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("observation has {0} values, expected {}", STATE_WIDTH)]
pub struct WidthMismatch(pub usize);

impl TryFrom<Vec<f32>> for EncodedState {
    type Error = WidthMismatch;

    fn try_from(values: Vec<f32>) -> Result<Self, Self::Error> {
        let len = values.len();
        values.try_into().map(Self).map_err(|_| WidthMismatch(len))
    }
}

impl From<EncodedState> for Vec<f32> {
    fn from(state: EncodedState) -> Self {
        state.0.to_vec()
    }
}

/// Encodes game state into tensors for neural network input.
pub trait StateEncoder: Send + Sync {
    /// Encode the game from a seat's perspective, hiding what that seat
    /// cannot see.
    fn encode(&self, game: &Game, perspective: Seat) -> EncodedState;

    /// Size of the policy output vector.
    fn action_space_size(&self) -> usize;
}

/// History, bottom and own-hand encoder.
#[derive(Clone, Copy, Debug, Default)]
pub struct LandlordEncoder;

impl StateEncoder for LandlordEncoder {
    fn encode(&self, game: &Game, perspective: Seat) -> EncodedState {
        EncodedState::from_planes([game.history(), game.bottom(), game.hand(perspective)])
    }

    fn action_space_size(&self) -> usize {
        ACTION_SPACE_SIZE
    }
}
