//! Core engine types: seats, RNG, configuration, action records, errors.
//!
//! Nothing in here knows the rules of the game; `cards` and `games` build on
//! these.

pub mod seat;
pub mod rng;
pub mod config;
pub mod action;
pub mod error;

pub use seat::{Seat, SeatMap};
pub use rng::GameRng;
pub use config::{GameConfig, DEFAULT_MAX_TURNS};
pub use action::{ActionIndex, ActionRecord, PASS};
pub use error::{GameError, ParseCardError};
