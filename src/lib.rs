//! # rust-landlord
//!
//! A three-player fight-the-landlord environment for RL training.
//!
//! ## Design Principles
//!
//! 1. **Mask Is The Contract**: `get_mask` is the only legality check.
//!    `step` trusts it and fails fast on violations.
//!
//! 2. **Resumable Turns**: `step` returns as soon as a controlled seat is to
//!    act and picks up from there on the next call. No threads, no blocking.
//!
//! 3. **Seats, Not References**: players refer to each other by `Seat`
//!    index into a `Game`-owned roster.
//!
//! ## Architecture
//!
//! - **Fixed Action Catalog**: every playable group has a stable index,
//!   shared process-wide, with index 0 reserved for pass.
//!
//! - **Count-Based Hands**: a hand is a per-rank count array, so subset
//!   tests and removals are a fixed 15-slot loop.
//!
//! - **Rule-Based Opponents**: uncontrolled seats answer through a pure
//!   decision table over a cached hand decomposition.
//!
//! ## Modules
//!
//! - `core`: Seats, RNG, configuration, action records, errors
//! - `cards`: Ranks, card sets, groups, the action catalog, hand analysis
//! - `rules`: Outcomes and the `Environment` controller boundary
//! - `games`: The landlord game, its players and response policy
//! - `nn`: Observation encoding and the policy network seam
//! - `training`: Controllers and episode rollouts

pub mod core;
pub mod cards;
pub mod rules;
pub mod games;
pub mod nn;
pub mod training;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    Seat, SeatMap,
    GameRng,
    GameConfig, DEFAULT_MAX_TURNS,
    ActionIndex, ActionRecord, PASS,
    GameError, ParseCardError,
};

pub use crate::cards::{
    Rank, CardSet, CardGroup, GroupKind,
    ActionCatalog, ACTION_SPACE_SIZE,
    analyze, group_count, Deck,
};

pub use crate::rules::{Environment, Outcome};

pub use crate::games::landlord::{Game, Player, LastPlay, Response};

pub use crate::nn::{EncodedState, LandlordEncoder, PolicyNetwork, StateEncoder, UniformPolicy};

pub use crate::training::{run_episode, Controller, Episode, EpisodeConfig, PolicyController};
