//! Rollout harness for external learners.
//!
//! ## Overview
//!
//! - **Controller**: picks an action for a controlled seat from its
//!   observation and mask
//! - **PolicyController**: masked sampling from a `PolicyNetwork`
//! - **run_episode**: one deal played to the end, with per-step records and
//!   role-based rewards
//!
//! Learning itself happens outside this crate.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use rust_landlord::training::{run_episode, EpisodeConfig, PolicyController};
//!
//! let mut game = Game::new(GameConfig::new(seed).with_controlled(Seat::new(0)));
//! let mut controller = PolicyController::new(network, seed);
//! let episode = run_episode(&mut game, &mut controller, &EpisodeConfig::new())?;
//! ```

pub mod controller;
pub mod episode;

pub use controller::{Controller, PolicyController};
pub use episode::{run_episode, Episode, EpisodeConfig, Step};
