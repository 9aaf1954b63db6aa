//! Outcomes and the controller boundary.
//!
//! `Environment` is what an external agent drives; `Game` implements it.
//! Nothing outside this trait is needed to run a training episode.

pub mod engine;

pub use engine::{Environment, Outcome};
