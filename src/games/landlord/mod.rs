//! Fight-the-landlord.
//!
//! Three seats, one landlord holding the 3 bottom cards against two
//! peasants. The first seat to empty its hand wins for its side.
//!
//! - `Game`: dealing, legality masks, the resumable turn loop
//! - `Player`: a hand with its cached decomposition
//! - `policy`: the rule-based decision table for uncontrolled seats

mod game;
mod player;
pub mod policy;

pub use game::Game;
pub use player::Player;
pub use policy::{LastPlay, Neighbor, Response, ResponseContext};
