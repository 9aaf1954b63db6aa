//! Hand analysis: ranks, card multisets, groups, the action catalog and the
//! deck.
//!
//! The turn engine only relies on a narrow contract from this module:
//! - `ActionCatalog::shared()` is index-stable for the process lifetime
//! - `analyze` is deterministic for a given hand
//! - `CardGroup::bigger_than` follows the bomb/rocket dominance rules
//! - `CardSet::encode` has a fixed width

pub mod rank;
pub mod set;
pub mod group;
pub mod catalog;
pub mod analysis;
pub mod deck;

pub use rank::Rank;
pub use set::{CardSet, ENCODED_WIDTH};
pub use group::{CardGroup, GroupKind};
pub use catalog::{ActionCatalog, ACTION_SPACE_SIZE};
pub use analysis::{analyze, group_count, Candidates};
pub use deck::{Deck, BOTTOM_SIZE, HAND_SIZE};
