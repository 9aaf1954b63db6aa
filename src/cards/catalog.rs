//! The action catalog.
//!
//! Every addressable play, in a fixed order shared by the whole process, so
//! a policy head can use catalog indices as its output layout. Index 0 is
//! the pass action.
//!
//! | Block          | Entries |
//! |----------------|---------|
//! | pass           | 1       |
//! | singles        | 15      |
//! | pairs          | 13      |
//! | triples        | 13      |
//! | triple+single  | 182     |
//! | triple+pair    | 156     |
//! | straights      | 36      |
//! | pair chains    | 52      |
//! | planes         | 45      |
//! | bombs          | 13      |
//! | rocket         | 1       |

use once_cell::sync::Lazy;
use rustc_hash::FxHashMap;

use super::group::{CardGroup, MIN_PAIR_CHAIN, MIN_PLANE, MIN_STRAIGHT};
use super::rank::Rank;
use super::set::CardSet;
use crate::core::{ActionIndex, PASS};

/// Number of actions in the catalog, pass included.
pub const ACTION_SPACE_SIZE: usize = 527;

/// Longest possible chains given a 20-card hand and the Ace ceiling.
const MAX_STRAIGHT: u8 = 12;
const MAX_PAIR_CHAIN: u8 = 10;
const MAX_PLANE: u8 = 6;

static SHARED: Lazy<ActionCatalog> = Lazy::new(ActionCatalog::build);

/// Immutable, index-stable list of playable card groups.
#[derive(Debug)]
pub struct ActionCatalog {
    /// `groups[i - 1]` is action `i`.
    groups: Vec<CardGroup>,
    index: FxHashMap<CardSet, ActionIndex>,
}

impl ActionCatalog {
    /// The process-wide catalog.
    pub fn shared() -> &'static ActionCatalog {
        &SHARED
    }

    fn build() -> Self {
        let mut groups = Vec::with_capacity(ACTION_SPACE_SIZE - 1);
        let ordinary = Rank::ORDINARY;

        groups.extend(Rank::ALL.into_iter().map(CardGroup::single));
        groups.extend(ordinary.into_iter().map(CardGroup::pair));
        groups.extend(ordinary.into_iter().map(CardGroup::triple));

        for triple in ordinary {
            for kicker in Rank::ALL.into_iter().filter(|k| *k != triple) {
                groups.push(CardGroup::triple_single(triple, kicker));
            }
        }
        for triple in ordinary {
            for kicker in ordinary.into_iter().filter(|k| *k != triple) {
                groups.push(CardGroup::triple_pair(triple, kicker));
            }
        }

        for (width, min, max) in [
            (1, MIN_STRAIGHT, MAX_STRAIGHT),
            (2, MIN_PAIR_CHAIN, MAX_PAIR_CHAIN),
            (3, MIN_PLANE, MAX_PLANE),
        ] {
            for len in min..=max {
                for start in ordinary {
                    if let Some(chain) = CardGroup::chain(start, len, width) {
                        groups.push(chain);
                    }
                }
            }
        }

        groups.extend(ordinary.into_iter().map(CardGroup::bomb));
        groups.push(CardGroup::rocket());

        let index = groups
            .iter()
            .enumerate()
            .map(|(i, g)| (*g.cards(), i + 1))
            .collect();

        Self { groups, index }
    }

    /// Number of actions, pass included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.groups.len() + 1
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// The group played by `action`, `None` for pass.
    ///
    /// Panics if `action` is out of range.
    #[must_use]
    pub fn group(&self, action: ActionIndex) -> Option<&CardGroup> {
        assert!(
            action < self.len(),
            "action {} is outside the catalog of {} actions",
            action,
            self.len()
        );
        if action == PASS {
            None
        } else {
            Some(&self.groups[action - 1])
        }
    }

    /// Cards played by `action`, empty for pass.
    #[must_use]
    pub fn cards(&self, action: ActionIndex) -> CardSet {
        self.group(action).map(|g| *g.cards()).unwrap_or_default()
    }

    /// Catalog index of the group with exactly these cards.
    #[must_use]
    pub fn index_of(&self, cards: &CardSet) -> Option<ActionIndex> {
        if cards.is_empty() {
            return Some(PASS);
        }
        self.index.get(cards).copied()
    }

    /// Every play with its index, in catalog order.
    pub fn plays(&self) -> impl Iterator<Item = (ActionIndex, &CardGroup)> {
        self.groups.iter().enumerate().map(|(i, g)| (i + 1, g))
    }
}
