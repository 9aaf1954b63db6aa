//! Card multisets.
//!
//! A `CardSet` stores one count per rank, so it is always in canonical
//! (rank-sorted) order and cheap to copy, compare and hash. Hands, the
//! bottom cards, the play history and every card group are `CardSet`s.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::rank::Rank;
use crate::core::ParseCardError;

/// Width of the one-hot encoding of a card multiset.
pub const ENCODED_WIDTH: usize = 54;

/// A multiset of card ranks.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardSet {
    counts: [u8; Rank::COUNT],
}

impl CardSet {
    /// Create an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            counts: [0; Rank::COUNT],
        }
    }

    /// The full 54-card deck.
    #[must_use]
    pub fn full_deck() -> Self {
        let mut set = Self::new();
        for rank in Rank::ALL {
            set.counts[rank.value() as usize] = rank.copies();
        }
        set
    }

    /// `n` copies of one rank.
    #[must_use]
    pub fn repeat(rank: Rank, n: u8) -> Self {
        let mut set = Self::new();
        set.counts[rank.value() as usize] = n;
        set
    }

    /// Total number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.counts.iter().map(|&c| c as usize).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.iter().all(|&c| c == 0)
    }

    /// Copies of `rank` in the set.
    #[must_use]
    pub fn count(&self, rank: Rank) -> u8 {
        self.counts[rank.value() as usize]
    }

    /// Per-rank counts, weakest rank first.
    #[must_use]
    pub fn counts(&self) -> &[u8; Rank::COUNT] {
        &self.counts
    }

    /// Add one card.
    pub fn insert(&mut self, rank: Rank) {
        self.counts[rank.value() as usize] += 1;
    }

    /// Add `n` copies of a rank.
    pub fn insert_n(&mut self, rank: Rank, n: u8) {
        self.counts[rank.value() as usize] += n;
    }

    /// Add every card of `other`.
    pub fn insert_all(&mut self, other: &CardSet) {
        for (mine, theirs) in self.counts.iter_mut().zip(other.counts.iter()) {
            *mine += theirs;
        }
    }

    /// Check that `other` is a sub-multiset of `self`.
    #[must_use]
    pub fn contains_all(&self, other: &CardSet) -> bool {
        self.counts
            .iter()
            .zip(other.counts.iter())
            .all(|(mine, theirs)| mine >= theirs)
    }

    /// Remove every card of `other`.
    ///
    /// Leaves `self` untouched and returns the first missing rank if `other`
    /// is not a sub-multiset.
    pub fn remove_all(&mut self, other: &CardSet) -> Result<(), Rank> {
        if let Some(missing) = Rank::ALL
            .into_iter()
            .find(|r| self.count(*r) < other.count(*r))
        {
            return Err(missing);
        }
        for (mine, theirs) in self.counts.iter_mut().zip(other.counts.iter()) {
            *mine -= theirs;
        }
        Ok(())
    }

    /// Every card, weakest first, repeated by count.
    pub fn ranks(&self) -> impl Iterator<Item = Rank> + '_ {
        Rank::ALL
            .into_iter()
            .flat_map(move |r| std::iter::repeat(r).take(self.count(r) as usize))
    }

    /// Weakest card in the set.
    #[must_use]
    pub fn lowest(&self) -> Option<Rank> {
        Rank::ALL.into_iter().find(|r| self.count(*r) > 0)
    }

    /// One-hot count encoding.
    ///
    /// Each ordinary rank owns four slots filled from the left by count;
    /// each joker owns one slot.
    #[must_use]
    pub fn encode(&self) -> [f32; ENCODED_WIDTH] {
        let mut out = [0.0; ENCODED_WIDTH];
        let mut base = 0;
        for rank in Rank::ALL {
            let count = self.count(rank) as usize;
            for slot in out.iter_mut().skip(base).take(count) {
                *slot = 1.0;
            }
            base += rank.copies() as usize;
        }
        out
    }
}

impl FromIterator<Rank> for CardSet {
    fn from_iter<I: IntoIterator<Item = Rank>>(iter: I) -> Self {
        let mut set = CardSet::new();
        for rank in iter {
            set.insert(rank);
        }
        set
    }
}

impl fmt::Display for CardSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, rank) in self.ranks().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", rank)?;
        }
        f.write_str("]")
    }
}

impl fmt::Debug for CardSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CardSet{}", self)
    }
}

impl FromStr for CardSet {
    type Err = ParseCardError;

    /// Parse whitespace-separated rank symbols, e.g. `"3 3 10 BJ"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut set = CardSet::new();
        for token in s.split_whitespace() {
            let rank: Rank = token.parse()?;
            if set.count(rank) >= rank.copies() {
                return Err(ParseCardError::TooManyCopies(token.to_string()));
            }
            set.insert(rank);
        }
        Ok(set)
    }
}
