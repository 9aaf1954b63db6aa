//! Card groups: the typed combinations a seat can play.
//!
//! ## Strength
//!
//! - A rocket (both jokers) beats everything.
//! - A bomb (four of a rank) beats every non-bomb, and lower bombs.
//! - Anything else only beats the same kind with the same chain length and
//!   a higher primary rank.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::rank::Rank;
use super::set::CardSet;

/// Shortest straight.
pub const MIN_STRAIGHT: u8 = 5;
/// Fewest pairs in a pair chain.
pub const MIN_PAIR_CHAIN: u8 = 3;
/// Fewest triples in a plane.
pub const MIN_PLANE: u8 = 2;

/// Kind of a card group.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum GroupKind {
    Single,
    Pair,
    Triple,
    /// Triple plus one kicker card of another rank.
    TripleSingle,
    /// Triple plus a kicker pair of another rank.
    TriplePair,
    /// Five or more consecutive singles.
    Straight,
    /// Three or more consecutive pairs.
    PairChain,
    /// Two or more consecutive triples.
    Plane,
    Bomb,
    Rocket,
}

impl GroupKind {
    /// Bombs and rockets, which beat across kinds.
    #[must_use]
    pub const fn is_bomb(self) -> bool {
        matches!(self, GroupKind::Bomb | GroupKind::Rocket)
    }

    /// Kinds built from a run of consecutive ranks.
    #[must_use]
    pub const fn is_chain(self) -> bool {
        matches!(
            self,
            GroupKind::Straight | GroupKind::PairChain | GroupKind::Plane
        )
    }
}

/// A canonical card group.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardGroup {
    kind: GroupKind,
    /// Rank that decides strength: the lowest rank of a chain, the triple
    /// rank for kicker shapes, the only rank otherwise.
    primary: Rank,
    /// Number of units in a chain, 1 for everything else.
    chain: u8,
    cards: CardSet,
}

impl CardGroup {
    #[must_use]
    pub fn single(rank: Rank) -> Self {
        Self::build(GroupKind::Single, rank, 1, CardSet::repeat(rank, 1))
    }

    #[must_use]
    pub fn pair(rank: Rank) -> Self {
        Self::build(GroupKind::Pair, rank, 1, CardSet::repeat(rank, 2))
    }

    #[must_use]
    pub fn triple(rank: Rank) -> Self {
        Self::build(GroupKind::Triple, rank, 1, CardSet::repeat(rank, 3))
    }

    #[must_use]
    pub fn bomb(rank: Rank) -> Self {
        Self::build(GroupKind::Bomb, rank, 1, CardSet::repeat(rank, 4))
    }

    #[must_use]
    pub fn rocket() -> Self {
        let cards: CardSet = [Rank::BlackJoker, Rank::RedJoker].into_iter().collect();
        Self::build(GroupKind::Rocket, Rank::BlackJoker, 1, cards)
    }

    /// Triple with a single kicker.
    #[must_use]
    pub fn triple_single(triple: Rank, kicker: Rank) -> Self {
        debug_assert_ne!(triple, kicker);
        let mut cards = CardSet::repeat(triple, 3);
        cards.insert(kicker);
        Self::build(GroupKind::TripleSingle, triple, 1, cards)
    }

    /// Triple with a kicker pair.
    #[must_use]
    pub fn triple_pair(triple: Rank, kicker: Rank) -> Self {
        debug_assert_ne!(triple, kicker);
        let mut cards = CardSet::repeat(triple, 3);
        cards.insert_n(kicker, 2);
        Self::build(GroupKind::TriplePair, triple, 1, cards)
    }

    /// Chain of `len` consecutive units of `width` cards starting at `start`.
    ///
    /// `width` 1 is a straight, 2 a pair chain, 3 a plane. Returns `None`
    /// if the chain is too short or runs past the Ace.
    #[must_use]
    pub fn chain(start: Rank, len: u8, width: u8) -> Option<Self> {
        let (kind, min) = match width {
            1 => (GroupKind::Straight, MIN_STRAIGHT),
            2 => (GroupKind::PairChain, MIN_PAIR_CHAIN),
            3 => (GroupKind::Plane, MIN_PLANE),
            _ => return None,
        };
        if len < min || start.value() + len - 1 > Rank::Ace.value() {
            return None;
        }
        let mut cards = CardSet::new();
        for v in start.value()..start.value() + len {
            cards.insert_n(Rank::from_value(v)?, width);
        }
        Some(Self::build(kind, start, len, cards))
    }

    fn build(kind: GroupKind, primary: Rank, chain: u8, cards: CardSet) -> Self {
        Self {
            kind,
            primary,
            chain,
            cards,
        }
    }

    /// Classify a card multiset.
    ///
    /// Returns `None` for shapes that are not playable groups (including the
    /// empty set).
    #[must_use]
    pub fn from_cards(cards: &CardSet) -> Option<Self> {
        let len = cards.len();
        let present: Vec<(Rank, u8)> = Rank::ALL
            .into_iter()
            .map(|r| (r, cards.count(r)))
            .filter(|(_, c)| *c > 0)
            .collect();

        match (len, present.as_slice()) {
            (0, _) => None,
            (1, [(r, 1)]) => Some(Self::single(*r)),
            (2, [(Rank::BlackJoker, 1), (Rank::RedJoker, 1)]) => Some(Self::rocket()),
            (2, [(r, 2)]) => Some(Self::pair(*r)),
            (3, [(r, 3)]) => Some(Self::triple(*r)),
            (4, [(r, 4)]) => Some(Self::bomb(*r)),
            (4, [(a, 3), (b, 1)]) => Some(Self::triple_single(*a, *b)),
            (4, [(a, 1), (b, 3)]) => Some(Self::triple_single(*b, *a)),
            (5, [(a, 3), (b, 2)]) => Some(Self::triple_pair(*a, *b)),
            (5, [(a, 2), (b, 3)]) => Some(Self::triple_pair(*b, *a)),
            _ => Self::classify_chain(&present),
        }
    }

    fn classify_chain(present: &[(Rank, u8)]) -> Option<Self> {
        let (start, width) = *present.first()?;
        let uniform = present.iter().all(|(_, c)| *c == width);
        let consecutive = present
            .windows(2)
            .all(|w| w[1].0.value() == w[0].0.value() + 1);
        if !uniform || !consecutive {
            return None;
        }
        Self::chain(start, present.len() as u8, width)
    }

    #[must_use]
    pub fn kind(&self) -> GroupKind {
        self.kind
    }

    #[must_use]
    pub fn primary(&self) -> Rank {
        self.primary
    }

    #[must_use]
    pub fn chain_len(&self) -> u8 {
        self.chain
    }

    #[must_use]
    pub fn cards(&self) -> &CardSet {
        &self.cards
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    #[must_use]
    pub fn is_single(&self) -> bool {
        self.kind == GroupKind::Single
    }

    #[must_use]
    pub fn is_bomb(&self) -> bool {
        self.kind.is_bomb()
    }

    /// Whether this group may be played over `other`.
    #[must_use]
    pub fn bigger_than(&self, other: &CardGroup) -> bool {
        use GroupKind::{Bomb, Rocket};

        match (self.kind, other.kind) {
            (Rocket, Rocket) => false,
            (Rocket, _) => true,
            (_, Rocket) => false,
            (Bomb, Bomb) => self.primary > other.primary,
            (Bomb, _) => true,
            (_, Bomb) => false,
            (mine, theirs) => {
                mine == theirs && self.chain == other.chain && self.primary > other.primary
            }
        }
    }
}

impl fmt::Display for CardGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}{}", self.kind, self.cards)
    }
}

impl fmt::Debug for CardGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CardGroup({})", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn group(s: &str) -> CardGroup {
        CardGroup::from_cards(&s.parse().unwrap()).unwrap()
    }

    #[test]
    fn test_classify_basic_kinds() {
        assert_eq!(group("7").kind(), GroupKind::Single);
        assert_eq!(group("7 7").kind(), GroupKind::Pair);
        assert_eq!(group("7 7 7").kind(), GroupKind::Triple);
        assert_eq!(group("7 7 7 7").kind(), GroupKind::Bomb);
        assert_eq!(group("BJ RJ").kind(), GroupKind::Rocket);
    }

    #[test]
    fn test_classify_kickers() {
        let g = group("3 K K K");
        assert_eq!(g.kind(), GroupKind::TripleSingle);
        assert_eq!(g.primary(), Rank::King);

        let g = group("9 9 9 4 4");
        assert_eq!(g.kind(), GroupKind::TriplePair);
        assert_eq!(g.primary(), Rank::Nine);
    }

    #[test]
    fn test_classify_chains() {
        let s = group("3 4 5 6 7");
        assert_eq!(s.kind(), GroupKind::Straight);
        assert_eq!(s.primary(), Rank::Three);
        assert_eq!(s.chain_len(), 5);

        let p = group("5 5 6 6 7 7");
        assert_eq!(p.kind(), GroupKind::PairChain);
        assert_eq!(p.chain_len(), 3);

        let plane = group("J J J Q Q Q");
        assert_eq!(plane.kind(), GroupKind::Plane);
        assert_eq!(plane.chain_len(), 2);
    }

    #[test]
    fn test_reject_invalid_shapes() {
        let invalid = ["", "3 4", "3 4 5 6", "10 J Q K A 2", "3 3 4 4", "3 3 3 4 5", "BJ 2"];
        for s in invalid {
            let cards: CardSet = s.parse().unwrap();
            assert!(CardGroup::from_cards(&cards).is_none(), "{s} should not classify");
        }
    }

    #[test]
    fn test_chain_bounds() {
        assert!(CardGroup::chain(Rank::Ten, 5, 1).is_some());
        assert!(CardGroup::chain(Rank::Jack, 5, 1).is_none());
        assert!(CardGroup::chain(Rank::Three, 4, 1).is_none());
        assert!(CardGroup::chain(Rank::Three, 2, 2).is_none());
        assert!(CardGroup::chain(Rank::Three, 2, 3).is_some());
        assert!(CardGroup::chain(Rank::Three, 2, 4).is_none());
    }

    #[test]
    fn test_same_kind_comparison() {
        assert!(group("8").bigger_than(&group("7")));
        assert!(!group("7").bigger_than(&group("7")));
        assert!(group("2").bigger_than(&group("A")));
        assert!(group("RJ").bigger_than(&group("BJ")));
        assert!(group("4 4 4 3").bigger_than(&group("3 3 3 A")));
    }

    #[test]
    fn test_chain_length_must_match() {
        let short = group("4 5 6 7 8");
        let long = group("3 4 5 6 7 8");
        assert!(!long.bigger_than(&short));
        assert!(!short.bigger_than(&long));
        assert!(group("5 6 7 8 9").bigger_than(&short));
    }

    #[test]
    fn test_cross_kind_is_false() {
        assert!(!group("A A").bigger_than(&group("3")));
        assert!(!group("3").bigger_than(&group("A A")));
        assert!(!group("9 9 9 3").bigger_than(&group("4 4 4 5 5")));
    }

    #[test]
    fn test_bomb_and_rocket_dominate() {
        let bomb = group("3 3 3 3");
        let rocket = group("BJ RJ");

        assert!(bomb.bigger_than(&group("2")));
        assert!(bomb.bigger_than(&group("3 4 5 6 7 8 9 10 J Q K A")));
        assert!(group("4 4 4 4").bigger_than(&bomb));
        assert!(!bomb.bigger_than(&group("4 4 4 4")));
        assert!(rocket.bigger_than(&group("2 2 2 2")));
        assert!(!bomb.bigger_than(&rocket));
        assert!(!rocket.bigger_than(&rocket));
        assert!(!group("2 2").bigger_than(&bomb));
    }
}
