//! Card ranks.
//!
//! Thirteen ordinary ranks plus two jokers, ordered by playing strength:
//! `3 < 4 < … < K < A < 2 < BJ < RJ`. Suits never affect legality and are
//! not modeled.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::core::ParseCardError;

/// A card rank, ordered by strength.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Rank {
    Three = 0,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
    Two,
    BlackJoker,
    RedJoker,
}

impl Rank {
    /// Number of distinct ranks.
    pub const COUNT: usize = 15;

    /// Every rank, weakest first.
    pub const ALL: [Rank; Rank::COUNT] = [
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
        Rank::Two,
        Rank::BlackJoker,
        Rank::RedJoker,
    ];

    /// The thirteen ordinary ranks (four copies each).
    pub const ORDINARY: [Rank; 13] = [
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
        Rank::Two,
    ];

    /// Strength value, `0` for Three up to `14` for the red joker.
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Rank with the given strength value.
    #[must_use]
    pub fn from_value(value: u8) -> Option<Rank> {
        Rank::ALL.get(value as usize).copied()
    }

    /// Copies of this rank in a full deck.
    #[must_use]
    pub const fn copies(self) -> u8 {
        match self {
            Rank::BlackJoker | Rank::RedJoker => 1,
            _ => 4,
        }
    }

    #[must_use]
    pub const fn is_joker(self) -> bool {
        matches!(self, Rank::BlackJoker | Rank::RedJoker)
    }

    /// Whether the rank may appear in a straight, pair chain or plane.
    ///
    /// Twos and jokers never chain.
    #[must_use]
    pub const fn is_chainable(self) -> bool {
        (self as u8) <= (Rank::Ace as u8)
    }

    /// Display symbol.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
            Rank::Ace => "A",
            Rank::Two => "2",
            Rank::BlackJoker => "BJ",
            Rank::RedJoker => "RJ",
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Rank {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_ascii_uppercase();
        let rank = match upper.as_str() {
            "3" => Rank::Three,
            "4" => Rank::Four,
            "5" => Rank::Five,
            "6" => Rank::Six,
            "7" => Rank::Seven,
            "8" => Rank::Eight,
            "9" => Rank::Nine,
            "10" | "T" => Rank::Ten,
            "J" => Rank::Jack,
            "Q" => Rank::Queen,
            "K" => Rank::King,
            "A" => Rank::Ace,
            "2" => Rank::Two,
            "BJ" => Rank::BlackJoker,
            "RJ" => Rank::RedJoker,
            _ => return Err(ParseCardError::UnknownRank(s.to_string())),
        };
        Ok(rank)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_order() {
        assert!(Rank::Three < Rank::Ten);
        assert!(Rank::Ace < Rank::Two);
        assert!(Rank::Two < Rank::BlackJoker);
        assert!(Rank::BlackJoker < Rank::RedJoker);
    }

    #[test]
    fn test_rank_values_match_table() {
        for (i, rank) in Rank::ALL.iter().enumerate() {
            assert_eq!(rank.value() as usize, i);
            assert_eq!(Rank::from_value(i as u8), Some(*rank));
        }
        assert_eq!(Rank::from_value(15), None);
    }

    #[test]
    fn test_deck_copies() {
        let total: u32 = Rank::ALL.iter().map(|r| r.copies() as u32).sum();
        assert_eq!(total, 54);
    }

    #[test]
    fn test_chainable() {
        assert!(Rank::Three.is_chainable());
        assert!(Rank::Ace.is_chainable());
        assert!(!Rank::Two.is_chainable());
        assert!(!Rank::RedJoker.is_chainable());
    }

    #[test]
    fn test_parse_symbols() {
        for rank in Rank::ALL {
            assert_eq!(rank.symbol().parse::<Rank>(), Ok(rank));
        }
        assert_eq!("t".parse::<Rank>(), Ok(Rank::Ten));
        assert!("1".parse::<Rank>().is_err());
    }
}
