//! The 54-card deck and the deal.

use super::rank::Rank;
use super::set::CardSet;
use crate::core::{GameRng, Seat, SeatMap};

/// Cards set aside for the landlord.
pub const BOTTOM_SIZE: usize = 3;

/// Cards dealt to each seat before the bottom is handed out.
pub const HAND_SIZE: usize = 17;

/// An ordered deck. The front of the vector is the top of the deck.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Rank>,
}

impl Deck {
    /// Cards in a full deck.
    pub const SIZE: usize = 54;

    /// A full deck in rank order.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            cards: CardSet::full_deck().ranks().collect(),
        }
    }

    /// A full deck, shuffled.
    #[must_use]
    pub fn shuffled(rng: &mut GameRng) -> Self {
        let mut deck = Self::standard();
        rng.shuffle(&mut deck.cards);
        deck
    }

    /// An empty deck.
    #[must_use]
    pub fn empty() -> Self {
        Self { cards: Vec::new() }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Cards from top to bottom.
    #[must_use]
    pub fn cards(&self) -> &[Rank] {
        &self.cards
    }

    /// Remove the top three cards as the landlord's bottom.
    pub fn take_bottom(&mut self) -> CardSet {
        let n = BOTTOM_SIZE.min(self.cards.len());
        self.cards.drain(..n).collect()
    }

    /// Deal every remaining card round-robin from seat 0, emptying the deck.
    pub fn deal(&mut self) -> SeatMap<CardSet> {
        let mut hands: SeatMap<CardSet> = SeatMap::with_default();
        for (i, rank) in self.cards.drain(..).enumerate() {
            hands[Seat((i % Seat::COUNT) as u8)].insert(rank);
        }
        hands
    }
}
