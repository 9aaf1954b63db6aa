//! A seat's hand and its cached decomposition.

use tracing::trace;

use super::policy::{self, LastPlay, Neighbor, Response, ResponseContext};
use crate::cards::{analyze, CardGroup, CardSet, Candidates};
use crate::core::Seat;

/// One seat at the table.
///
/// The candidate cache is a pure function of the hand: every `draw` and
/// `discard` drops it, and the next read rebuilds it.
#[derive(Clone, Debug)]
pub struct Player {
    seat: Seat,
    hand: CardSet,
    landlord: bool,
    controlled: bool,
    cache: Option<Candidates>,
}

impl Player {
    pub fn new(seat: Seat, controlled: bool) -> Self {
        Self {
            seat,
            hand: CardSet::new(),
            landlord: false,
            controlled,
            cache: None,
        }
    }

    #[must_use]
    pub fn seat(&self) -> Seat {
        self.seat
    }

    #[must_use]
    pub fn hand(&self) -> &CardSet {
        &self.hand
    }

    #[must_use]
    pub fn cards_left(&self) -> usize {
        self.hand.len()
    }

    #[must_use]
    pub fn is_landlord(&self) -> bool {
        self.landlord
    }

    pub(crate) fn crown(&mut self) {
        self.landlord = true;
    }

    #[must_use]
    pub fn is_controlled(&self) -> bool {
        self.controlled
    }

    pub fn set_controlled(&mut self, controlled: bool) {
        self.controlled = controlled;
    }

    /// Add cards to the hand.
    pub fn draw(&mut self, cards: &CardSet) {
        self.hand.insert_all(cards);
        self.cache = None;
    }

    /// Remove cards from the hand.
    ///
    /// # Panics
    ///
    /// Panics if any card is missing. The legality mask makes this
    /// unreachable for well-behaved callers.
    pub fn discard(&mut self, cards: &CardSet) {
        if let Err(rank) = self.hand.remove_all(cards) {
            panic!("{} cannot discard {}: not in hand {}", self.seat, rank, self.hand);
        }
        self.cache = None;
    }

    /// Whether the candidate cache matches the current hand.
    #[must_use]
    pub fn is_cache_fresh(&self) -> bool {
        self.cache.is_some()
    }

    /// Playable groups for the current hand, weakest first.
    pub fn candidates(&mut self) -> &[CardGroup] {
        let seat = self.seat;
        let hand = &self.hand;
        self.cache.get_or_insert_with(|| {
            let groups = analyze(hand);
            trace!(seat = %seat, groups = groups.len(), "rebuilt candidates");
            groups
        })
    }

    /// Number of groups the hand decomposes into.
    pub fn group_count(&mut self) -> usize {
        self.candidates().len()
    }

    /// How this seat looks to its neighbours.
    #[must_use]
    pub fn neighbor(&self) -> Neighbor {
        Neighbor {
            seat: self.seat,
            landlord: self.landlord,
            cards_left: self.hand.len(),
        }
    }

    /// Choose a response with the rule-based policy and discard the played
    /// cards.
    pub fn respond(&mut self, last: Option<&LastPlay>, before: Neighbor, after: Neighbor) -> Response {
        let seat = self.seat;
        let landlord = self.landlord;
        let response = policy::respond(&ResponseContext {
            seat,
            landlord,
            candidates: self.candidates(),
            last,
            before,
            after,
        });

        if let Response::Play(group) = response {
            self.discard(group.cards());
        }
        response
    }
}
