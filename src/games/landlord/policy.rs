//! Rule-based response policy for uncontrolled seats.
//!
//! `respond` is a pure function of the acting seat's candidates, its role,
//! and the table. Candidates come from `analyze`, weakest first, so "first
//! matching candidate" is the cheapest one.

use serde::{Deserialize, Serialize};

use crate::cards::{CardGroup, Rank};
use crate::core::Seat;

/// The active play on the table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LastPlay {
    pub owner: Seat,
    pub group: CardGroup,
}

/// What the acting seat knows about an adjacent seat.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Neighbor {
    pub seat: Seat,
    pub landlord: bool,
    pub cards_left: usize,
}

/// Inputs to the decision table.
#[derive(Clone, Copy, Debug)]
pub struct ResponseContext<'a> {
    /// The acting seat.
    pub seat: Seat,
    /// Whether the acting seat is the landlord.
    pub landlord: bool,
    /// The acting seat's playable groups in analyzer order. Its length is
    /// the hand's group count.
    pub candidates: &'a [CardGroup],
    pub last: Option<&'a LastPlay>,
    /// Seat that acts before this one.
    pub before: Neighbor,
    /// Seat that acts after this one.
    pub after: Neighbor,
}

impl ResponseContext<'_> {
    fn holds_lead(&self) -> bool {
        self.last.map_or(true, |last| last.owner == self.seat)
    }

    fn is_landlord(&self, seat: Seat) -> bool {
        if seat == self.seat {
            self.landlord
        } else if seat == self.before.seat {
            self.before.landlord
        } else {
            self.after.landlord
        }
    }

    fn first(&self, pred: impl Fn(&CardGroup) -> bool) -> Option<CardGroup> {
        self.candidates.iter().copied().find(|g| pred(g))
    }
}

/// A seat's decision.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Response {
    Play(CardGroup),
    Pass,
}

impl Response {
    #[must_use]
    pub fn is_pass(&self) -> bool {
        matches!(self, Response::Pass)
    }

    #[must_use]
    pub fn group(&self) -> Option<&CardGroup> {
        match self {
            Response::Play(group) => Some(group),
            Response::Pass => None,
        }
    }
}

/// Decide a response. An empty candidate list always passes.
#[must_use]
pub fn respond(ctx: &ResponseContext<'_>) -> Response {
    let (Some(&weakest), Some(&strongest)) = (ctx.candidates.first(), ctx.candidates.last()) else {
        return Response::Pass;
    };

    if ctx.holds_lead() {
        return Response::Play(lead(ctx, weakest, strongest));
    }

    let Some(last) = ctx.last else {
        return Response::Pass;
    };
    if !ctx.is_landlord(last.owner) {
        support(ctx, last)
    } else {
        contest(ctx, last)
    }
}

fn below_ace(group: &CardGroup) -> bool {
    group.primary() < Rank::Ace
}

/// Opening a new round. Never passes.
fn lead(ctx: &ResponseContext<'_>, weakest: CardGroup, strongest: CardGroup) -> CardGroup {
    let after = ctx.after;

    if ctx.candidates.len() == 2 {
        return strongest;
    }
    if !after.landlord && after.cards_left == 1 {
        // Feed the ally's last card.
        return ctx.first(CardGroup::is_single).unwrap_or(weakest);
    }
    if after.landlord && after.cards_left == 1 {
        return ctx.first(|g| !g.is_single()).unwrap_or(strongest);
    }
    ctx.first(|g| !g.is_single() && below_ace(g)).unwrap_or(weakest)
}

/// Answering a peasant's play, from either side.
fn support(ctx: &ResponseContext<'_>, last: &LastPlay) -> Response {
    let beats = |g: &CardGroup| g.bigger_than(&last.group);

    let chosen = if ctx.candidates.len() <= 2 {
        ctx.first(beats)
    } else if ctx.before.landlord && ctx.before.seat != last.owner {
        None
    } else {
        ctx.first(|g| beats(g) && !g.is_bomb() && below_ace(g))
    };
    chosen.map_or(Response::Pass, Response::Play)
}

/// Answering the landlord.
fn contest(ctx: &ResponseContext<'_>, last: &LastPlay) -> Response {
    let beats = |g: &CardGroup| g.bigger_than(&last.group);

    ctx.first(|g| beats(g) && !g.is_bomb())
        .or_else(|| ctx.first(beats))
        .map_or(Response::Pass, Response::Play)
}
