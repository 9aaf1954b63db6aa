//! Hand decomposition.
//!
//! `analyze` splits a hand into catalog groups, greedily taking the shapes
//! that remove the most cards per turn first:
//!
//! 1. rocket, bombs
//! 2. planes, pair chains, straights (longest run from the lowest start)
//! 3. the remaining triples, pairs and singles
//! 4. each leftover triple takes the weakest single (else pair) below Two
//!    as a kicker
//!
//! The result is sorted weakest first, with bombs and the rocket last. The
//! order is fully determined by the hand, so repeated calls agree.

use smallvec::SmallVec;

use super::group::{CardGroup, GroupKind, MIN_PAIR_CHAIN, MIN_PLANE, MIN_STRAIGHT};
use super::rank::Rank;
use super::set::CardSet;

/// Decomposed hand. A 20-card hand rarely needs more than a dozen groups.
pub type Candidates = SmallVec<[CardGroup; 16]>;

/// Split a hand into playable groups, weakest first.
#[must_use]
pub fn analyze(hand: &CardSet) -> Candidates {
    let mut counts = *hand.counts();
    let mut out = Candidates::new();

    let bj = Rank::BlackJoker.value() as usize;
    let rj = Rank::RedJoker.value() as usize;
    if counts[bj] == 1 && counts[rj] == 1 {
        counts[bj] = 0;
        counts[rj] = 0;
        out.push(CardGroup::rocket());
    }

    for rank in Rank::ORDINARY {
        let slot = &mut counts[rank.value() as usize];
        if *slot == 4 {
            *slot = 0;
            out.push(CardGroup::bomb(rank));
        }
    }

    take_chains(&mut counts, 3, MIN_PLANE, &mut out);
    take_chains(&mut counts, 2, MIN_PAIR_CHAIN, &mut out);
    take_chains(&mut counts, 1, MIN_STRAIGHT, &mut out);

    let mut triples: SmallVec<[Rank; 6]> = SmallVec::new();
    for rank in Rank::ALL {
        let slot = &mut counts[rank.value() as usize];
        if *slot == 3 {
            *slot = 0;
            triples.push(rank);
        }
    }

    for triple in triples {
        let kicker_below_two = |counts: &[u8; Rank::COUNT], n: u8| {
            Rank::ALL
                .into_iter()
                .filter(|r| *r < Rank::Two)
                .find(|r| counts[r.value() as usize] == n)
        };
        if let Some(kicker) = kicker_below_two(&counts, 1) {
            counts[kicker.value() as usize] = 0;
            out.push(CardGroup::triple_single(triple, kicker));
        } else if let Some(kicker) = kicker_below_two(&counts, 2) {
            counts[kicker.value() as usize] = 0;
            out.push(CardGroup::triple_pair(triple, kicker));
        } else {
            out.push(CardGroup::triple(triple));
        }
    }

    for rank in Rank::ALL {
        match counts[rank.value() as usize] {
            2 => out.push(CardGroup::pair(rank)),
            1 => out.push(CardGroup::single(rank)),
            _ => {}
        }
    }

    out.sort_by_key(strength_key);
    out
}

/// Number of groups the hand decomposes into: roughly, how many turns of
/// uncontested leads it would take to empty it.
#[must_use]
pub fn group_count(hand: &CardSet) -> usize {
    analyze(hand).len()
}

fn strength_key(group: &CardGroup) -> (bool, bool, Rank, GroupKind, u8) {
    (
        group.is_bomb(),
        group.kind() == GroupKind::Rocket,
        group.primary(),
        group.kind(),
        group.chain_len(),
    )
}

/// Repeatedly remove the longest run of `width`-deep chainable ranks,
/// starting from the lowest rank where a run of at least `min` exists.
fn take_chains(counts: &mut [u8; Rank::COUNT], width: u8, min: u8, out: &mut Candidates) {
    let top = Rank::Ace.value() as usize;
    loop {
        let mut found = None;
        let mut start = 0;
        while start <= top {
            let mut end = start;
            while end <= top && counts[end] >= width {
                end += 1;
            }
            if end - start >= min as usize {
                found = Some((start, end - start));
                break;
            }
            start = end + 1;
        }

        let Some((start, len)) = found else {
            return;
        };
        for slot in counts.iter_mut().skip(start).take(len) {
            *slot -= width;
        }
        let group = Rank::from_value(start as u8)
            .and_then(|r| CardGroup::chain(r, len as u8, width));
        if let Some(group) = group {
            out.push(group);
        }
    }
}
