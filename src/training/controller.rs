//! Action selection for controlled seats.

use crate::core::{ActionIndex, GameRng, Seat, PASS};
use crate::nn::{EncodedState, PolicyNetwork};

/// Chooses an action for a controlled seat.
///
/// Implementations must return an index set in `mask`.
pub trait Controller {
    fn act(&mut self, seat: Seat, state: &EncodedState, mask: &[bool]) -> ActionIndex;
}

impl<F> Controller for F
where
    F: FnMut(Seat, &EncodedState, &[bool]) -> ActionIndex,
{
    fn act(&mut self, seat: Seat, state: &EncodedState, mask: &[bool]) -> ActionIndex {
        self(seat, state, mask)
    }
}

/// Samples from a policy network restricted to legal actions.
///
/// When the network puts no mass on any legal action, falls back to a
/// uniform choice among them.
pub struct PolicyController<P: PolicyNetwork> {
    policy: P,
    rng: GameRng,
}

impl<P: PolicyNetwork> PolicyController<P> {
    #[must_use]
    pub fn new(policy: P, seed: u64) -> Self {
        Self {
            policy,
            rng: GameRng::new(seed),
        }
    }

    pub fn policy(&self) -> &P {
        &self.policy
    }
}

impl<P: PolicyNetwork> Controller for PolicyController<P> {
    fn act(&mut self, _seat: Seat, state: &EncodedState, mask: &[bool]) -> ActionIndex {
        let probs = self.policy.predict(state);
        let weights: Vec<f32> = mask
            .iter()
            .enumerate()
            .map(|(i, &legal)| if legal { probs.get(i).copied().unwrap_or(0.0) } else { 0.0 })
            .collect();

        if let Some(action) = self.rng.choose_weighted(&weights) {
            return action;
        }

        let legal: Vec<ActionIndex> = mask
            .iter()
            .enumerate()
            .filter_map(|(i, &legal)| legal.then_some(i))
            .collect();
        if legal.is_empty() {
            PASS
        } else {
            legal[self.rng.index(legal.len())]
        }
    }
}
