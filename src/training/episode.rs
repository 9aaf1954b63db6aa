//! Episode rollouts.
//!
//! An episode records every controlled decision:
//! - the observation the controller saw
//! - the action it chose
//! - the seat that acted
//!
//! Rewards are assigned once the game ends, by role: the winning side gets
//! +1 per seat and the losing side -1.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::controller::Controller;
use crate::core::{ActionIndex, GameError, Seat, SeatMap};
use crate::nn::EncodedState;
use crate::rules::{Environment, Outcome};

/// A single controlled decision.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Step {
    pub seat: Seat,
    pub action: ActionIndex,
    /// Observation from `seat`'s perspective before acting.
    pub state: EncodedState,
}

/// Rollout configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EpisodeConfig {
    /// Seat that receives the bottom cards.
    pub landlord: Seat,

    /// Maximum controlled decisions before giving up.
    pub max_steps: usize,
}

impl Default for EpisodeConfig {
    fn default() -> Self {
        Self {
            landlord: Seat::new(0),
            max_steps: 200,
        }
    }
}

impl EpisodeConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_landlord(mut self, landlord: Seat) -> Self {
        self.landlord = landlord;
        self
    }

    #[must_use]
    pub fn with_max_steps(mut self, max: usize) -> Self {
        self.max_steps = max;
        self
    }
}

/// A finished episode.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Episode {
    pub outcome: Outcome,
    pub winner: Option<Seat>,
    pub landlord: Seat,
    pub steps: Vec<Step>,
    /// Controlled decisions per seat.
    pub step_counts: SeatMap<usize>,
    /// Terminal reward per seat.
    pub rewards: SeatMap<f32>,
}

impl Episode {
    /// Number of controlled decisions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Decisions made by one seat, in order.
    pub fn steps_for(&self, seat: Seat) -> impl Iterator<Item = &Step> {
        self.steps.iter().filter(move |s| s.seat == seat)
    }
}

/// Play one episode from a fresh deal.
///
/// Controlled turns go to `controller`. If the pending seat is not
/// controlled (no seat is), the environment finishes the game on its own.
pub fn run_episode<E, C>(env: &mut E, controller: &mut C, config: &EpisodeConfig) -> Result<Episode, GameError>
where
    E: Environment,
    C: Controller,
{
    env.reset();
    let mut outcome = env.prepare(config.landlord)?;
    let mut steps = Vec::new();
    let mut step_counts: SeatMap<usize> = SeatMap::with_default();

    while !outcome.is_terminal() {
        let Some(seat) = env.to_act() else {
            break;
        };
        if !env.is_controlled(seat) {
            outcome = env.autoplay()?;
            break;
        }
        if steps.len() >= config.max_steps {
            return Err(GameError::Stalled {
                turns: steps.len() as u32,
            });
        }

        let state = env.get_state(seat);
        let mask = env.get_mask(seat);
        let action = controller.act(seat, &state, &mask);
        outcome = env.step(seat, action)?;

        step_counts[seat] += 1;
        steps.push(Step { seat, action, state });
    }

    let landlord = env.landlord().unwrap_or(config.landlord);
    let rewards = SeatMap::new(|seat| outcome.reward(seat == landlord));
    let winner = env.winner();
    debug!(outcome = ?outcome, winner = ?winner, steps = steps.len(), "episode finished");

    Ok(Episode {
        outcome,
        winner,
        landlord,
        steps,
        step_counts,
        rewards,
    })
}
