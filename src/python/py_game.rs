//! Game bindings for Python.

use numpy::PyArray1;
use pyo3::exceptions::{PyRuntimeError, PyValueError};
use pyo3::prelude::*;

use crate::cards::{ActionCatalog, ACTION_SPACE_SIZE};
use crate::core::{GameConfig, GameError, Seat};
use crate::games::landlord::Game;
use crate::rules::Outcome;

fn seat(index: u8) -> PyResult<Seat> {
    if usize::from(index) < Seat::COUNT {
        Ok(Seat::new(index))
    } else {
        Err(PyValueError::new_err(format!(
            "seat {} out of range (0..{})",
            index,
            Seat::COUNT
        )))
    }
}

fn to_py(err: GameError) -> PyErr {
    PyRuntimeError::new_err(err.to_string())
}

fn result(outcome: Outcome) -> (u8, bool) {
    (outcome.code(), outcome.is_terminal())
}

/// Python wrapper for the landlord game.
///
/// Seats listed in `controlled` act through `step`; the rest use the
/// built-in rule-based policy.
#[pyclass(name = "Game")]
pub struct PyGame {
    game: Game,
}

#[pymethods]
impl PyGame {
    #[new]
    #[pyo3(signature = (seed = 0, controlled = Vec::new()))]
    fn new(seed: u64, controlled: Vec<u8>) -> PyResult<Self> {
        let mut config = GameConfig::new(seed);
        for index in controlled {
            config = config.with_controlled(seat(index)?);
        }
        Ok(Self {
            game: Game::new(config),
        })
    }

    /// Reshuffle and start a new episode.
    fn reset(&mut self) {
        self.game.reset();
    }

    /// Deal and run uncontrolled seats up to the first controlled turn.
    ///
    /// Returns `(code, done)`.
    fn prepare(&mut self, lord_idx: u8) -> PyResult<(u8, bool)> {
        self.game.prepare(seat(lord_idx)?).map(result).map_err(to_py)
    }

    /// Observation for a seat as a float32 array of length 162.
    fn get_state<'py>(&self, py: Python<'py>, idx: u8) -> PyResult<Bound<'py, PyArray1<f32>>> {
        let state = self.game.get_state(seat(idx)?);
        Ok(PyArray1::from_slice_bound(py, state.as_slice()))
    }

    /// Legal-action mask for a seat as a bool array.
    fn get_mask<'py>(&self, py: Python<'py>, idx: u8) -> PyResult<Bound<'py, PyArray1<bool>>> {
        Ok(PyArray1::from_vec_bound(py, self.game.get_mask(seat(idx)?)))
    }

    /// Apply an action for a controlled seat.
    ///
    /// Returns `(code, done)` where code is 0 to continue, 1 if the peasants
    /// won and 2 if the landlord won. Raises `ValueError` for a seat that is
    /// not to act or an action not in the seat's mask.
    fn step(&mut self, idx: u8, action: usize) -> PyResult<(u8, bool)> {
        let seat = seat(idx)?;
        if let Some(next) = self.game.to_act().filter(|&next| next != seat) {
            return Err(PyValueError::new_err(format!(
                "{} cannot act; {} is to act",
                seat, next
            )));
        }
        if action >= ACTION_SPACE_SIZE || !self.game.get_mask(seat)[action] {
            return Err(PyValueError::new_err(format!(
                "action {} is not legal for {}",
                action, seat
            )));
        }
        self.game.step(seat, action).map(result).map_err(to_py)
    }

    /// Finish the game with the built-in policy. Returns `(code, done)`.
    fn autoplay(&mut self) -> PyResult<(u8, bool)> {
        self.game.autoplay().map(result).map_err(to_py)
    }

    fn set_controlled(&mut self, idx: u8, controlled: bool) -> PyResult<()> {
        self.game.set_controlled(seat(idx)?, controlled);
        Ok(())
    }

    /// Seat whose turn is pending.
    #[getter]
    fn next_turn(&self) -> Option<u8> {
        self.game.to_act().map(|s| s.0)
    }

    #[getter]
    fn lord_idx(&self) -> Option<u8> {
        self.game.landlord().map(|s| s.0)
    }

    #[getter]
    fn winner(&self) -> Option<u8> {
        self.game.winner().map(|s| s.0)
    }

    #[getter]
    fn action_space_size(&self) -> usize {
        ACTION_SPACE_SIZE
    }

    /// Cards a seat holds, as rank symbols.
    fn hand(&self, idx: u8) -> PyResult<Vec<String>> {
        Ok(self.game.hand(seat(idx)?).ranks().map(|r| r.to_string()).collect())
    }

    /// Cards played by a catalog action, as rank symbols.
    #[staticmethod]
    fn action_cards(action: usize) -> PyResult<Vec<String>> {
        if action >= ACTION_SPACE_SIZE {
            return Err(PyValueError::new_err(format!("action {} out of range", action)));
        }
        Ok(ActionCatalog::shared()
            .cards(action)
            .ranks()
            .map(|r| r.to_string())
            .collect())
    }

    fn __repr__(&self) -> String {
        let status = if self.game.outcome().is_terminal() {
            "over"
        } else {
            "ongoing"
        };
        format!(
            "Game(turn={}, landlord={:?}, next={:?}, status={})",
            self.game.turn(),
            self.game.landlord().map(|s| s.0),
            self.game.to_act().map(|s| s.0),
            status
        )
    }
}
