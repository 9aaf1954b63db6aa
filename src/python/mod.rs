//! Python bindings.
//!
//! # Quick Start
//!
//! ```python
//! import rust_landlord as rl
//!
//! game = rl.Game(seed=42, controlled=[0])
//! game.prepare(0)
//! while True:
//!     seat = game.next_turn
//!     mask = game.get_mask(seat)
//!     action = agent.act(game.get_state(seat), mask)
//!     code, done = game.step(seat, action)
//!     if done:
//!         break
//! ```

use pyo3::prelude::*;

mod py_game;

pub use py_game::*;

/// rust-landlord: fight-the-landlord environment for RL training.
#[pymodule]
fn rust_landlord(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyGame>()?;
    m.add("ACTION_SPACE_SIZE", crate::cards::ACTION_SPACE_SIZE)?;
    Ok(())
}
