//! Python bindings for the memory-match rules core.
//!
//! Lets scripts drive a headless game, e.g. for automated play-testing.
//!
//! # Quick Start
//!
//! ```python
//! import memory_match as mm
//!
//! game = mm.MemoryGame(["A", "B", "C"], seed=42)
//! game.start("easy")
//! game.select(0)
//! game.select(1)
//! game.tick(1.0)
//! print(game.score, game.combo, game.state)
//! ```

use pyo3::prelude::*;

mod py_game;

pub use py_game::*;

/// memory-match: rules core for a memory card game.
#[pymodule]
fn memory_match(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyMemoryGame>()?;
    Ok(())
}
