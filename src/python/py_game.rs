//! Game bindings for Python.

use std::time::Duration;

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::cards::CardCatalog;
use crate::core::{Difficulty, GameConfig};
use crate::game::{MemoryGame, Resolution};

fn value_error(err: impl std::fmt::Display) -> PyErr {
    PyErr::new::<PyValueError, _>(err.to_string())
}

/// Python wrapper for MemoryGame.
///
/// Uses an in-memory score store and no animator.
#[pyclass(name = "MemoryGame", unsendable)]
pub struct PyMemoryGame {
    game: MemoryGame,
}

#[pymethods]
impl PyMemoryGame {
    /// Create a game.
    ///
    /// # Arguments
    /// - tokens: Card faces to deal from
    /// - seed: RNG seed for deterministic deals
    /// - config_json: Optional JSON game configuration; defaults otherwise
    #[new]
    #[pyo3(signature = (tokens, seed = 42, config_json = None))]
    fn new(tokens: Vec<String>, seed: u64, config_json: Option<&str>) -> PyResult<Self> {
        let config = match config_json {
            Some(json) => GameConfig::from_json(json).map_err(value_error)?,
            None => GameConfig::default(),
        };
        let game = MemoryGame::builder(config, CardCatalog::from_tokens(tokens))
            .seed(seed)
            .build()
            .map_err(value_error)?;
        Ok(Self { game })
    }

    /// Deal a round. `difficulty` is "easy", "medium" or "hard".
    fn start(&mut self, difficulty: &str) -> PyResult<()> {
        let difficulty: Difficulty = difficulty.parse().map_err(value_error)?;
        self.game.start_game(difficulty).map_err(value_error)
    }

    /// Select the card at a grid index. Returns whether it was accepted.
    fn select(&mut self, index: usize) -> bool {
        self.game.select_at(index).is_accepted()
    }

    /// Advance the game clock.
    ///
    /// Returns `True` for a match, `False` for a mismatch, `None` if nothing
    /// resolved.
    fn tick(&mut self, seconds: f64) -> PyResult<Option<bool>> {
        let dt = Duration::try_from_secs_f64(seconds).map_err(value_error)?;
        Ok(self.game.tick(dt).map(|r| matches!(r, Resolution::Matched { .. })))
    }

    fn pause(&mut self) -> bool {
        self.game.pause()
    }

    fn resume(&mut self) -> bool {
        self.game.resume()
    }

    fn cleanup(&mut self) {
        self.game.cleanup();
    }

    /// Face token of the card at `index`, if it is face up or matched.
    fn face(&self, index: usize) -> Option<String> {
        let card = self.game.card_handle(index).and_then(|h| self.game.card(h))?;
        (card.is_revealed() || card.is_matched()).then(|| card.identity().to_string())
    }

    #[getter]
    fn card_count(&self) -> usize {
        self.game.cards().len()
    }

    #[getter]
    fn score(&self) -> u64 {
        self.game.score()
    }

    #[getter]
    fn combo(&self) -> u32 {
        self.game.combo()
    }

    #[getter]
    fn high_score(&self) -> u64 {
        self.game.high_score()
    }

    #[getter]
    fn state(&self) -> String {
        self.game.session().to_string()
    }

    #[getter]
    fn is_over(&self) -> bool {
        self.game.session() == crate::core::SessionState::GameOver
    }

    fn __repr__(&self) -> String {
        format!(
            "MemoryGame(state={}, score={}, combo={})",
            self.game.session(),
            self.game.score(),
            self.game.combo()
        )
    }
}
