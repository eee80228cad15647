use thiserror::Error;

use super::config::Difficulty;

/// Problems with the game configuration.
///
/// All of these are detected before a round mutates any state.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("No grid configured for difficulty {0}")]
    UnknownDifficulty(Difficulty),
    #[error("Grid for {difficulty} is {rows}x{columns}: card count must be even")]
    OddGrid {
        difficulty: Difficulty,
        rows: u32,
        columns: u32,
    },
    #[error("Grid for {0} has no cards")]
    EmptyGrid(Difficulty),
    #[error("Difficulty {0} is configured more than once")]
    DuplicateDifficulty(Difficulty),
    #[error("Invalid value for {name}: {value}")]
    InvalidTunable { name: &'static str, value: f32 },
    #[error("Card pool capacity must be positive")]
    ZeroPoolCapacity,
    #[error("Failed to parse game config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Failures reported by game operations.
#[derive(Debug, Error)]
pub enum GameError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("Card catalog is empty")]
    EmptyCatalog,
    #[error("Catalog has {available} distinct cards, {requested} pairs requested")]
    CatalogTooSmall { requested: usize, available: usize },
    #[error("{pairs} pairs need {} cards, pool capacity is {capacity}", pairs * 2)]
    PairCountExceedsCapacity { pairs: usize, capacity: usize },
    #[error("Card pool exhausted after {acquired} of {requested} cards")]
    PoolExhausted { requested: usize, acquired: usize },
}
