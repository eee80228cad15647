//! # memory-match
//!
//! Rules core for a single-player memory (concentration) card game.
//!
//! ## Design Principles
//!
//! 1. **Presentation-Free**: The core never renders, animates or reads input.
//!    Views subscribe to [`GameEvent`]s and drive a [`CardAnimator`].
//!
//! 2. **Deterministic**: Dealing uses a seeded [`GameRng`]; time only moves
//!    through [`MemoryGame::tick`]. Same seed and same inputs, same game.
//!
//! 3. **Configuration Over Convention**: Grids, timing and scoring come from
//!    [`GameConfig`], loadable from JSON.
//!
//! ## Architecture
//!
//! - **Deferred Resolution**: The second selection schedules a check on the
//!   game clock. Input is ignored until it fires.
//!
//! - **Pooled Cards**: Cards live in a fixed-capacity [`CardPool`] and are
//!   addressed by generation-checked [`CardHandle`]s, so a handle from a
//!   finished round never aliases a new card.
//!
//! - **Command History**: Every card transition goes through a bounded
//!   [`CommandLog`].
//!
//! ## Modules
//!
//! - `core`: Handles, configuration, errors, RNG, session state, timer
//! - `cards`: Identities, catalog, card entities, pool, pair selection
//! - `commands`: Card commands and their history
//! - `events`: Game events and the listener bus
//! - `scoring`: Combo scoring policy
//! - `save`: Persistent high/total score
//! - `view`: Animator seam and HUD model
//! - `game`: The [`MemoryGame`] session and grid layout
//!
//! ## Example
//!
//! ```
//! use std::time::Duration;
//! use memory_match::{CardCatalog, Difficulty, GameConfig, GridConfig, MemoryGame};
//!
//! let config = GameConfig::new().with_grid(GridConfig::new(Difficulty::Easy, 2, 2));
//! let catalog = CardCatalog::from_tokens(["A", "B"]);
//! let mut game = MemoryGame::builder(config, catalog).seed(7).build().unwrap();
//!
//! game.start_game(Difficulty::Easy).unwrap();
//! game.select_at(0);
//! game.select_at(1);
//! assert!(game.is_resolving());
//!
//! game.tick(Duration::from_secs(1));
//! assert!(!game.is_resolving());
//! ```

pub mod cards;
pub mod commands;
pub mod core;
pub mod events;
pub mod game;
pub mod save;
pub mod scoring;
pub mod view;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    CardHandle, ConfigError, Difficulty, GameConfig, GameError, GameRng,
    GridConfig, MatchPhase, SessionState, Timer, TimerToken,
};

pub use crate::cards::{
    CardCatalog, CardEntity, CardIdentity, CardPool, PairSelector, SelectionStrategy, Visibility,
};

pub use crate::commands::{Command, CommandLog};

pub use crate::events::{EventBus, EventKind, GameEvent, SubscriptionId};

pub use crate::scoring::{ScoreState, ScoringPolicy};

pub use crate::save::{FileScoreStore, MemoryScoreStore, ScoreRecord, ScoreStore, StoreError};

pub use crate::view::{CardAnimator, HudModel, NullAnimator};

pub use crate::game::{
    IgnoreReason, MemoryGame, MemoryGameBuilder, Position, Resolution, Selection,
};
