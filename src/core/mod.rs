//! Core types: card handles, RNG, configuration, timers, session state, errors.
//!
//! These are the building blocks the card, command and game modules share.

pub mod config;
pub mod entity;
pub mod error;
pub mod rng;
pub mod state;
pub mod timer;

pub use config::{Difficulty, GameConfig, GridConfig};
pub use entity::CardHandle;
pub use error::{ConfigError, GameError};
pub use rng::GameRng;
pub use state::{MatchPhase, SessionState};
pub use timer::{Timer, TimerToken};
