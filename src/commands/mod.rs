//! Command pattern for card state changes.
//!
//! Every flip and match the game performs goes through a [`Command`] executed
//! by the [`CommandLog`], which keeps a bounded history for undo.
//!
//! ## Example
//!
//! ```
//! use memory_match::cards::{CardIdentity, CardPool};
//! use memory_match::commands::{Command, CommandLog};
//! use memory_match::view::NullAnimator;
//!
//! let mut pool = CardPool::new(2);
//! let card = pool.acquire(CardIdentity::new("sun")).unwrap();
//!
//! let mut log = CommandLog::default();
//! log.execute(Command::flip(card, true), &mut pool, &mut NullAnimator);
//! assert!(pool.get(card).unwrap().is_revealed());
//!
//! log.undo_last(&mut pool, &mut NullAnimator);
//! assert!(!pool.get(card).unwrap().is_revealed());
//! ```

mod command;
mod log;

pub use command::Command;
pub use log::{CommandLog, DEFAULT_HISTORY};
