//! The game session.
//!
//! - [`MemoryGame`]: rounds, selection, resolution, scoring and game over
//! - [`layout`]: where each card of a grid sits

pub mod layout;
mod memory;

pub use layout::{grid_positions, ortho_half_height, Position};
pub use memory::{IgnoreReason, MemoryGame, MemoryGameBuilder, Resolution, Selection};
