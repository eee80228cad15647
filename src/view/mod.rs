//! Presentation-side collaborators.
//!
//! - [`CardAnimator`]: receives card transitions to animate
//! - [`HudModel`]: score/combo/state mirror fed by game events

pub mod animator;
pub mod hud;

pub use animator::{CardAnimator, NullAnimator};
pub use hud::{difficulty_description, HudModel};
