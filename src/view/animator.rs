//! Card visual driver.
//!
//! The game tells the view what happened to a card; the view animates it on
//! its own schedule. Calls are fire-and-forget: the rules never wait for an
//! animation to finish.

use crate::core::CardHandle;

/// Receives card transitions for display.
pub trait CardAnimator {
    /// A card turned face up (`reveal`) or face down.
    fn flip(&mut self, card: CardHandle, reveal: bool);

    /// A card was paired and leaves play.
    fn matched(&mut self, card: CardHandle);

    /// A card went back to the pool.
    fn released(&mut self, _card: CardHandle) {}
}

/// Animator for headless play.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullAnimator;

impl CardAnimator for NullAnimator {
    fn flip(&mut self, _card: CardHandle, _reveal: bool) {}

    fn matched(&mut self, _card: CardHandle) {}
}
