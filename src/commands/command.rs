//! Reversible card actions.

use serde::{Deserialize, Serialize};

use crate::cards::CardPool;
use crate::core::CardHandle;
use crate::view::CardAnimator;

/// A state change on one or two cards.
///
/// Commands carry handles, not cards: executing one against a pool whose
/// card has since been released does nothing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    /// Turn a card face up (`reveal = true`) or face down.
    Flip { card: CardHandle, reveal: bool },
    /// Pair two cards. Cannot be undone.
    Match { first: CardHandle, second: CardHandle },
}

impl Command {
    /// Shorthand for a flip.
    #[must_use]
    pub const fn flip(card: CardHandle, reveal: bool) -> Self {
        Command::Flip { card, reveal }
    }

    /// Shorthand for a match.
    #[must_use]
    pub const fn matched(first: CardHandle, second: CardHandle) -> Self {
        Command::Match { first, second }
    }

    /// Apply the transition.
    pub fn execute(&self, cards: &mut CardPool, animator: &mut dyn CardAnimator) {
        match *self {
            Command::Flip { card, reveal } => apply_flip(cards, animator, card, reveal),
            Command::Match { first, second } => {
                for handle in [first, second] {
                    if let Some(card) = cards.get_mut(handle) {
                        card.set_matched();
                        animator.matched(handle);
                    }
                }
            }
        }
    }

    /// Reverse the transition.
    ///
    /// A flip turns the card back over; a match is terminal and is left alone.
    pub fn undo(&self, cards: &mut CardPool, animator: &mut dyn CardAnimator) {
        match *self {
            Command::Flip { card, reveal } => apply_flip(cards, animator, card, !reveal),
            Command::Match { .. } => {}
        }
    }
}

fn apply_flip(
    cards: &mut CardPool,
    animator: &mut dyn CardAnimator,
    handle: CardHandle,
    reveal: bool,
) {
    if let Some(card) = cards.get_mut(handle) {
        if card.flip(reveal) {
            animator.flip(handle, reveal);
        }
    }
}
