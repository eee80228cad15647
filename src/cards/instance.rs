//! Card entities - runtime card state.
//!
//! `CardEntity` is one card on the table: its face plus where it is in the
//! hidden/revealed/matched cycle. Visual flips are driven separately by the
//! view; this is the authoritative state the game rules read.

use serde::{Deserialize, Serialize};

use super::identity::CardIdentity;

/// Which side of the card is showing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Visibility {
    /// Face down.
    #[default]
    Hidden,
    /// Face up, not yet paired.
    Revealed,
    /// Paired. Terminal for the round.
    Matched,
}

/// A card in play.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardEntity {
    identity: CardIdentity,
    visibility: Visibility,
    interactable: bool,
}

impl CardEntity {
    /// Create a face-down, interactable card.
    #[must_use]
    pub fn new(identity: CardIdentity) -> Self {
        Self {
            identity,
            visibility: Visibility::Hidden,
            interactable: true,
        }
    }

    /// Give the card a new face and put it face down.
    pub fn reset(&mut self, identity: CardIdentity) {
        self.identity = identity;
        self.visibility = Visibility::Hidden;
        self.interactable = true;
    }

    /// Turn face down and stop accepting input (card returned to the pool).
    pub fn make_inert(&mut self) {
        self.visibility = Visibility::Hidden;
        self.interactable = false;
    }

    #[must_use]
    pub fn identity(&self) -> &CardIdentity {
        &self.identity
    }

    #[must_use]
    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    #[must_use]
    pub fn is_interactable(&self) -> bool {
        self.interactable
    }

    #[must_use]
    pub fn is_revealed(&self) -> bool {
        self.visibility == Visibility::Revealed
    }

    #[must_use]
    pub fn is_matched(&self) -> bool {
        self.visibility == Visibility::Matched
    }

    /// Can a player pick this card right now?
    #[must_use]
    pub fn is_selectable(&self) -> bool {
        self.interactable && self.visibility == Visibility::Hidden
    }

    /// Does this card pair with `other`?
    #[must_use]
    pub fn pairs_with(&self, other: &CardEntity) -> bool {
        self.identity == other.identity
    }

    /// Show or hide the face.
    ///
    /// Matched cards stay matched; returns `false` when nothing changed.
    pub fn flip(&mut self, reveal: bool) -> bool {
        let target = if reveal {
            Visibility::Revealed
        } else {
            Visibility::Hidden
        };
        if self.is_matched() || self.visibility == target {
            return false;
        }
        self.visibility = target;
        true
    }

    /// Mark the card as paired and lock it.
    pub fn set_matched(&mut self) {
        self.visibility = Visibility::Matched;
        self.interactable = false;
    }

    /// Enable or disable input, e.g. while the view animates a flip.
    ///
    /// Matched cards never become interactable again.
    pub fn set_interactable(&mut self, interactable: bool) {
        self.interactable = interactable && !self.is_matched();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(token: &str) -> CardEntity {
        CardEntity::new(CardIdentity::new(token))
    }

    #[test]
    fn test_new_card_is_hidden_and_selectable() {
        let c = card("a");
        assert_eq!(c.visibility(), Visibility::Hidden);
        assert!(c.is_interactable());
        assert!(c.is_selectable());
    }

    #[test]
    fn test_flip_cycle() {
        let mut c = card("a");

        assert!(c.flip(true));
        assert!(c.is_revealed());
        assert!(!c.is_selectable());
        assert!(!c.flip(true));

        assert!(c.flip(false));
        assert_eq!(c.visibility(), Visibility::Hidden);
    }

    #[test]
    fn test_matched_is_terminal() {
        let mut c = card("a");
        c.flip(true);
        c.set_matched();

        assert!(c.is_matched());
        assert!(!c.flip(false));
        assert!(c.is_matched());

        c.set_interactable(true);
        assert!(!c.is_interactable());
    }

    #[test]
    fn test_reset_and_inert() {
        let mut c = card("a");
        c.set_matched();

        c.reset(CardIdentity::new("b"));
        assert_eq!(c.identity().as_str(), "b");
        assert!(c.is_selectable());

        c.flip(true);
        c.make_inert();
        assert_eq!(c.visibility(), Visibility::Hidden);
        assert!(!c.is_interactable());
    }

    #[test]
    fn test_pairs_with() {
        assert!(card("a").pairs_with(&card("a")));
        assert!(!card("a").pairs_with(&card("b")));
    }

    #[test]
    fn test_serialization() {
        let mut c = card("star");
        c.flip(true);
        let json = serde_json::to_string(&c).unwrap();
        let deserialized: CardEntity = serde_json::from_str(&json).unwrap();
        assert_eq!(c, deserialized);
    }
}
