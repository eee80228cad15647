//! Card catalog.
//!
//! The `CardCatalog` is the fixed set of distinct faces a round can be dealt
//! from. It is explicit data handed to the pair selector; nothing is
//! discovered from disk.

use rustc_hash::FxHashMap;

use super::identity::CardIdentity;

/// Ordered set of distinct card identities.
///
/// Insertion order is kept: the cycling selection strategy deals faces in
/// catalog order.
///
/// ## Example
///
/// ```
/// use memory_match::cards::CardCatalog;
///
/// let mut catalog = CardCatalog::new();
/// assert!(catalog.register("sun"));
/// assert!(catalog.register("moon"));
/// assert!(!catalog.register("sun")); // duplicate ignored
///
/// assert_eq!(catalog.len(), 2);
/// assert_eq!(catalog.position("moon"), Some(1));
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardCatalog {
    cards: Vec<CardIdentity>,
    index: FxHashMap<CardIdentity, usize>,
}

impl CardCatalog {
    /// Create an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from tokens, dropping duplicates.
    pub fn from_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<CardIdentity>,
    {
        let mut catalog = Self::new();
        for token in tokens {
            catalog.register(token);
        }
        catalog
    }

    /// Add an identity.
    ///
    /// Returns `false` (and changes nothing) if it is already present.
    pub fn register(&mut self, identity: impl Into<CardIdentity>) -> bool {
        let identity = identity.into();
        if self.index.contains_key(&identity) {
            return false;
        }
        self.index.insert(identity.clone(), self.cards.len());
        self.cards.push(identity);
        true
    }

    /// Position of an identity in catalog order.
    #[must_use]
    pub fn position(&self, token: &str) -> Option<usize> {
        self.index.get(&CardIdentity::new(token)).copied()
    }

    /// Check if an identity is registered.
    #[must_use]
    pub fn contains(&self, identity: &CardIdentity) -> bool {
        self.index.contains_key(identity)
    }

    /// Identity at a catalog position.
    #[must_use]
    pub fn get(&self, position: usize) -> Option<&CardIdentity> {
        self.cards.get(position)
    }

    /// All identities in catalog order.
    #[must_use]
    pub fn as_slice(&self) -> &[CardIdentity] {
        &self.cards
    }

    /// Number of distinct identities.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &CardIdentity> {
        self.cards.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_and_lookup() {
        let mut catalog = CardCatalog::new();
        assert!(catalog.is_empty());

        catalog.register("a");
        catalog.register("b");

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get(0), Some(&CardIdentity::new("a")));
        assert_eq!(catalog.position("b"), Some(1));
        assert_eq!(catalog.position("z"), None);
        assert!(catalog.contains(&CardIdentity::new("a")));
    }

    #[test]
    fn test_duplicates_dropped() {
        let catalog = CardCatalog::from_tokens(["x", "y", "x", "z", "y"]);
        let names: Vec<_> = catalog.iter().map(CardIdentity::as_str).collect();
        assert_eq!(names, vec!["x", "y", "z"]);
    }
}
