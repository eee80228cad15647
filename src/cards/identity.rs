//! Card identities.
//!
//! A `CardIdentity` is the face of a card: the value two cards must share to
//! form a pair. It is an opaque token; the game only compares it for
//! equality.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Face value shared by the two cards of a pair.
///
/// Cloning is cheap (reference-counted string).
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardIdentity(Arc<str>);

impl CardIdentity {
    /// Create an identity from any string-like token.
    pub fn new(token: impl AsRef<str>) -> Self {
        Self(Arc::from(token.as_ref()))
    }

    /// The token text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for CardIdentity {
    fn from(token: &str) -> Self {
        Self::new(token)
    }
}

impl From<String> for CardIdentity {
    fn from(token: String) -> Self {
        Self(Arc::from(token))
    }
}

impl std::fmt::Display for CardIdentity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equality_by_token() {
        assert_eq!(CardIdentity::new("apple"), CardIdentity::from("apple"));
        assert_ne!(CardIdentity::new("apple"), CardIdentity::from("pear".to_string()));
    }

    #[test]
    fn test_display() {
        assert_eq!(CardIdentity::new("star").to_string(), "star");
        assert_eq!(CardIdentity::new("star").as_str(), "star");
    }

    #[test]
    fn test_serialization() {
        let id = CardIdentity::new("moon");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"moon\"");
        let deserialized: CardIdentity = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
    }
}
