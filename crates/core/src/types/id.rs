//! Product identifier type.
//!
//! Product IDs are opaque strings supplied by the catalog (e.g. `watch2`).
//! The cart compares them by string equality only - no format is imposed.

use core::fmt;

use serde::{Deserialize, Serialize};

/// An opaque product identifier.
///
/// Wrapping the raw string prevents accidentally mixing product IDs with
/// other string-typed values such as image references.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    /// Create a product ID from a raw string.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the ID as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the ID and returns its inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ProductId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl From<String> for ProductId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl AsRef<str> for ProductId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_equality_is_by_string() {
        assert_eq!(ProductId::new("watch2"), ProductId::from("watch2"));
        assert_ne!(ProductId::new("watch2"), ProductId::new("watch5"));
    }

    #[test]
    fn test_serde_transparent() {
        let id = ProductId::new("watch2");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"watch2\"");

        let parsed: ProductId = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn test_display() {
        assert_eq!(ProductId::new("watch8").to_string(), "watch8");
    }
}
