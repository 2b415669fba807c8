//! Contact name — the unique key of a contact record.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A contact's name.
///
/// Names are trimmed of surrounding whitespace and must be non-empty.
/// The name doubles as the contact's identity within a directory, so two
/// records with the same name cannot coexist.
///
/// # Examples
///
/// ```
/// use rolo::domain::Name;
///
/// let name = Name::new("  Alice ").unwrap();
/// assert_eq!(name.as_str(), "Alice");
/// ```
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Name(String);

/// Error returned when parsing an invalid name.
#[derive(Debug, Clone)]
pub struct ParseNameError;

impl fmt::Display for ParseNameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "name cannot be empty")
    }
}

impl std::error::Error for ParseNameError {}

impl Name {
    /// Creates a new Name from a string.
    ///
    /// # Errors
    ///
    /// Returns `ParseNameError` if the name is empty or whitespace-only.
    pub fn new(s: &str) -> Result<Self, ParseNameError> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseNameError);
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Returns the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Name(\"{}\")", self.0)
    }
}

impl FromStr for Name {
    type Err = ParseNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl Serialize for Name {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Name {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn new_with_valid_name() {
        let name = Name::new("Alice").unwrap();
        assert_eq!(name.as_str(), "Alice");
    }

    #[test]
    fn new_trims_whitespace() {
        let name = Name::new("  Alice  ").unwrap();
        assert_eq!(name.as_str(), "Alice");
    }

    #[test]
    fn new_rejects_empty_string() {
        assert!(Name::new("").is_err());
    }

    #[test]
    fn new_rejects_whitespace_only() {
        assert!(Name::new("   ").is_err());
    }

    #[test]
    fn interior_whitespace_is_kept() {
        let name = Name::new("Alice Smith").unwrap();
        assert_eq!(name.as_str(), "Alice Smith");
    }

    #[test]
    fn parse_via_fromstr() {
        let name: Name = "Bob".parse().unwrap();
        assert_eq!(name.to_string(), "Bob");
    }

    #[test]
    fn serde_roundtrip() {
        let name = Name::new("Alice").unwrap();
        let json = serde_json::to_string(&name).unwrap();
        let parsed: Name = serde_json::from_str(&json).unwrap();
        assert_eq!(name, parsed);
    }

    #[test]
    fn serde_rejects_empty_on_deserialize() {
        let result: Result<Name, _> = serde_json::from_str("\"\"");
        assert!(result.is_err());
    }
}
