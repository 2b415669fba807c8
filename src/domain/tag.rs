//! Tag type for categorizing notes, normalized to a leading `#`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The marker character every normalized tag value starts with.
pub const TAG_MARKER: char = '#';

/// A tag attached to a note.
///
/// Tags are flat labels used for filtering notes. Whether or not the caller
/// types the `#`, the stored value always carries it: `work` and `#work`
/// normalize to the same tag.
///
/// # Validation Rules
/// - After the marker, only ASCII letters, digits, and underscores
/// - Non-empty after the marker
///
/// # Examples
///
/// ```
/// use rolo::domain::Tag;
///
/// let tag = Tag::new("work").unwrap();
/// assert_eq!(tag.as_str(), "#work");
/// assert_eq!(tag, Tag::new("#work").unwrap());
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Tag(String); // Always stored with the leading marker

/// Error returned when parsing an invalid tag.
#[derive(Debug, Clone)]
pub struct ParseTagError(String);

impl fmt::Display for ParseTagError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid tag '{}': tags may contain only letters, digits, and underscores",
            self.0
        )
    }
}

impl std::error::Error for ParseTagError {}

impl Tag {
    /// Creates a new Tag from a string, prefixing the `#` marker if absent.
    ///
    /// # Errors
    ///
    /// Returns `ParseTagError` if the value after the marker is empty or
    /// contains anything other than ASCII letters, digits, or underscores.
    pub fn new(s: &str) -> Result<Self, ParseTagError> {
        let trimmed = s.trim();
        let body = trimmed.strip_prefix(TAG_MARKER).unwrap_or(trimmed);

        if body.is_empty() {
            return Err(ParseTagError(s.to_string()));
        }
        if !body.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
            return Err(ParseTagError(s.to_string()));
        }

        Ok(Self(format!("{TAG_MARKER}{body}")))
    }

    /// Returns the normalized tag value, marker included.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tag(\"{}\")", self.0)
    }
}

impl FromStr for Tag {
    type Err = ParseTagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl Serialize for Tag {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Tag {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
