//! Email address type with a single-regex validity check.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

/// Standard `local@domain.tld` shape; no DNS or deliverability checking.
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").unwrap()
});

/// A contact's email address.
///
/// # Examples
///
/// ```
/// use rolo::domain::Email;
///
/// let email = Email::new("alice@example.com").unwrap();
/// assert_eq!(email.as_str(), "alice@example.com");
/// assert!(Email::new("not-an-email").is_err());
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Email(String);

/// Error returned when parsing an invalid email address.
#[derive(Debug, Clone)]
pub struct ParseEmailError(String);

impl fmt::Display for ParseEmailError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid email address '{}'", self.0)
    }
}

impl std::error::Error for ParseEmailError {}

impl Email {
    /// Creates a new Email from a string.
    ///
    /// # Errors
    ///
    /// Returns `ParseEmailError` if the input does not match the
    /// `local@domain.tld` pattern.
    pub fn new(s: &str) -> Result<Self, ParseEmailError> {
        let trimmed = s.trim();
        if EMAIL_RE.is_match(trimmed) {
            Ok(Self(trimmed.to_string()))
        } else {
            Err(ParseEmailError(s.to_string()))
        }
    }

    /// Returns the email address as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Email(\"{}\")", self.0)
    }
}

impl FromStr for Email {
    type Err = ParseEmailError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl Serialize for Email {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Email {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
