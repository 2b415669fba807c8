//! Phone number type with strict 10-digit validation.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A phone number: exactly ten ASCII decimal digits.
///
/// No separator stripping or formatting is attempted; `"050-123-4567"` is
/// rejected rather than normalized. A record may carry the same number more
/// than once — deduplication is the caller's choice.
///
/// # Examples
///
/// ```
/// use rolo::domain::Phone;
///
/// let phone = Phone::new("0501234567").unwrap();
/// assert_eq!(phone.as_str(), "0501234567");
/// assert!(Phone::new("12345").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Phone(String);

/// Error returned when parsing an invalid phone number.
#[derive(Debug, Clone)]
pub struct ParsePhoneError(String);

impl fmt::Display for ParsePhoneError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid phone number '{}': expected exactly 10 digits",
            self.0
        )
    }
}

impl std::error::Error for ParsePhoneError {}

impl Phone {
    /// Creates a new Phone from a string.
    ///
    /// # Errors
    ///
    /// Returns `ParsePhoneError` unless the input is exactly 10 ASCII
    /// decimal digits.
    pub fn new(s: &str) -> Result<Self, ParsePhoneError> {
        if s.len() == 10 && s.chars().all(|c| c.is_ascii_digit()) {
            Ok(Self(s.to_string()))
        } else {
            Err(ParsePhoneError(s.to_string()))
        }
    }

    /// Returns the phone number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Phone(\"{}\")", self.0)
    }
}

impl FromStr for Phone {
    type Err = ParsePhoneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl Serialize for Phone {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Phone {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
