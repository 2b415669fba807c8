//! Postal address — free text, only required to be non-empty.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A contact's postal address.
#[derive(Clone, PartialEq, Eq)]
pub struct Address(String);

/// Error returned when parsing an invalid address.
#[derive(Debug, Clone)]
pub struct ParseAddressError;

impl fmt::Display for ParseAddressError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "address cannot be empty")
    }
}

impl std::error::Error for ParseAddressError {}

impl Address {
    /// Creates a new Address from a string.
    ///
    /// # Errors
    ///
    /// Returns `ParseAddressError` if the address is empty or
    /// whitespace-only.
    pub fn new(s: &str) -> Result<Self, ParseAddressError> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseAddressError);
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Returns the address as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address(\"{}\")", self.0)
    }
}

impl FromStr for Address {
    type Err = ParseAddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl Serialize for Address {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
