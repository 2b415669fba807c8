//! Birthday date type, parsed from the fixed `DD.MM.YYYY` format.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The display and parse format for birthdays.
pub const DATE_FORMAT: &str = "%d.%m.%Y";

/// A contact's date of birth.
///
/// Parsed strictly from `DD.MM.YYYY`; no alternate formats are accepted,
/// and the date must exist on the calendar (`31.02.2000` fails).
///
/// # Examples
///
/// ```
/// use rolo::domain::Birthday;
///
/// let birthday = Birthday::parse("24.03.1990").unwrap();
/// assert_eq!(birthday.to_string(), "24.03.1990");
/// assert!(Birthday::parse("1990-03-24").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Birthday(NaiveDate);

/// Error returned when parsing an invalid birthday.
#[derive(Debug, Clone)]
pub struct ParseBirthdayError(String);

impl fmt::Display for ParseBirthdayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid date '{}': expected DD.MM.YYYY", self.0)
    }
}

impl std::error::Error for ParseBirthdayError {}

impl Birthday {
    /// Parses a birthday from a `DD.MM.YYYY` string.
    ///
    /// # Errors
    ///
    /// Returns `ParseBirthdayError` if the input does not match the format
    /// or names a date that does not exist.
    pub fn parse(s: &str) -> Result<Self, ParseBirthdayError> {
        NaiveDate::parse_from_str(s.trim(), DATE_FORMAT)
            .map(Self)
            .map_err(|_| ParseBirthdayError(s.to_string()))
    }

    /// Returns the underlying calendar date.
    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// Returns this birthday's occurrence in the given year.
    ///
    /// A Feb-29 birthday resolves to Mar 1 in non-leap years.
    pub fn occurrence_in(&self, year: i32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, self.0.month(), self.0.day())
            .unwrap_or_else(|| NaiveDate::from_ymd_opt(year, 3, 1).expect("Mar 1 always exists"))
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}

impl fmt::Debug for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Birthday({})", self)
    }
}

impl FromStr for Birthday {
    type Err = ParseBirthdayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
