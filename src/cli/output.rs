//! Output format types for CLI commands.

use clap::ValueEnum;
use serde::Serialize;

use crate::domain::{DATE_FORMAT, Note, Record, UpcomingBirthday};

/// Output format for command results.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for programmatic consumption
    Json,
}

/// Wrapper for serializable command output.
#[derive(Debug, Serialize)]
pub struct Output<T: Serialize> {
    pub data: T,
}

impl<T: Serialize> Output<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

/// A single contact in listing output.
#[derive(Debug, Serialize)]
pub struct ContactListing {
    pub name: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub phones: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birthday: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

impl From<&Record> for ContactListing {
    fn from(record: &Record) -> Self {
        Self {
            name: record.name().to_string(),
            phones: record.phones().iter().map(|p| p.to_string()).collect(),
            birthday: record.birthday().map(|b| b.to_string()),
            email: record.email().map(|e| e.to_string()),
            address: record.address().map(|a| a.to_string()),
        }
    }
}

/// A single note in listing output.
#[derive(Debug, Serialize)]
pub struct NoteListing {
    pub title: String,
    pub created: String,
    pub content: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

impl From<&Note> for NoteListing {
    fn from(note: &Note) -> Self {
        Self {
            title: note.title().to_string(),
            created: note.created().to_rfc3339(),
            content: note.content().to_string(),
            tags: note.tags().iter().map(|t| t.to_string()).collect(),
        }
    }
}

/// One upcoming birthday in listing output, date already weekend-shifted
/// and formatted as DD.MM.YYYY.
#[derive(Debug, Serialize)]
pub struct BirthdayListing {
    pub name: String,
    pub date: String,
}

impl From<&UpcomingBirthday> for BirthdayListing {
    fn from(upcoming: &UpcomingBirthday) -> Self {
        Self {
            name: upcoming.name.clone(),
            date: upcoming.next_occurrence.format(DATE_FORMAT).to_string(),
        }
    }
}
