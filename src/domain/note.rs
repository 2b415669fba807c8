//! Note entity: a titled, tagged, timestamped piece of text.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::error::{Error, Result};
use crate::domain::tag::Tag;

/// The kind of error that occurred when constructing a note.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ParseNoteErrorKind {
    EmptyTitle,
}

/// Error returned when constructing an invalid note.
#[derive(Debug, Clone)]
pub struct ParseNoteError {
    kind: ParseNoteErrorKind,
}

impl fmt::Display for ParseNoteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            ParseNoteErrorKind::EmptyTitle => write!(f, "invalid note: title cannot be empty"),
        }
    }
}

impl std::error::Error for ParseNoteError {}

/// A free-form note.
///
/// The title is the note's lookup key within a directory. The creation
/// timestamp is set once and survives content edits. Tags are kept in
/// insertion order with no duplicates by value.
///
/// # Examples
///
/// ```
/// use rolo::domain::Note;
/// use chrono::Utc;
///
/// let mut note = Note::new("Project Plan", "ship it", Utc::now()).unwrap();
/// note.add_tag("work").unwrap();
/// assert!(note.add_tag("#work").is_err()); // normalization makes them equal
/// ```
#[derive(Clone, PartialEq)]
pub struct Note {
    title: String,
    content: String,
    created: DateTime<Utc>,
    tags: Vec<Tag>,
}

impl Note {
    /// Creates a new Note with no tags.
    ///
    /// # Errors
    ///
    /// Returns `ParseNoteError` if the title is empty or whitespace-only.
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        created: DateTime<Utc>,
    ) -> Result<Self, ParseNoteError> {
        let title = title.into();
        let trimmed = title.trim();

        if trimmed.is_empty() {
            return Err(ParseNoteError {
                kind: ParseNoteErrorKind::EmptyTitle,
            });
        }

        Ok(Self {
            title: trimmed.to_string(),
            content: content.into(),
            created,
            tags: Vec::new(),
        })
    }

    /// Returns the note's title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the note's content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Returns when the note was created.
    pub fn created(&self) -> DateTime<Utc> {
        self.created
    }

    /// Returns the note's tags in insertion order.
    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }

    /// Replaces the note's content. The creation timestamp is unchanged.
    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
    }

    /// Normalizes and attaches a tag.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidTag` if the tag fails validation, or
    /// `Error::DuplicateTag` if an equal-valued tag is already attached.
    pub fn add_tag(&mut self, raw: &str) -> Result<()> {
        let tag = Tag::new(raw)?;
        if self.tags.contains(&tag) {
            return Err(Error::DuplicateTag(tag));
        }
        self.tags.push(tag);
        Ok(())
    }

    /// Normalizes and detaches a tag.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidTag` if the tag fails validation, or
    /// `Error::TagNotFound` if no equal-valued tag is attached.
    pub fn remove_tag(&mut self, raw: &str) -> Result<()> {
        let tag = Tag::new(raw)?;
        match self.tags.iter().position(|t| *t == tag) {
            Some(idx) => {
                self.tags.remove(idx);
                Ok(())
            }
            None => Err(Error::TagNotFound(tag)),
        }
    }

    /// Returns true if an equal-valued tag is attached.
    pub fn has_tag(&self, tag: &Tag) -> bool {
        self.tags.contains(tag)
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.title, self.created.format("%Y-%m-%d"))
    }
}

impl fmt::Debug for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Note")
            .field("title", &self.title)
            .field("content", &self.content)
            .field("created", &self.created)
            .field("tags", &self.tags)
            .finish()
    }
}

impl Serialize for Note {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("title", &self.title)?;
        map.serialize_entry("content", &self.content)?;
        map.serialize_entry("created", &self.created)?;
        if !self.tags.is_empty() {
            map.serialize_entry("tags", &self.tags)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Note {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct NoteHelper {
            title: String,
            content: String,
            created: DateTime<Utc>,
            #[serde(default)]
            tags: Vec<Tag>,
        }

        let helper = NoteHelper::deserialize(deserializer)?;
        let mut note = Note::new(helper.title, helper.content, helper.created)
            .map_err(serde::de::Error::custom)?;
        // Re-attach through add_tag so stored duplicates collapse.
        for tag in helper.tags {
            let _ = note.add_tag(tag.as_str());
        }
        Ok(note)
    }
}
