//! Book-file store: one JSON snapshot, written atomically.

use std::io::{self, Write as IoWrite};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use thiserror::Error;

use crate::domain::Directory;

/// Errors during load/save of the book file.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("permission denied: {path}")]
    PermissionDenied { path: PathBuf },

    #[error("I/O error for {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse book file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to serialize directory: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("atomic write failed for {path}: {source}")]
    AtomicWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Persistence adapter for a [`Directory`].
///
/// Owns the path to the book file; the path is always an explicit
/// constructor argument, never a global. Saving serializes the whole
/// aggregate to a temp file in the target directory and renames it over
/// the book file, so a crash mid-save leaves the previous snapshot intact.
#[derive(Debug, Clone)]
pub struct Store {
    path: PathBuf,
}

impl Store {
    /// Creates a store for the given book-file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the book-file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the directory from the book file.
    ///
    /// A missing file is not an error: the first session starts empty.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` for unreadable or unparseable files.
    pub fn load(&self) -> Result<Directory, StoreError> {
        let contents = match std::fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Directory::new()),
            Err(e) => return Err(self.io_error(e)),
        };

        serde_json::from_str(&contents).map_err(|source| StoreError::Parse {
            path: self.path.clone(),
            source,
        })
    }

    /// Saves the full directory snapshot, creating the parent directory on
    /// first use.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` when serialization, the temp-file write, or
    /// the final rename fails.
    pub fn save(&self, directory: &Directory) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(directory).map_err(StoreError::Serialize)?;

        let parent = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => {
                std::fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
                parent
            }
            _ => Path::new("."),
        };

        let mut temp = NamedTempFile::new_in(parent).map_err(|e| self.io_error(e))?;
        temp.write_all(json.as_bytes())
            .map_err(|e| self.io_error(e))?;
        temp.write_all(b"\n").map_err(|e| self.io_error(e))?;

        temp.persist(&self.path).map_err(|e| StoreError::AtomicWrite {
            path: self.path.clone(),
            source: e.error,
        })?;

        Ok(())
    }

    fn io_error(&self, error: io::Error) -> StoreError {
        match error.kind() {
            io::ErrorKind::PermissionDenied => StoreError::PermissionDenied {
                path: self.path.clone(),
            },
            _ => StoreError::Io {
                path: self.path.clone(),
                source: error,
            },
        }
    }
}
