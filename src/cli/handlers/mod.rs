//! Command handlers for the CLI.

mod birthdays;
mod contacts;
mod misc;
mod notes;
mod tags;

use anyhow::{Context, Result};

use crate::domain::Directory;
use crate::infra::Store;

// Re-export public items
pub use birthdays::{handle_birthday, handle_birthdays, handle_set_birthday};
pub use contacts::{
    handle_add, handle_add_phone, handle_change_phone, handle_list, handle_phones, handle_rm,
    handle_set_address, handle_set_email, handle_show,
};
pub use misc::handle_completions;
pub use notes::{
    handle_note, handle_note_edit, handle_note_rm, handle_note_show, handle_notes, handle_search,
};
pub use tags::{handle_tag, handle_tagged, handle_untag};

/// Loads the directory from the book file.
pub(crate) fn load(store: &Store) -> Result<Directory> {
    store
        .load()
        .with_context(|| format!("failed to load book file at {}", store.path().display()))
}

/// Saves the directory back to the book file.
pub(crate) fn save(store: &Store, directory: &Directory) -> Result<()> {
    store
        .save(directory)
        .with_context(|| format!("failed to save book file at {}", store.path().display()))
}
