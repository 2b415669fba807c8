//! Error type for domain operations.
//!
//! Field constructors return their own `Parse*Error`s; everything that
//! operates on the aggregates (`Record`, `Note`, `Directory`) returns this
//! enum, into which the parse errors convert. The `Display` strings here are
//! the user-facing messages — the shell only adds per-command context.

use thiserror::Error;

use crate::domain::address::ParseAddressError;
use crate::domain::birthday::ParseBirthdayError;
use crate::domain::email::ParseEmailError;
use crate::domain::name::ParseNameError;
use crate::domain::note::ParseNoteError;
use crate::domain::phone::ParsePhoneError;
use crate::domain::tag::{ParseTagError, Tag};

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    InvalidName(#[from] ParseNameError),

    #[error(transparent)]
    InvalidPhone(#[from] ParsePhoneError),

    #[error(transparent)]
    InvalidBirthday(#[from] ParseBirthdayError),

    #[error(transparent)]
    InvalidEmail(#[from] ParseEmailError),

    #[error(transparent)]
    InvalidAddress(#[from] ParseAddressError),

    #[error(transparent)]
    InvalidTag(#[from] ParseTagError),

    #[error(transparent)]
    InvalidNote(#[from] ParseNoteError),

    #[error("contact '{0}' already exists")]
    DuplicateContact(String),

    #[error("contact '{0}' not found")]
    ContactNotFound(String),

    #[error("phone number {0} is not on this contact")]
    PhoneNotFound(String),

    #[error("note '{0}' already exists")]
    DuplicateNote(String),

    #[error("note '{0}' not found")]
    NoteNotFound(String),

    #[error("tag {0} is already on this note")]
    DuplicateTag(Tag),

    #[error("tag {0} is not on this note")]
    TagNotFound(Tag),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
