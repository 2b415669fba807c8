//! Core domain types: validated fields, contact records, notes, and the
//! directory aggregate. No I/O happens here.

mod address;
mod birthday;
mod directory;
mod email;
mod error;
mod name;
mod note;
mod phone;
mod record;
mod tag;

pub use address::{Address, ParseAddressError};
pub use birthday::{Birthday, DATE_FORMAT, ParseBirthdayError};
pub use directory::{Directory, UpcomingBirthday};
pub use email::{Email, ParseEmailError};
pub use error::{Error, Result};
pub use name::{Name, ParseNameError};
pub use note::{Note, ParseNoteError};
pub use phone::{ParsePhoneError, Phone};
pub use record::Record;
pub use tag::{ParseTagError, TAG_MARKER, Tag};
