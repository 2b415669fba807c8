//! Persistence: the book-file store.

mod store;

pub use store::{Store, StoreError};
