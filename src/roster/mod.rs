//! The record store: ordered student list mirrored to persistent storage.

mod store;
mod validate;

pub use store::{RecordStore, ROWS_KEY};
pub use validate::{validate_age, ValidationError, MAX_AGE, MIN_AGE};
