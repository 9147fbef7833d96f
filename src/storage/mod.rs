//! Durable string key-value storage and the best-effort JSON adapter on top.
//!
//! ```text
//! RecordStore ──→ Persistence (serde_json, soft failures) ──→ dyn Storage
//!                                                           ├─ FileStorage
//!                                                           └─ MemoryStorage
//! ```

mod error;
mod file;
mod memory;
mod persistence;

pub use error::StorageError;
pub use file::FileStorage;
pub use memory::MemoryStorage;
pub use persistence::Persistence;

/// Default quota, matching the usual per-origin browser allowance.
pub const DEFAULT_QUOTA_BYTES: u64 = 5 * 1024 * 1024;

/// String-keyed store holding serialized text values.
pub trait Storage {
    /// Returns `Ok(None)` when the key has never been written.
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Human-readable location, shown in the header.
    fn location(&self) -> String;
}

/// Bytes charged against the quota for a set of entries.
fn usage<'a>(entries: impl Iterator<Item = (&'a String, &'a String)>) -> u64 {
    entries
        .map(|(key, value)| (key.len() + value.len()) as u64)
        .sum()
}
