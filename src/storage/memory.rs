use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;

use super::{usage, Storage, StorageError};

/// In-process storage. Clones share the same entries, so a test can keep a
/// handle and inspect what the record store wrote.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    items: Arc<Mutex<HashMap<String, String>>>,
    quota_bytes: Option<u64>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_quota(quota_bytes: u64) -> Self {
        Self {
            items: Arc::default(),
            quota_bytes: Some(quota_bytes),
        }
    }

    /// Raw stored text for `key`, bypassing the trait.
    pub fn raw(&self, key: &str) -> Option<String> {
        self.items.lock().get(key).cloned()
    }

    /// Write raw text for `key` without quota checks.
    pub fn insert_raw(&self, key: &str, value: &str) {
        self.items.lock().insert(key.to_string(), value.to_string());
    }
}

impl Storage for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.raw(key))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut items = self.items.lock();
        if let Some(quota) = self.quota_bytes {
            let others = usage(items.iter().filter(|(k, _)| k.as_str() != key));
            let needed = others + (key.len() + value.len()) as u64;
            if needed > quota {
                return Err(StorageError::QuotaExceeded { needed, quota });
            }
        }
        items.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn location(&self) -> String {
        "in-memory (not saved)".to_string()
    }
}
