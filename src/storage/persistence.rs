use serde::de::DeserializeOwned;
use serde::Serialize;

use super::Storage;

/// JSON adapter over a [`Storage`] backend.
///
/// Failures never propagate: a broken read surfaces as `None`, a failed
/// write is logged and dropped. Callers keep their in-memory state either way.
pub struct Persistence {
    storage: Box<dyn Storage>,
}

impl Persistence {
    pub fn new(storage: Box<dyn Storage>) -> Self {
        Self { storage }
    }

    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = match self.storage.get_item(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(err) => {
                tracing::error!(key, error = %err, "Error retrieving data from storage");
                return None;
            }
        };
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(err) => {
                tracing::error!(key, error = %err, "Error retrieving data from storage");
                None
            }
        }
    }

    pub fn set<T: Serialize + ?Sized>(&self, key: &str, value: &T) {
        let serialized = match serde_json::to_string(value) {
            Ok(serialized) => serialized,
            Err(err) => {
                tracing::error!(key, error = %err, "Error storing data to storage");
                return;
            }
        };
        if let Err(err) = self.storage.set_item(key, &serialized) {
            tracing::error!(key, error = %err, "Error storing data to storage");
        }
    }

    pub fn location(&self) -> String {
        self.storage.location()
    }
}
