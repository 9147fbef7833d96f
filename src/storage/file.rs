use fs2::FileExt;
use std::collections::BTreeMap;
use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use super::{usage, Storage, StorageError};

/// Storage backed by one JSON document mapping keys to serialized values.
///
/// Writers take an exclusive lock on a sidecar `.lock` file, rewrite the
/// document into a temp file and rename it over the original, so a reader
/// never sees a half-written document. A document that no longer parses is
/// moved aside to `<path>.corrupt` on the next write.
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
    quota_bytes: u64,
}

/// Holds an advisory lock until dropped.
struct LockGuard {
    file: File,
}

impl Drop for LockGuard {
    fn drop(&mut self) {
        let _ = FileExt::unlock(&self.file);
    }
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>, quota_bytes: u64) -> Self {
        Self {
            path: path.into(),
            quota_bytes,
        }
    }

    /// `<data_dir>/student-roster/storage.json`, or the current directory
    /// when the platform has no data directory.
    pub fn default_path() -> PathBuf {
        let data_dir = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
        data_dir.join("student-roster").join("storage.json")
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn lock_path(&self) -> PathBuf {
        let mut name = self.path.as_os_str().to_owned();
        name.push(".lock");
        PathBuf::from(name)
    }

    fn corrupt_path(&self) -> PathBuf {
        let mut name = self.path.as_os_str().to_owned();
        name.push(".corrupt");
        PathBuf::from(name)
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.as_os_str().to_owned();
        name.push(".tmp");
        PathBuf::from(name)
    }

    fn lock(&self, exclusive: bool) -> Result<LockGuard, StorageError> {
        let lock_path = self.lock_path();
        let file = OpenOptions::new()
            .create(true)
            .truncate(false)
            .write(true)
            .open(&lock_path)
            .map_err(|source| StorageError::Write {
                path: lock_path.clone(),
                source,
            })?;
        let locked = if exclusive {
            FileExt::lock_exclusive(&file)
        } else {
            FileExt::lock_shared(&file)
        };
        locked.map_err(|source| StorageError::Write {
            path: lock_path,
            source,
        })?;
        Ok(LockGuard { file })
    }

    fn read_entries(&self) -> Result<BTreeMap<String, String>, StorageError> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }
        let content = fs::read_to_string(&self.path).map_err(|source| StorageError::Read {
            path: self.path.clone(),
            source,
        })?;
        if content.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        serde_json::from_str(&content).map_err(|source| StorageError::Corrupt {
            path: self.path.clone(),
            source,
        })
    }

    fn write_entries(&self, entries: &BTreeMap<String, String>) -> Result<(), StorageError> {
        let document = serde_json::to_string_pretty(entries).map_err(|source| {
            StorageError::Corrupt {
                path: self.path.clone(),
                source,
            }
        })?;

        let temp_path = self.temp_path();
        let mut temp = File::create(&temp_path).map_err(write_err(&temp_path))?;
        temp.write_all(document.as_bytes())
            .and_then(|_| temp.sync_all())
            .map_err(write_err(&temp_path))?;
        fs::rename(&temp_path, &self.path).map_err(write_err(&self.path))
    }
}

fn write_err(path: &Path) -> impl FnOnce(std::io::Error) -> StorageError {
    let path = path.to_path_buf();
    move |source| StorageError::Write { path, source }
}

impl Storage for FileStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        if !self.path.exists() {
            return Ok(None);
        }
        let _guard = self.lock(false)?;
        Ok(self.read_entries()?.remove(key))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| StorageError::Write {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        let _guard = self.lock(true)?;

        let mut entries = match self.read_entries() {
            Err(StorageError::Corrupt { path, source }) => {
                let backup = self.corrupt_path();
                fs::rename(&path, &backup).map_err(write_err(&backup))?;
                tracing::warn!(
                    path = %path.display(),
                    backup = %backup.display(),
                    error = %source,
                    "Storage document is corrupt, moved aside"
                );
                BTreeMap::new()
            }
            other => other?,
        };
        entries.insert(key.to_string(), value.to_string());
        let needed = usage(entries.iter());
        if needed > self.quota_bytes {
            return Err(StorageError::QuotaExceeded {
                needed,
                quota: self.quota_bytes,
            });
        }
        self.write_entries(&entries)?;
        tracing::trace!(key, bytes = value.len(), path = %self.path.display(), "Stored item");
        Ok(())
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}
