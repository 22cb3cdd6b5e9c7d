//! Key-value string-blob storage adapter.
//!
//! The register persists its state as two named JSON strings and reads
//! them back at startup; anything that can hold named strings works as a
//! backend. The file store keeps one `<key>.json` per key in the
//! application data directory.

use crate::libs::data_storage::DataStorage;
use crate::libs::error::{RegisterError, Result};
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

/// Key under which the roster blob is stored.
pub const STUDENTS_KEY: &str = "students";
/// Key under which the attendance blob is stored.
pub const ATTENDANCE_KEY: &str = "attendance";

/// String-blob key-value store behind the register.
pub trait StorageBackend {
    /// Returns the blob for `key`, or `None` when nothing was stored yet.
    fn get(&self, key: &str) -> Result<Option<String>>;
    /// Stores `value` under `key`, replacing any previous blob.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// File-backed store: one `<key>.json` file per key.
pub struct FileStore {
    storage: DataStorage,
}

impl FileStore {
    /// Opens the store in the default application data directory.
    pub fn new() -> Self {
        FileStore {
            storage: DataStorage::new(),
        }
    }

    /// Opens the store over an explicit storage location.
    pub fn with_storage(storage: DataStorage) -> Self {
        FileStore { storage }
    }

    fn file_path(&self, key: &str) -> Result<PathBuf> {
        self.storage.get_path(&format!("{}.json", key))
    }
}

impl Default for FileStore {
    fn default() -> Self {
        Self::new()
    }
}

impl StorageBackend for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.file_path(key)?;
        if !path.exists() {
            return Ok(None);
        }
        Ok(Some(fs::read_to_string(path)?))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let path = self.file_path(key)?;
        fs::write(path, value)?;
        Ok(())
    }
}

/// In-memory store for tests.
///
/// A failing instance rejects every write, which exercises the
/// persistence-error path without touching the filesystem.
#[derive(Debug, Default)]
pub struct MemoryStore {
    blobs: HashMap<String, String>,
    fail_writes: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose writes always fail, as a full disk or exceeded
    /// quota would.
    pub fn failing() -> Self {
        MemoryStore {
            blobs: HashMap::new(),
            fail_writes: true,
        }
    }
}

impl StorageBackend for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.blobs.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        if self.fail_writes {
            return Err(RegisterError::Persistence("storage quota exceeded".to_string()));
        }
        self.blobs.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
