//! Key-value persistence backends for the pattern store.
//!
//! The store only needs `get` and `set` over string values, mirroring the
//! browser-local storage the tool is backed by on the client side. Injecting
//! the backend keeps the store testable without touching the filesystem.

use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

/// Failure raised by a persistence backend.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("storage read failed: {0}")]
    Read(#[source] io::Error),

    #[error("storage write failed: {0}")]
    Write(#[source] io::Error),

    #[error("storage encoding failed: {0}")]
    Encode(#[from] serde_json::Error),
}

/// A minimal key-value persistence facility scoped to the local machine.
pub trait StorageBackend: Send + Sync {
    /// Read the value under `key`, or `None` if the key has never been set.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Replace the value under `key` in full.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

impl<T: StorageBackend + ?Sized> StorageBackend for std::sync::Arc<T> {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }
}

/// File-per-key backend rooted at a directory.
///
/// Writes go through a temp file and a rename, so readers never observe a
/// partially written value.
pub struct FileBackend {
    dir: PathBuf,
}

impl FileBackend {
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl StorageBackend for FileBackend {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        match std::fs::read_to_string(self.key_path(key)) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::Read(e)),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        std::fs::create_dir_all(&self.dir).map_err(StorageError::Write)?;
        let path = self.key_path(key);
        let tmp = self.dir.join(format!("{key}.json.tmp"));
        std::fs::write(&tmp, value).map_err(StorageError::Write)?;
        std::fs::rename(&tmp, &path).map_err(StorageError::Write)?;
        Ok(())
    }
}

/// In-memory backend used as a test double.
///
/// `fail_writes` simulates a rejected write (the quota-exceeded case of the
/// browser storage this models).
#[derive(Default)]
pub struct MemoryBackend {
    data: Mutex<HashMap<String, String>>,
    fail_writes: AtomicBool,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent `set` fail until reset.
    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }
}

impl StorageBackend for MemoryBackend {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let data = self.data.lock().expect("storage mutex poisoned");
        Ok(data.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StorageError::Write(io::Error::other("write rejected")));
        }
        let mut data = self.data.lock().expect("storage mutex poisoned");
        data.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_backend_missing_key_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let backend = FileBackend::new(dir.path());
        assert!(backend.get("patterns").unwrap().is_none());
    }

    #[test]
    fn file_backend_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let backend = FileBackend::new(dir.path());
        backend.set("patterns", "[1,2,3]").unwrap();
        assert_eq!(backend.get("patterns").unwrap().as_deref(), Some("[1,2,3]"));
    }

    #[test]
    fn file_backend_overwrites_in_full() {
        let dir = tempfile::tempdir().unwrap();
        let backend = FileBackend::new(dir.path());
        backend.set("patterns", "first").unwrap();
        backend.set("patterns", "second").unwrap();
        assert_eq!(backend.get("patterns").unwrap().as_deref(), Some("second"));
    }

    #[test]
    fn file_backend_leaves_no_temp_file() {
        let dir = tempfile::tempdir().unwrap();
        let backend = FileBackend::new(dir.path());
        backend.set("patterns", "value").unwrap();
        let leftovers: Vec<_> = std::fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(leftovers, vec![std::ffi::OsString::from("patterns.json")]);
    }

    #[test]
    fn memory_backend_rejected_write() {
        let backend = MemoryBackend::new();
        backend.set("k", "v").unwrap();
        backend.fail_writes(true);
        assert!(backend.set("k", "v2").is_err());
        // Value under the key is untouched by the failed write.
        assert_eq!(backend.get("k").unwrap().as_deref(), Some("v"));
    }
}
