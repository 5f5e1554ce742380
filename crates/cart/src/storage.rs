//! Durable key-value persistence for cart snapshots.
//!
//! The cart treats persistence as a synchronous key-value store: one string
//! value per key, last write wins. Two backends are provided; anything else
//! (browser local storage bridges, session services) plugs in through
//! [`CartStorage`].

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use parking_lot::RwLock;
use thiserror::Error;

/// Errors returned by storage backends.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Filesystem-level failure.
    #[error("Storage I/O error: {0}")]
    Io(#[from] io::Error),

    /// Backend-specific failure.
    #[error("Storage backend error: {0}")]
    Backend(String),
}

/// Synchronous key-value store for serialized snapshots.
///
/// This trait uses `&self` for both methods, so implementations use interior
/// mutability for thread-safe access.
pub trait CartStorage: Send + Sync {
    /// Retrieve the value stored under `key`.
    ///
    /// Returns `Ok(None)` if the key has never been written.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend failed to read.
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Insert or replace the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend failed to write. After an error
    /// the previous value must still be readable.
    fn write(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

// =============================================================================
// MemoryStorage
// =============================================================================

/// Process-local storage backend.
///
/// State is lost when the process exits. Used by the demo frontends and
/// throughout the test suites.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStorage {
    /// Create an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Whether no key has been written yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

impl CartStorage for MemoryStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.read().get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.write().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

// =============================================================================
// FileStorage
// =============================================================================

/// Filesystem storage backend: one file per key under a root directory.
///
/// Writes go to a temporary file first and are moved into place with a
/// rename, so a failed write never leaves a torn snapshot behind. The store
/// serializes its own writes; this type adds no locking of its own.
#[derive(Debug, Clone)]
pub struct FileStorage {
    root: PathBuf,
}

impl FileStorage {
    /// Create a backend rooted at `root`. The directory is created on first
    /// write.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The directory snapshots are stored under.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(sanitize_key(key))
    }
}

impl CartStorage for FileStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(value) => Ok(Some(value)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(StorageError::Io(err)),
        }
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        fs::create_dir_all(&self.root)?;

        let path = self.path_for(key);
        let tmp = self.root.join(format!("{}.tmp", sanitize_key(key)));
        fs::write(&tmp, value)?;
        fs::rename(&tmp, &path)?;
        Ok(())
    }
}

/// Map a storage key to a safe flat filename.
///
/// Keys like `@treadline:cart` contain separator characters that must never
/// reach the filesystem as path syntax.
fn sanitize_key(key: &str) -> String {
    key.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect()
}
