//! Durable key-value storage.
//!
//! DESIGN
//! ======
//! The theme's preference components are written against [`KeyValueStore`],
//! a synchronous string-to-string contract matching what a browser profile
//! store provides: `get` returns the last successfully written value, and
//! `set`/`remove` flush immediately. Two implementations ship here:
//! [`MemoryStore`] for tests and ephemeral sessions, and [`FileStore`], a
//! single JSON-object file that survives restarts.
//!
//! ERROR HANDLING
//! ==============
//! Reads never fail: an absent or unreadable backing file loads as empty
//! (logged, not raised), so a corrupted profile can never take the UI down.
//! Writes can fail the way a full storage quota does, and report
//! [`StorageError`]; callers decide whether to degrade.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Error raised by storage writes.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("failed to write store file {path}: {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to encode store contents: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Synchronous durable string storage, one value per key.
pub trait KeyValueStore {
    /// Return the stored value for `key`, or `None` if absent.
    fn get(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the value could not be made durable.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete `key` if present.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the deletion could not be made durable.
    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}

// =============================================================================
// MEMORY STORE
// =============================================================================

/// In-memory store. Writes cannot fail.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.values.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        self.values.remove(key);
        Ok(())
    }
}

// =============================================================================
// FILE STORE
// =============================================================================

/// File-backed store: one JSON object (`{"key": "value", ...}`) per path.
///
/// The whole object is rewritten on every mutation. That is the same
/// flush-on-write contract the in-browser original relies on, and the value
/// set is small (a handful of preference blobs), so rewrite cost is noise.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    values: HashMap<String, String>,
}

impl FileStore {
    /// Open the store at `path`, loading existing contents.
    ///
    /// A missing or malformed file yields an empty store; the malformed case
    /// is logged and the file is overwritten on the next write.
    #[must_use]
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let values = load_values(&path);
        Self { path, values }
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> Result<(), StorageError> {
        let encoded = serde_json::to_string(&self.values)?;
        std::fs::write(&self.path, encoded).map_err(|source| StorageError::Write {
            path: self.path.display().to_string(),
            source,
        })
    }
}

fn load_values(path: &Path) -> HashMap<String, String> {
    let Ok(raw) = std::fs::read_to_string(path) else {
        return HashMap::new();
    };

    match serde_json::from_str(&raw) {
        Ok(values) => values,
        Err(error) => {
            tracing::warn!(path = %path.display(), %error, "store file malformed, starting empty");
            HashMap::new()
        }
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.values.insert(key.to_owned(), value.to_owned());
        self.flush()
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        if self.values.remove(key).is_some() {
            self.flush()?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "storage_test.rs"]
mod tests;
