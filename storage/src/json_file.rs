//! File-backed persisted slot.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use todolist_core::storage::{self, StorageError, TODOS_KEY, TodoStorage};
use todolist_core::todo::Todo;

/// Durable key-value slot backed by a single JSON file.
///
/// The file holds exactly what the slot contract describes: a JSON array of
/// `{"id","text","completed"}` objects in insertion order. Loading is
/// lenient — a missing file is an empty collection, and an unreadable or
/// undecodable file is logged and treated the same. Saving is a full-replace
/// overwrite.
#[derive(Clone, Debug)]
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    /// Creates an adapter writing to the given file path.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Creates an adapter for the default slot file (`todos.json`) in `dir`.
    #[must_use]
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self::new(dir.as_ref().join(format!("{TODOS_KEY}.json")))
    }

    /// The file this adapter reads and writes.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TodoStorage for JsonFileStorage {
    fn load(&self) -> Vec<Todo> {
        match fs::read_to_string(&self.path) {
            Ok(raw) => storage::decode_or_default(&raw),
            Err(error) if error.kind() == ErrorKind::NotFound => Vec::new(),
            Err(error) => {
                // Startup must not be blocked by a bad slot; degrade like a
                // decode failure.
                tracing::warn!(%error, path = %self.path.display(), "failed to read persisted todos");
                Vec::new()
            }
        }
    }

    fn save(&self, items: &[Todo]) -> Result<(), StorageError> {
        let encoded = storage::encode(items)?;
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(&self.path, encoded)?;
        Ok(())
    }
}
