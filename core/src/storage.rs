//! Storage contract and persisted-slot codec.
//!
//! The collection survives restarts through a durable key-value slot holding
//! a JSON array of todos. This module defines the adapter trait the runtime
//! persists through, the error type, and the shared codec so every adapter
//! applies the same recovery policy: a slot that cannot be decoded degrades
//! to an empty collection with a logged warning, never a startup failure.
//!
//! # Implementations
//!
//! - `JsonFileStorage` (in `todolist-storage`): production, file-backed slot
//! - `InMemoryStorage` (in `todolist-testing`): fast, deterministic testing

use crate::todo::Todo;
use thiserror::Error;

/// Name of the persisted slot holding the serialized collection.
pub const TODOS_KEY: &str = "todos";

/// Errors that can occur while persisting or decoding the collection.
#[derive(Error, Debug)]
pub enum StorageError {
    /// The collection could not be serialized.
    #[error("failed to encode todos: {0}")]
    Encode(#[source] serde_json::Error),

    /// The persisted value could not be parsed into the expected shape.
    ///
    /// Always recovered at the adapter boundary: [`decode_or_default`] logs
    /// the failure and substitutes an empty collection.
    #[error("failed to decode persisted todos: {0}")]
    Decode(#[source] serde_json::Error),

    /// The persisted slot could not be read or written.
    #[error("failed to access the persisted slot: {0}")]
    Io(#[from] std::io::Error),
}

/// Durable round-trip of the todo collection, abstracting the slot.
///
/// `load` is deliberately infallible: absent or undecodable data yields an
/// empty collection so initialization can never be blocked by a bad slot.
pub trait TodoStorage: Send + Sync {
    /// Loads the persisted collection, or an empty one if the slot is absent
    /// or undecodable.
    fn load(&self) -> Vec<Todo>;

    /// Serializes `items` and overwrites the slot (full-replace write).
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] when serialization or the write fails.
    fn save(&self, items: &[Todo]) -> Result<(), StorageError>;
}

/// Encodes the collection as the persisted JSON array.
///
/// # Errors
///
/// Returns [`StorageError::Encode`] when serialization fails.
pub fn encode(items: &[Todo]) -> Result<String, StorageError> {
    serde_json::to_string(items).map_err(StorageError::Encode)
}

/// Decodes a persisted JSON array back into todos, preserving order.
///
/// # Errors
///
/// Returns [`StorageError::Decode`] when the value does not parse into the
/// expected shape.
pub fn decode(raw: &str) -> Result<Vec<Todo>, StorageError> {
    serde_json::from_str(raw).map_err(StorageError::Decode)
}

/// Decodes a persisted value, degrading to an empty collection on failure.
///
/// This is the recovery policy of the storage boundary: the decode failure is
/// logged as a non-fatal diagnostic and an empty collection is returned.
#[must_use]
pub fn decode_or_default(raw: &str) -> Vec<Todo> {
    match decode(raw) {
        Ok(items) => items,
        Err(error) => {
            tracing::warn!(%error, "discarding undecodable persisted todos");
            Vec::new()
        }
    }
}
