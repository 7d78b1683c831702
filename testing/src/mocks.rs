//! Deterministic doubles for the storage, view, and environment contracts.

#![allow(clippy::unwrap_used)] // Test infrastructure uses unwrap for simplicity

use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use todolist_core::environment::IdGenerator;
use todolist_core::storage::{self, StorageError, TodoStorage};
use todolist_core::todo::{Todo, TodoId};
use todolist_core::view::View;

/// In-memory storage slot for fast, deterministic testing.
///
/// The slot holds the raw serialized string — exactly what a durable
/// key-value slot would hold — so tests can inject corrupted values and
/// inspect what a save actually wrote.
///
/// # Example
///
/// ```
/// use todolist_core::storage::TodoStorage;
/// use todolist_testing::InMemoryStorage;
///
/// let storage = InMemoryStorage::new();
/// storage.set_raw("{corrupt");
/// assert!(storage.load().is_empty()); // degrades, never fails
/// ```
#[derive(Debug, Default)]
pub struct InMemoryStorage {
    slot: Mutex<Option<String>>,
    saves: AtomicUsize,
}

impl InMemoryStorage {
    /// Creates storage with an absent slot.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates storage pre-seeded with an encoded collection.
    #[must_use]
    pub fn with_items(items: &[Todo]) -> Self {
        let storage = Self::new();
        storage.set_raw(storage::encode(items).unwrap());
        storage
    }

    /// Replaces the raw slot value, bypassing encoding.
    pub fn set_raw(&self, raw: impl Into<String>) {
        *self.slot.lock().unwrap() = Some(raw.into());
    }

    /// Returns the raw slot value, if any.
    #[must_use]
    pub fn raw(&self) -> Option<String> {
        self.slot.lock().unwrap().clone()
    }

    /// Clears the slot back to absent (for test isolation).
    pub fn clear(&self) {
        *self.slot.lock().unwrap() = None;
    }

    /// Number of completed save calls.
    #[must_use]
    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }
}

impl TodoStorage for InMemoryStorage {
    fn load(&self) -> Vec<Todo> {
        self.slot
            .lock()
            .unwrap()
            .as_deref()
            .map_or_else(Vec::new, storage::decode_or_default)
    }

    fn save(&self, items: &[Todo]) -> Result<(), StorageError> {
        let encoded = storage::encode(items)?;
        *self.slot.lock().unwrap() = Some(encoded);
        self.saves.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

/// Storage whose saves always fail.
///
/// Useful for asserting that the store swallows write failures instead of
/// surfacing them.
#[derive(Debug, Default)]
pub struct FailingStorage;

impl FailingStorage {
    /// Creates a new `FailingStorage`.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl TodoStorage for FailingStorage {
    fn load(&self) -> Vec<Todo> {
        Vec::new()
    }

    fn save(&self, _items: &[Todo]) -> Result<(), StorageError> {
        Err(StorageError::Io(std::io::Error::other(
            "save rejected by FailingStorage",
        )))
    }
}

/// View collaborator that counts "state changed" signals.
#[derive(Debug, Default)]
pub struct RecordingView {
    notifications: AtomicUsize,
}

impl RecordingView {
    /// Creates a view with zero recorded notifications.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of notifications received so far.
    #[must_use]
    pub fn count(&self) -> usize {
        self.notifications.load(Ordering::SeqCst)
    }
}

impl View for RecordingView {
    fn state_changed(&self) {
        self.notifications.fetch_add(1, Ordering::SeqCst);
    }
}

/// Predictable id generator: `todo-1`, `todo-2`, ...
#[derive(Debug)]
pub struct SequentialIds {
    next: AtomicU64,
}

impl SequentialIds {
    /// Creates a generator starting at `todo-1`.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            next: AtomicU64::new(1),
        }
    }
}

impl Default for SequentialIds {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGenerator for SequentialIds {
    fn fresh(&self) -> TodoId {
        let n = self.next.fetch_add(1, Ordering::SeqCst);
        TodoId::new(format!("todo-{n}"))
    }
}
