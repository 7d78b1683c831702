//! The todo item and its identifier.
//!
//! [`Todo`] is the exact persisted shape: an opaque string id, the display
//! text, and the completion flag. Nothing else is stored, so the type doubles
//! as the wire model for the storage adapter.

use serde::{Deserialize, Serialize};

/// Opaque unique identifier for a todo item.
///
/// The token is an arbitrary string: ids are minted by the environment's
/// [`IdGenerator`](crate::environment::IdGenerator) (UUID v4 in production),
/// but decoding accepts ids produced by any prior scheme. An id never changes
/// after creation and is unique within the collection.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TodoId(String);

impl TodoId {
    /// Wraps an existing token.
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Returns the token as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for TodoId {
    fn from(token: &str) -> Self {
        Self::new(token)
    }
}

impl From<String> for TodoId {
    fn from(token: String) -> Self {
        Self(token)
    }
}

impl std::fmt::Display for TodoId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single todo item.
///
/// Invariant: `text` is non-empty and trimmed once stored. The reducer
/// enforces this by trimming input and rejecting whitespace-only text before
/// a `Todo` is ever constructed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Todo {
    /// Unique identifier
    pub id: TodoId,
    /// Display text of the todo
    pub text: String,
    /// Whether the todo is completed
    pub completed: bool,
}

impl Todo {
    /// Creates a new, not-yet-completed todo.
    #[must_use]
    pub fn new(id: TodoId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            completed: false,
        }
    }
}
