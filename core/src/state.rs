//! State of the todo collection.
//!
//! [`TodoState`] owns the insertion-ordered list of todos together with the
//! transient view filter. All queries here are pure; mutation goes through
//! the reducer.

use crate::todo::{Todo, TodoId};
use thiserror::Error;

/// View-selection mode applied at query time.
///
/// The filter is transient UI state: it is never persisted, and changing it
/// never touches the collection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Filter {
    /// Every item
    #[default]
    All,
    /// Items with `completed == false`
    Active,
    /// Items with `completed == true`
    Completed,
}

impl Filter {
    /// Whether `todo` is visible under this filter.
    #[must_use]
    pub const fn matches(self, todo: &Todo) -> bool {
        match self {
            Self::All => true,
            Self::Active => !todo.completed,
            Self::Completed => todo.completed,
        }
    }
}

/// A filter name that is none of `all`, `active`, `completed`.
///
/// Unknown names are rejected at this textual boundary so a view can drop
/// them; the filter itself stays unchanged, preserving the silent no-op
/// contract for invalid filter input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unrecognized filter name: {0:?}")]
pub struct ParseFilterError(pub String);

impl std::str::FromStr for Filter {
    type Err = ParseFilterError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "all" => Ok(Self::All),
            "active" => Ok(Self::Active),
            "completed" => Ok(Self::Completed),
            other => Err(ParseFilterError(other.to_string())),
        }
    }
}

impl std::fmt::Display for Filter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::All => "all",
            Self::Active => "active",
            Self::Completed => "completed",
        };
        write!(f, "{name}")
    }
}

/// State of the todo collection.
///
/// `items` preserves insertion order: add appends, edit and toggle mutate in
/// place, delete removes without reordering.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TodoState {
    /// All todos, in insertion order
    pub items: Vec<Todo>,
    /// Current view filter
    pub filter: Filter,
}

impl TodoState {
    /// Creates an empty state with the default filter.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a state holding `items`, e.g. loaded from storage at startup.
    #[must_use]
    pub fn with_items(items: Vec<Todo>) -> Self {
        Self {
            items,
            filter: Filter::default(),
        }
    }

    /// Returns the todo with the given id, if any.
    #[must_use]
    pub fn get(&self, id: &TodoId) -> Option<&Todo> {
        self.items.iter().find(|todo| &todo.id == id)
    }

    /// Returns a mutable reference to the todo with the given id, if any.
    pub fn get_mut(&mut self, id: &TodoId) -> Option<&mut Todo> {
        self.items.iter_mut().find(|todo| &todo.id == id)
    }

    /// Checks whether a todo with the given id exists.
    #[must_use]
    pub fn contains(&self, id: &TodoId) -> bool {
        self.get(id).is_some()
    }

    /// Todos visible under the current filter, in insertion order.
    pub fn filtered(&self) -> impl Iterator<Item = &Todo> {
        let filter = self.filter;
        self.items.iter().filter(move |todo| filter.matches(todo))
    }

    /// Count of items with `completed == false`, regardless of the filter.
    #[must_use]
    pub fn remaining_count(&self) -> usize {
        self.items.iter().filter(|todo| !todo.completed).count()
    }
}
