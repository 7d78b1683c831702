//! User intents accepted by the store.
//!
//! Every mutation of the todo collection is expressed as a [`TodoAction`]
//! dispatched through the store. Views construct actions; they never touch
//! the collection directly.

use crate::state::Filter;
use crate::todo::TodoId;

/// All intents a view can dispatch.
///
/// Invalid input — whitespace-only text, an id that matches nothing — is a
/// defined no-op in the reducer, not an error. The caller is expected to
/// pre-filter obviously bad input, but the store stays safe without it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TodoAction {
    /// Append a new todo with the trimmed `text`
    Add {
        /// Raw input text; trimmed before storage, ignored if blank
        text: String,
    },

    /// Replace the text of an existing todo with the trimmed `text`
    Edit {
        /// Todo to edit
        id: TodoId,
        /// Raw replacement text; a blank replacement is rejected and the
        /// existing text is preserved
        text: String,
    },

    /// Remove the todo with the given id
    Delete {
        /// Todo to remove
        id: TodoId,
    },

    /// Flip the completion flag of an existing todo
    Toggle {
        /// Todo to toggle
        id: TodoId,
    },

    /// Switch the view filter
    SetFilter {
        /// Filter to apply at query time
        filter: Filter,
    },
}
