//! # Todolist Core
//!
//! Domain types and business logic for the todolist state layer.
//!
//! This crate defines everything the state layer is made of: the todo
//! collection and its invariants, the intents that mutate it, the pure
//! reducer that applies them, and the contracts the runtime wires together
//! (storage adapter, view collaborator, injected dependencies).
//!
//! ## Core Concepts
//!
//! - **State**: [`state::TodoState`] — the insertion-ordered todo collection
//!   plus the transient view filter
//! - **Action**: [`action::TodoAction`] — all user intents (add, edit,
//!   delete, toggle, set-filter)
//! - **Reducer**: [`reducer::TodoReducer`] — pure function
//!   `(State, Action, Environment) → Effects`
//! - **Effect**: [`effect::Effect`] — side-effect descriptions (persist,
//!   notify) executed by the store runtime, never by the reducer
//! - **Environment**: [`environment::TodoEnvironment`] — injected
//!   dependencies behind traits (id generation)
//!
//! ## Architecture Principles
//!
//! - Unidirectional data flow: view → intent → reducer → effects → view
//! - Invalid input is a defined no-op, never an error (empty text, unknown
//!   id); the collection invariants hold under any action sequence
//! - Explicit effects: the reducer mutates state in place and *describes*
//!   persistence and notification; the runtime executes them synchronously
//!
//! ## Example
//!
//! ```
//! use todolist_core::action::TodoAction;
//! use todolist_core::environment::TodoEnvironment;
//! use todolist_core::reducer::{Reducer, TodoReducer};
//! use todolist_core::state::TodoState;
//!
//! let reducer = TodoReducer::new();
//! let env = TodoEnvironment::default();
//! let mut state = TodoState::new();
//!
//! let effects = reducer.reduce(
//!     &mut state,
//!     TodoAction::Add { text: "Buy milk".to_string() },
//!     &env,
//! );
//!
//! assert_eq!(state.items.len(), 1);
//! assert!(!effects.is_empty());
//! ```

// Re-export commonly used types
pub use serde::{Deserialize, Serialize};
pub use smallvec::{SmallVec, smallvec};

pub mod action;
pub mod effect;
pub mod environment;
pub mod reducer;
pub mod state;
pub mod storage;
pub mod todo;
pub mod view;
