//! # Todolist Testing
//!
//! Testing utilities for the todolist state layer.
//!
//! This crate provides:
//! - Deterministic doubles for the environment and storage contracts
//!   ([`SequentialIds`], [`InMemoryStorage`], [`FailingStorage`])
//! - A recording view collaborator ([`RecordingView`])
//! - A fluent Given-When-Then harness for reducer tests ([`ReducerTest`])
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//! use todolist_core::action::TodoAction;
//! use todolist_core::environment::TodoEnvironment;
//! use todolist_core::reducer::TodoReducer;
//! use todolist_core::state::TodoState;
//! use todolist_testing::{ReducerTest, SequentialIds, assertions};
//!
//! ReducerTest::new(TodoReducer::new())
//!     .with_env(TodoEnvironment::new(Arc::new(SequentialIds::new())))
//!     .given_state(TodoState::new())
//!     .when_action(TodoAction::Add { text: "Buy milk".to_string() })
//!     .then_state(|state| {
//!         assert_eq!(state.items.len(), 1);
//!         assert_eq!(state.items[0].text, "Buy milk");
//!     })
//!     .then_effects(assertions::assert_persist_and_notify)
//!     .run();
//! ```

pub mod mocks;

// Re-export commonly used items
pub use mocks::{FailingStorage, InMemoryStorage, RecordingView, SequentialIds};
pub use reducer_test::{ReducerTest, assertions};
