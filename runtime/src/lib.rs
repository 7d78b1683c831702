//! # Todolist Runtime
//!
//! The [`Store`]: sole owner of the todo collection at runtime.
//!
//! The store coordinates the pieces defined in `todolist-core`: it holds the
//! state, drives the reducer for every dispatched intent, executes the
//! returned effects (persist, then notify), and serves the query surface the
//! views re-render from.
//!
//! ## Execution model
//!
//! Everything is synchronous and cooperative. [`Store::send`] runs the
//! reducer, the persistence write, and the view notifications to completion
//! before it returns; there is no background task, timer, or deferred write.
//! A mutex serializes callers so reads never observe a partially-applied
//! mutation, and view callbacks run after the state lock is released so a
//! notified view may immediately re-enter the query surface.
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//! use todolist_core::action::TodoAction;
//! use todolist_core::environment::TodoEnvironment;
//! use todolist_runtime::Store;
//! use todolist_testing::InMemoryStorage;
//!
//! let store = Store::new(TodoEnvironment::default(), Arc::new(InMemoryStorage::new()));
//!
//! store.send(TodoAction::Add { text: "Buy milk".to_string() });
//!
//! assert_eq!(store.remaining_count(), 1);
//! assert_eq!(store.filtered_view()[0].text, "Buy milk");
//! ```

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use todolist_core::action::TodoAction;
use todolist_core::effect::Effect;
use todolist_core::environment::TodoEnvironment;
use todolist_core::reducer::{Reducer, TodoReducer};
use todolist_core::state::{Filter, TodoState};
use todolist_core::storage::TodoStorage;
use todolist_core::todo::Todo;
use todolist_core::view::View;

/// The runtime owner of the todo collection.
///
/// All reads and writes of todos pass through the store: views dispatch
/// [`TodoAction`] intents via [`send`](Store::send) and read back through the
/// query surface after a [`state_changed`](View::state_changed) signal.
///
/// Construct one instance at the application entry point and share it
/// (typically behind an [`Arc`]) for the life of the process.
pub struct Store {
    state: Mutex<TodoState>,
    reducer: TodoReducer,
    environment: TodoEnvironment,
    storage: Arc<dyn TodoStorage>,
    views: Mutex<Vec<Arc<dyn View>>>,
}

impl Store {
    /// Creates a store initialized from the storage adapter.
    ///
    /// Loading is lenient by contract: an absent or undecodable slot yields
    /// an empty collection, so construction cannot fail.
    #[must_use]
    pub fn new(environment: TodoEnvironment, storage: Arc<dyn TodoStorage>) -> Self {
        let items = storage.load();
        tracing::debug!(count = items.len(), "loaded persisted todos");
        Self::with_state(TodoState::with_items(items), environment, storage)
    }

    /// Creates a store from explicit state, skipping the startup load.
    #[must_use]
    pub fn with_state(
        state: TodoState,
        environment: TodoEnvironment,
        storage: Arc<dyn TodoStorage>,
    ) -> Self {
        Self {
            state: Mutex::new(state),
            reducer: TodoReducer::new(),
            environment,
            storage,
            views: Mutex::new(Vec::new()),
        }
    }

    /// Subscribes a view to post-mutation "state changed" signals.
    pub fn subscribe(&self, view: Arc<dyn View>) {
        self.lock_views().push(view);
    }

    /// Dispatches an intent and runs it to completion.
    ///
    /// The reducer mutates state under the lock; a requested persistence
    /// write happens while the lock is still held (so the saved snapshot is
    /// exactly the post-mutation state); notifications go out after release.
    /// Invalid input never surfaces here — the reducer defines it as a no-op
    /// — and a failed write is logged and swallowed: there is no
    /// caller-visible error surface.
    pub fn send(&self, action: TodoAction) {
        tracing::debug!(?action, "processing action");

        let effects = {
            let mut state = self.lock_state();
            let effects = self.reducer.reduce(&mut state, action, &self.environment);

            if effects.contains(&Effect::Persist) {
                if let Err(error) = self.storage.save(&state.items) {
                    tracing::error!(%error, "failed to persist todos");
                }
            }
            effects
        };

        if effects.contains(&Effect::Notify) {
            self.notify_views();
        }
    }

    /// Runs a closure against the current state under the lock.
    pub fn state<T>(&self, read: impl FnOnce(&TodoState) -> T) -> T {
        read(&self.lock_state())
    }

    /// Todos visible under the current filter, in insertion order.
    #[must_use]
    pub fn filtered_view(&self) -> Vec<Todo> {
        self.state(|state| state.filtered().cloned().collect())
    }

    /// Count of not-yet-completed todos, regardless of the filter.
    #[must_use]
    pub fn remaining_count(&self) -> usize {
        self.state(TodoState::remaining_count)
    }

    /// The currently applied view filter.
    #[must_use]
    pub fn current_filter(&self) -> Filter {
        self.state(|state| state.filter)
    }

    fn notify_views(&self) {
        // Snapshot the subscriber list so callbacks can subscribe or query
        // without holding any store lock.
        let views: Vec<Arc<dyn View>> = self.lock_views().clone();
        for view in views {
            view.state_changed();
        }
    }

    // Reducers leave the state consistent even if an assertion fires later in
    // send, so a poisoned lock carries usable state.
    fn lock_state(&self) -> MutexGuard<'_, TodoState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn lock_views(&self) -> MutexGuard<'_, Vec<Arc<dyn View>>> {
        self.views.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl std::fmt::Debug for Store {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Store")
            .field("state", &self.lock_state())
            .field("views", &self.lock_views().len())
            .finish_non_exhaustive()
    }
}
