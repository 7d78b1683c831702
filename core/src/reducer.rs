//! The reducer trait and the todo reducer.
//!
//! Reducers are pure functions: `(State, Action, Environment) → Effects`.
//! They contain all mutation logic, mutate state in place, and describe side
//! effects without executing them.

use crate::action::TodoAction;
use crate::effect::{Effect, Effects};
use crate::environment::TodoEnvironment;
use crate::state::TodoState;
use crate::todo::{Todo, TodoId};

/// The core abstraction for state-mutation logic.
///
/// # Type Parameters
///
/// - `State`: the domain state the reducer operates on
/// - `Action`: the intents the reducer processes
/// - `Environment`: the injected dependencies the reducer needs
pub trait Reducer {
    /// The state type this reducer operates on
    type State;

    /// The action type this reducer processes
    type Action;

    /// The environment type with injected dependencies
    type Environment;

    /// Reduces an action into state changes and effect descriptions.
    ///
    /// Updates `state` in place and returns the effects the runtime must
    /// execute, in order, before the triggering operation returns.
    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> Effects;
}

/// Reducer for the todo collection.
///
/// Every invalid input is a defined no-op returning no effects: whitespace-only
/// add or edit text, and edit/toggle against an unknown id. Delete is the one
/// deliberate exception — it persists and notifies whether or not a removal
/// occurred.
#[derive(Clone, Copy, Debug, Default)]
pub struct TodoReducer;

impl TodoReducer {
    /// Creates a new `TodoReducer`.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Draws a fresh id, re-drawing on the improbable collision so the
    /// uniqueness invariant holds even under a weak generator.
    fn fresh_id(state: &TodoState, env: &TodoEnvironment) -> TodoId {
        loop {
            let id = env.ids.fresh();
            if !state.contains(&id) {
                return id;
            }
        }
    }

    fn add(state: &mut TodoState, text: &str, env: &TodoEnvironment) -> Effects {
        let text = text.trim();
        if text.is_empty() {
            return Effect::none();
        }

        let id = Self::fresh_id(state, env);
        state.items.push(Todo::new(id, text));
        Effect::persist_and_notify()
    }

    fn edit(state: &mut TodoState, id: &TodoId, text: &str) -> Effects {
        let text = text.trim();
        // Reject-empty-edit policy: the existing text is preserved.
        if text.is_empty() {
            return Effect::none();
        }

        let Some(todo) = state.get_mut(id) else {
            return Effect::none();
        };
        todo.text = text.to_string();
        Effect::persist_and_notify()
    }

    fn delete(state: &mut TodoState, id: &TodoId) -> Effects {
        state.items.retain(|todo| &todo.id != id);
        // Persists even when nothing matched.
        Effect::persist_and_notify()
    }

    fn toggle(state: &mut TodoState, id: &TodoId) -> Effects {
        let Some(todo) = state.get_mut(id) else {
            return Effect::none();
        };
        todo.completed = !todo.completed;
        Effect::persist_and_notify()
    }
}

impl Reducer for TodoReducer {
    type State = TodoState;
    type Action = TodoAction;
    type Environment = TodoEnvironment;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> Effects {
        match action {
            TodoAction::Add { text } => Self::add(state, &text, env),
            TodoAction::Edit { id, text } => Self::edit(state, &id, &text),
            TodoAction::Delete { id } => Self::delete(state, &id),
            TodoAction::Toggle { id } => Self::toggle(state, &id),
            TodoAction::SetFilter { filter } => {
                // Transient UI state: notify, but never persist.
                state.filter = filter;
                Effect::notify_only()
            }
        }
    }
}
