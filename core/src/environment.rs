//! Injected dependencies for the reducer.
//!
//! External capabilities are abstracted behind traits and handed to the
//! reducer through [`TodoEnvironment`], so production and tests differ only
//! in what they inject.

use crate::todo::TodoId;
use std::sync::Arc;
use uuid::Uuid;

/// Id generation, abstracted for testability.
///
/// Implementations must make collisions with previously issued ids
/// negligible; the reducer additionally re-draws if a fresh id happens to
/// collide with one already in the collection, so deterministic generators
/// used in tests remain safe.
pub trait IdGenerator: Send + Sync {
    /// Produces a fresh identifier token.
    fn fresh(&self) -> TodoId;
}

/// Production id generator: random UUID v4 tokens.
#[derive(Clone, Copy, Debug, Default)]
pub struct UuidIds;

impl IdGenerator for UuidIds {
    fn fresh(&self) -> TodoId {
        TodoId::new(Uuid::new_v4().to_string())
    }
}

/// Dependencies injected into the todo reducer.
#[derive(Clone)]
pub struct TodoEnvironment {
    /// Source of fresh todo ids
    pub ids: Arc<dyn IdGenerator>,
}

impl TodoEnvironment {
    /// Creates an environment with the given id generator.
    #[must_use]
    pub fn new(ids: Arc<dyn IdGenerator>) -> Self {
        Self { ids }
    }
}

impl Default for TodoEnvironment {
    fn default() -> Self {
        Self::new(Arc::new(UuidIds))
    }
}
