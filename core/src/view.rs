//! The view collaborator contract.
//!
//! Rendering lives outside the state layer. A view subscribes to the store
//! and receives a payload-free "state changed" signal after every mutation;
//! it then re-reads the store's queries to re-render. This keeps the store
//! decoupled from any UI toolkit.

/// Outbound half of the view contract.
///
/// `state_changed` is called synchronously after the triggering mutation has
/// been applied and persisted, and after the store has released its state
/// lock — so an implementation may immediately call back into the store's
/// query surface.
pub trait View: Send + Sync {
    /// Signals that the collection or the filter changed.
    fn state_changed(&self);
}
