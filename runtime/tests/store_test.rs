//! Integration tests for the store runtime: startup load, the
//! persist-and-notify sequence, notification fan-out, and degraded storage.

#![allow(clippy::unwrap_used)]

use std::sync::{Arc, Mutex, Weak};
use todolist_core::action::TodoAction;
use todolist_core::environment::TodoEnvironment;
use todolist_core::state::Filter;
use todolist_core::todo::{Todo, TodoId};
use todolist_core::view::View;
use todolist_runtime::Store;
use todolist_testing::{FailingStorage, InMemoryStorage, RecordingView, SequentialIds};

fn test_env() -> TodoEnvironment {
    TodoEnvironment::new(Arc::new(SequentialIds::new()))
}

fn add(store: &Store, text: &str) {
    store.send(TodoAction::Add {
        text: text.to_string(),
    });
}

#[test]
fn startup_loads_persisted_items_in_order() {
    let persisted = vec![
        Todo::new(TodoId::new("a"), "first"),
        Todo {
            id: TodoId::new("b"),
            text: "second".to_string(),
            completed: true,
        },
    ];
    let storage = Arc::new(InMemoryStorage::with_items(&persisted));

    let store = Store::new(test_env(), storage);

    assert_eq!(store.state(|s| s.items.clone()), persisted);
    assert_eq!(store.current_filter(), Filter::All);
}

#[test]
fn startup_with_absent_slot_is_empty() {
    let store = Store::new(test_env(), Arc::new(InMemoryStorage::new()));
    assert!(store.filtered_view().is_empty());
}

#[test]
fn startup_with_corrupt_slot_degrades_to_empty() {
    let storage = Arc::new(InMemoryStorage::new());
    storage.set_raw(r#"[{"id": "a", "text":"#);

    let store = Store::new(test_env(), storage);

    assert!(store.filtered_view().is_empty());
    assert_eq!(store.remaining_count(), 0);
}

#[test]
fn add_persists_and_notifies() {
    let storage = Arc::new(InMemoryStorage::new());
    let view = Arc::new(RecordingView::new());
    let store = Store::new(test_env(), Arc::clone(&storage) as Arc<dyn todolist_core::storage::TodoStorage>);
    store.subscribe(Arc::clone(&view) as Arc<dyn View>);

    add(&store, "Buy milk");

    assert_eq!(storage.save_count(), 1);
    assert_eq!(view.count(), 1);
    assert_eq!(
        storage.raw().unwrap(),
        r#"[{"id":"todo-1","text":"Buy milk","completed":false}]"#
    );
}

#[test]
fn blank_add_neither_persists_nor_notifies() {
    let storage = Arc::new(InMemoryStorage::new());
    let view = Arc::new(RecordingView::new());
    let store = Store::new(test_env(), Arc::clone(&storage) as Arc<dyn todolist_core::storage::TodoStorage>);
    store.subscribe(Arc::clone(&view) as Arc<dyn View>);

    add(&store, "   ");

    assert!(store.filtered_view().is_empty());
    assert_eq!(storage.save_count(), 0);
    assert_eq!(view.count(), 0);
}

#[test]
fn every_mutation_rewrites_the_full_slot() {
    let storage = Arc::new(InMemoryStorage::new());
    let store = Store::new(test_env(), Arc::clone(&storage) as Arc<dyn todolist_core::storage::TodoStorage>);

    add(&store, "first");
    add(&store, "second");
    store.send(TodoAction::Toggle {
        id: TodoId::new("todo-1"),
    });
    store.send(TodoAction::Edit {
        id: TodoId::new("todo-2"),
        text: " renamed ".to_string(),
    });

    assert_eq!(storage.save_count(), 4);
    assert_eq!(
        storage.raw().unwrap(),
        r#"[{"id":"todo-1","text":"first","completed":true},{"id":"todo-2","text":"renamed","completed":false}]"#
    );
}

#[test]
fn delete_persists_even_when_nothing_matched() {
    let storage = Arc::new(InMemoryStorage::new());
    let store = Store::new(test_env(), Arc::clone(&storage) as Arc<dyn todolist_core::storage::TodoStorage>);

    add(&store, "only");
    store.send(TodoAction::Delete {
        id: TodoId::new("todo-1"),
    });
    store.send(TodoAction::Delete {
        id: TodoId::new("todo-1"),
    });

    assert!(store.filtered_view().is_empty());
    assert_eq!(storage.save_count(), 3);
    assert_eq!(storage.raw().unwrap(), "[]");
}

#[test]
fn set_filter_notifies_without_persisting() {
    let storage = Arc::new(InMemoryStorage::new());
    let view = Arc::new(RecordingView::new());
    let store = Store::new(test_env(), Arc::clone(&storage) as Arc<dyn todolist_core::storage::TodoStorage>);
    store.subscribe(Arc::clone(&view) as Arc<dyn View>);

    store.send(TodoAction::SetFilter {
        filter: Filter::Completed,
    });

    assert_eq!(store.current_filter(), Filter::Completed);
    assert_eq!(storage.save_count(), 0);
    assert_eq!(view.count(), 1);
}

#[test]
fn filtered_view_follows_the_current_filter() {
    let store = Store::new(test_env(), Arc::new(InMemoryStorage::new()));
    add(&store, "first");
    add(&store, "second");
    store.send(TodoAction::Toggle {
        id: TodoId::new("todo-1"),
    });

    store.send(TodoAction::SetFilter {
        filter: Filter::Active,
    });
    let active: Vec<_> = store.filtered_view();
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].text, "second");

    store.send(TodoAction::SetFilter {
        filter: Filter::Completed,
    });
    let completed = store.filtered_view();
    assert_eq!(completed.len(), 1);
    assert_eq!(completed[0].text, "first");

    assert_eq!(store.remaining_count(), 1);
}

#[test]
fn failed_saves_are_swallowed() {
    let store = Store::new(test_env(), Arc::new(FailingStorage::new()));

    add(&store, "kept in memory");

    // The mutation applied even though the write failed.
    assert_eq!(store.remaining_count(), 1);
}

#[test]
fn notifications_reach_every_subscriber() {
    let store = Store::new(test_env(), Arc::new(InMemoryStorage::new()));
    let first = Arc::new(RecordingView::new());
    let second = Arc::new(RecordingView::new());
    store.subscribe(Arc::clone(&first) as Arc<dyn View>);
    store.subscribe(Arc::clone(&second) as Arc<dyn View>);

    add(&store, "one");
    store.send(TodoAction::SetFilter {
        filter: Filter::Active,
    });

    assert_eq!(first.count(), 2);
    assert_eq!(second.count(), 2);
}

/// A view that re-enters the store's query surface from its callback, the
/// way a real renderer does.
struct ReentrantView {
    store: Mutex<Weak<Store>>,
    seen_counts: Mutex<Vec<usize>>,
}

impl ReentrantView {
    fn new() -> Self {
        Self {
            store: Mutex::new(Weak::new()),
            seen_counts: Mutex::new(Vec::new()),
        }
    }

    fn attach(&self, store: &Arc<Store>) {
        *self.store.lock().unwrap() = Arc::downgrade(store);
    }
}

impl View for ReentrantView {
    fn state_changed(&self) {
        if let Some(store) = self.store.lock().unwrap().upgrade() {
            self.seen_counts.lock().unwrap().push(store.remaining_count());
        }
    }
}

#[test]
fn views_may_query_the_store_from_their_callback() {
    let store = Arc::new(Store::new(test_env(), Arc::new(InMemoryStorage::new())));
    let view = Arc::new(ReentrantView::new());
    view.attach(&store);
    store.subscribe(Arc::clone(&view) as Arc<dyn View>);

    add(&store, "one");
    add(&store, "two");
    store.send(TodoAction::Toggle {
        id: TodoId::new("todo-1"),
    });

    // Each callback observed the fully-applied state of its mutation.
    assert_eq!(view.seen_counts.lock().unwrap().as_slice(), [1, 2, 1]);
}
