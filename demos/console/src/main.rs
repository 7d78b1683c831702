//! Interactive console front end for the todolist store.
//!
//! Stands in for the excluded rendering layer: a [`View`] implementation
//! that re-renders the filtered list on every "state changed" signal, and a
//! read-eval loop translating typed commands into intents. Todos are
//! addressed by their position in the currently displayed list.

use anyhow::Result;
use std::io::{self, BufRead, Write};
use std::sync::{Arc, Mutex, Weak};
use todolist_core::action::TodoAction;
use todolist_core::environment::TodoEnvironment;
use todolist_core::state::Filter;
use todolist_core::todo::TodoId;
use todolist_core::view::View;
use todolist_runtime::Store;
use todolist_storage::JsonFileStorage;

/// Re-renders the list whenever the store signals a change.
struct ConsoleView {
    store: Mutex<Weak<Store>>,
}

impl ConsoleView {
    fn new() -> Self {
        Self {
            store: Mutex::new(Weak::new()),
        }
    }

    fn attach(&self, store: &Arc<Store>) {
        if let Ok(mut slot) = self.store.lock() {
            *slot = Arc::downgrade(store);
        }
    }
}

impl View for ConsoleView {
    fn state_changed(&self) {
        let store = self.store.lock().ok().and_then(|slot| slot.upgrade());
        if let Some(store) = store {
            render(&store);
        }
    }
}

fn render(store: &Store) {
    let todos = store.filtered_view();
    let filter = store.current_filter();

    println!();
    if todos.is_empty() {
        println!("  (nothing to show under the '{filter}' filter)");
    }
    for (index, todo) in todos.iter().enumerate() {
        let mark = if todo.completed { "x" } else { " " };
        println!("  {:>2}. [{mark}] {}", index + 1, todo.text);
    }

    let remaining = store.remaining_count();
    let label = if remaining == 1 { "item" } else { "items" };
    println!("  {remaining} {label} left  (filter: {filter})");
}

/// Resolves a 1-based position in the displayed list to a todo id.
fn displayed_id(store: &Store, arg: &str) -> Option<TodoId> {
    let position: usize = arg.parse().ok()?;
    store
        .filtered_view()
        .get(position.checked_sub(1)?)
        .map(|todo| todo.id.clone())
}

fn print_help() {
    println!("commands:");
    println!("  add <text>        append a todo");
    println!("  edit <n> <text>   replace the text of the n-th displayed todo");
    println!("  toggle <n>        flip completion of the n-th displayed todo");
    println!("  del <n>           remove the n-th displayed todo");
    println!("  filter <name>     switch the view: all | active | completed");
    println!("  list              re-print the current view");
    println!("  quit              exit");
}

/// Handles one input line. Returns `false` when the loop should stop.
fn dispatch(store: &Store, line: &str) -> bool {
    let (command, rest) = line
        .split_once(' ')
        .map_or((line, ""), |(cmd, rest)| (cmd, rest.trim()));

    match command {
        "" => {}
        "help" => print_help(),
        "list" => render(store),
        "add" => store.send(TodoAction::Add {
            text: rest.to_string(),
        }),
        "edit" => match rest.split_once(' ') {
            Some((position, text)) => match displayed_id(store, position) {
                Some(id) => store.send(TodoAction::Edit {
                    id,
                    text: text.to_string(),
                }),
                None => println!("no todo at position {position:?}"),
            },
            None => println!("usage: edit <n> <text>"),
        },
        "toggle" => match displayed_id(store, rest) {
            Some(id) => store.send(TodoAction::Toggle { id }),
            None => println!("no todo at position {rest:?}"),
        },
        "del" | "delete" => match displayed_id(store, rest) {
            Some(id) => store.send(TodoAction::Delete { id }),
            None => println!("no todo at position {rest:?}"),
        },
        // Unknown filter names are dropped here; the store's filter is
        // untouched, matching the silent no-op contract.
        "filter" => match rest.parse::<Filter>() {
            Ok(filter) => store.send(TodoAction::SetFilter { filter }),
            Err(error) => println!("{error}"),
        },
        "quit" | "exit" => return false,
        other => println!("unknown command {other:?} (try 'help')"),
    }
    true
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "todos.json".to_string());

    let storage = Arc::new(JsonFileStorage::new(&path));
    let store = Arc::new(Store::new(TodoEnvironment::default(), storage));

    let view = Arc::new(ConsoleView::new());
    view.attach(&store);
    store.subscribe(view);

    println!("todolist — persisting to {path} — type 'help' for commands");
    render(&store);

    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        if !dispatch(&store, line.trim()) {
            break;
        }
    }

    Ok(())
}
