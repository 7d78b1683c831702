//! # Todolist Storage
//!
//! Production storage adapter for the todolist state layer.
//!
//! The state layer persists the todo collection through the `TodoStorage`
//! contract defined in `todolist-core`. This crate provides the durable
//! implementation: [`JsonFileStorage`], which maps the `"todos"` slot to a
//! JSON file on disk.
//!
//! ## Example
//!
//! ```no_run
//! use todolist_core::storage::TodoStorage;
//! use todolist_storage::JsonFileStorage;
//!
//! let storage = JsonFileStorage::in_dir("/var/lib/todolist");
//! let items = storage.load(); // empty on first run
//! storage.save(&items)?;
//! # Ok::<(), todolist_core::storage::StorageError>(())
//! ```

mod json_file;

pub use json_file::JsonFileStorage;
