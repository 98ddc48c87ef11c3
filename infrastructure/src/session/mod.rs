//! Session persistence — the answer snapshot on disk.

mod json_file_store;

pub use json_file_store::JsonFileSessionStore;
