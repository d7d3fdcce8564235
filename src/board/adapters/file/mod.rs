//! File-backed adapters for board storage.

mod store;

pub use store::{DEFAULT_FILE_NAME, JsonFileBoardStore};
