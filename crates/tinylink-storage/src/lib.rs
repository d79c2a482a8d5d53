pub mod json_file;
pub mod memory;

pub use json_file::{JsonFileSettings, JsonFileStore};
pub use memory::InMemoryStore;
pub use tinylink_core::{Store, StorageError};
