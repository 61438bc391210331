//! Infrastructure layer: key-value persistence and the inventory service.

pub mod inventory_store;
pub mod json_file;
pub mod kv;
pub mod memory;

mod integration_tests;

pub use inventory_store::{InventoryStore, STORAGE_KEY};
pub use json_file::JsonFileStore;
pub use kv::{KeyValueStore, StorageError};
pub use memory::InMemoryKvStore;
