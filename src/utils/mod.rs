// Utils compartidos

pub mod constants;
pub mod storage;
pub mod validation;

pub use constants::*;
pub use storage::{load_json, save_json, KeyValueStore, LocalStorage, StorageError};
#[cfg(test)]
pub use storage::MemoryStorage;
pub use validation::FormErrors;
