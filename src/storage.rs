//! Durable key-value slots backing the repository.
//!
//! Each slot holds one JSON document (a whole collection or a single record),
//! mirroring how the browser build keeps its state in local storage.

pub mod file;
pub mod memory;

pub use file::FileStorage;
pub use memory::MemoryStorage;

use crate::config::{StorageBackendKind, StorageConfig};
use crate::error::app_error::AppError;

pub trait StorageBackend {
    fn get(&self, key: &str) -> Result<Option<String>, AppError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), AppError>;
    /// Removing a slot that does not exist is not an error.
    fn remove(&mut self, key: &str) -> Result<(), AppError>;
}

impl<S: StorageBackend + ?Sized> StorageBackend for Box<S> {
    fn get(&self, key: &str) -> Result<Option<String>, AppError> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), AppError> {
        (**self).set(key, value)
    }

    fn remove(&mut self, key: &str) -> Result<(), AppError> {
        (**self).remove(key)
    }
}

/// Builds the backend selected in configuration.
pub fn from_config(config: &StorageConfig) -> Result<Box<dyn StorageBackend>, AppError> {
    match config.backend {
        StorageBackendKind::Memory => Ok(Box::new(MemoryStorage::default())),
        StorageBackendKind::File => Ok(Box::new(FileStorage::open(&config.data_dir)?)),
    }
}
