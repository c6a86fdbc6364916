use crate::error::app_error::AppError;
use crate::storage::StorageBackend;
use std::collections::HashMap;

/// Process-local slots. Used by tests and by `backend = "memory"` runs.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    slots: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn contains(&self, key: &str) -> bool {
        self.slots.contains_key(key)
    }
}

impl StorageBackend for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, AppError> {
        Ok(self.slots.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), AppError> {
        self.slots.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), AppError> {
        self.slots.remove(key);
        Ok(())
    }
}
