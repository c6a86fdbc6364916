use crate::error::app_error::AppError;
use crate::storage::StorageBackend;
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::debug;

/// One `<slot>.json` file per slot inside a data directory.
///
/// Writes land in a sibling temp file first and are renamed into place, so a
/// crash mid-write leaves the previous document intact.
#[derive(Debug, Clone)]
pub struct FileStorage {
    root: PathBuf,
}

impl FileStorage {
    pub fn open(root: impl AsRef<Path>) -> Result<Self, AppError> {
        let root = root.as_ref().to_path_buf();
        fs::create_dir_all(&root).map_err(|e| AppError::storage(format!("Failed to create data directory {}", root.display()), e))?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn slot_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{}.json", key))
    }
}

impl StorageBackend for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>, AppError> {
        let path = self.slot_path(key);
        match fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(AppError::storage(format!("Failed to read slot {}", key), e)),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), AppError> {
        let write_error = |e| AppError::storage(format!("Failed to write slot {}", key), e);

        let mut tmp = NamedTempFile::new_in(&self.root).map_err(write_error)?;
        tmp.write_all(value.as_bytes()).map_err(write_error)?;
        tmp.as_file().sync_all().map_err(write_error)?;
        tmp.persist(self.slot_path(key))
            .map_err(|e| AppError::storage(format!("Failed to replace slot {}", key), e.error))?;
        debug!(slot = %key, bytes = value.len(), "slot written");
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), AppError> {
        match fs::remove_file(self.slot_path(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(AppError::storage(format!("Failed to remove slot {}", key), e)),
        }
    }
}
