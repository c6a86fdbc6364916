use crate::error::app_error::AppError;
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_KEY_PREFIX: &str = "smile_";

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct Config {
    pub storage: StorageConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackendKind {
    #[default]
    File,
    Memory,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct StorageConfig {
    pub backend: StorageBackendKind,
    /// Directory holding one JSON file per slot. Only used by the file backend.
    pub data_dir: PathBuf,
    pub key_prefix: String,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct LoggingConfig {
    pub level: String,
    pub json_format: bool,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackendKind::File,
            data_dir: PathBuf::from("data"),
            key_prefix: DEFAULT_KEY_PREFIX.to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json_format: false,
        }
    }
}

impl Config {
    /// Load configuration from multiple sources in priority order:
    /// 1. Built-in defaults
    /// 2. Smile.toml (if present)
    /// 3. Environment variables prefixed with SMILE_ (e.g. SMILE_STORAGE_DATA_DIR)
    pub fn load() -> Result<Self, AppError> {
        Ok(Self::figment().extract()?)
    }

    fn figment() -> Figment {
        Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file("Smile.toml"))
            // SMILE_STORAGE_DATA_DIR -> storage.data_dir: only the first underscore separates the section.
            .merge(Env::prefixed("SMILE_").map(|key| key.as_str().replacen('_', ".", 1).into()))
    }
}
