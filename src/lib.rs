pub mod auth;
pub mod config;
pub mod database;
pub mod error;
pub mod models;
pub mod service;
pub mod storage;

#[cfg(test)]
pub mod test_utils;

pub use config::Config;
pub use database::LocalRepository;
pub use error::app_error::AppError;

use crate::storage::StorageBackend;
use tracing_subscriber::EnvFilter;

pub fn init_tracing(log_level: &str, json_format: bool) {
    // RUST_LOG takes precedence over the configured level, e.g.
    //   RUST_LOG=smile_store::database=debug  - slot reads/writes and misses
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    let subscriber = tracing_subscriber::fmt().with_env_filter(filter).with_target(true).with_line_number(true);

    if json_format {
        subscriber.json().init();
    } else {
        subscriber.init();
    }
}

/// Opens the configured backend and rehydrates the store from it.
pub fn open_repository(config: &Config) -> Result<LocalRepository<Box<dyn StorageBackend>>, AppError> {
    let storage = storage::from_config(&config.storage)?;
    LocalRepository::open_with_prefix(storage, config.storage.key_prefix.clone())
}
