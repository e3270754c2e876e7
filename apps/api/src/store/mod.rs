// Key-value persistence for the editing session.
// Backends: Redis (shared), file (local JSON files), memory (tests, ephemeral runs).

pub mod file;
pub mod memory;
pub mod redis_store;

use std::sync::Arc;

use anyhow::{Context, Result};
use async_trait::async_trait;
use tracing::info;

use crate::config::{Config, StoreBackend};
use crate::errors::AppError;

pub use self::file::FileStore;
pub use self::memory::MemoryStore;
pub use self::redis_store::RedisStore;

/// Key holding the serialized resume document.
pub const DOCUMENT_KEY: &str = "resumeBuilderData";
/// Key holding the chosen template name.
pub const TEMPLATE_KEY: &str = "resumeBuilderTemplate";
/// Key holding the accent color.
pub const ACCENT_KEY: &str = "resumeBuilderAccent";

/// String-to-string store with fixed keys. Values are opaque to the store.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, AppError>;
    async fn set(&self, key: &str, value: &str) -> Result<(), AppError>;
    async fn delete(&self, key: &str) -> Result<(), AppError>;
}

/// Builds the configured store backend.
pub async fn build_store(config: &Config) -> Result<Arc<dyn KeyValueStore>> {
    let store: Arc<dyn KeyValueStore> = match config.store_backend {
        StoreBackend::Memory => {
            info!("Using in-memory store (state is lost on restart)");
            Arc::new(MemoryStore::default())
        }
        StoreBackend::File => {
            let store = FileStore::open(&config.data_dir)
                .await
                .with_context(|| format!("Failed to open data dir {}", config.data_dir.display()))?;
            info!("Using file store at {}", config.data_dir.display());
            Arc::new(store)
        }
        StoreBackend::Redis => {
            let url = config
                .redis_url
                .as_deref()
                .context("REDIS_URL must be set when STORE_BACKEND=redis")?;
            let store = RedisStore::connect(url)
                .await
                .context("Failed to connect to Redis")?;
            info!("Using Redis store");
            Arc::new(store)
        }
    };
    Ok(store)
}
