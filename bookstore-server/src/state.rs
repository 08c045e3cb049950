//! Application state

use crate::config::{ServerConfig, StorageBackend};
use anyhow::{Context, Result};
use bookstore_core::storage::{BookRepository, JsonFileRepository, MemoryRepository};
use bookstore_core::CatalogService;
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub catalog: CatalogService,
}

impl AppState {
    pub fn new(catalog: CatalogService) -> Self {
        Self { catalog }
    }

    /// State backed by an empty in-memory catalog
    pub fn in_memory() -> Self {
        Self::new(CatalogService::new(Arc::new(MemoryRepository::new())))
    }

    /// Create state from configuration, opening the configured repository
    pub async fn from_config(config: &ServerConfig) -> Result<Self> {
        let repository: Arc<dyn BookRepository> = match config.storage {
            StorageBackend::Memory => {
                tracing::warn!("Using in-memory storage, catalog will not survive a restart");
                Arc::new(MemoryRepository::new())
            }
            StorageBackend::File => {
                let path = config.catalog_path();
                tracing::info!(path = %path.display(), "Opening catalog");
                let repo = JsonFileRepository::open(&path)
                    .await
                    .with_context(|| format!("Failed to open catalog at {}", path.display()))?;
                Arc::new(repo)
            }
        };
        Ok(Self::new(CatalogService::new(repository)))
    }
}
