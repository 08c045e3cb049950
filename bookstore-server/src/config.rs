//! Server configuration read from the environment

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::path::PathBuf;

const DEFAULT_ADDR: &str = "127.0.0.1:3000";
const DEFAULT_STORAGE_PATH: &str = "./bookstore_data";

/// Where the catalog is kept
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    /// `catalog.json` under the storage path
    File,
    /// Process memory; lost on restart
    Memory,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub addr: SocketAddr,
    pub storage: StorageBackend,
    pub storage_path: PathBuf,
    /// Comma-separated list of origins, or "*" for any
    pub cors_origins: Option<String>,
}

impl ServerConfig {
    /// Read configuration from `BOOKSTORE_*` environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable source
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let addr = lookup("BOOKSTORE_ADDR").unwrap_or_else(|| DEFAULT_ADDR.to_string());
        let addr = addr
            .parse()
            .with_context(|| format!("Invalid BOOKSTORE_ADDR: {}", addr))?;

        let storage = match lookup("BOOKSTORE_STORAGE").as_deref() {
            None | Some("file") => StorageBackend::File,
            Some("memory") => StorageBackend::Memory,
            Some(other) => anyhow::bail!("Invalid BOOKSTORE_STORAGE: {} (expected file or memory)", other),
        };

        let storage_path = lookup("BOOKSTORE_STORAGE_PATH")
            .unwrap_or_else(|| DEFAULT_STORAGE_PATH.to_string())
            .into();

        Ok(Self {
            addr,
            storage,
            storage_path,
            cors_origins: lookup("BOOKSTORE_CORS_ORIGINS"),
        })
    }

    /// Path of the catalog file for the file backend
    pub fn catalog_path(&self) -> PathBuf {
        self.storage_path.join("catalog.json")
    }
}
