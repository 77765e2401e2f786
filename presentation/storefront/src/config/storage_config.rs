use std::env;
use std::path::PathBuf;

use business::domain::cart::store::DEFAULT_STORAGE_KEY;

/// Where the cart is mirrored between sessions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageBackend {
    File,
    Memory,
}

/// Storage configuration for the cart slot
#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub backend: StorageBackend,
    pub data_dir: PathBuf,
    pub cart_key: String,
}

impl StorageConfig {
    /// Load storage configuration from environment variables
    ///
    /// Environment variables:
    /// - STOREFRONT_STORAGE: "file" or "memory" (default: "file")
    /// - STOREFRONT_DATA_DIR: Directory for file storage (default: ".storefront")
    /// - CART_STORAGE_KEY: Key of the cart slot (default: "cartItems")
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let backend = match lookup("STOREFRONT_STORAGE").as_deref() {
            Some("memory") => StorageBackend::Memory,
            _ => StorageBackend::File,
        };
        let data_dir = lookup("STOREFRONT_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(".storefront"));
        let cart_key = lookup("CART_STORAGE_KEY")
            .filter(|key| !key.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_STORAGE_KEY.to_string());

        Self {
            backend,
            data_dir,
            cart_key,
        }
    }
}
