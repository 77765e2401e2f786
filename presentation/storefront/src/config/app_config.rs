use std::env;

use super::storage_config::StorageConfig;

pub struct AppConfig {
    pub storage: StorageConfig,
    pub log_filter: String,
}

impl AppConfig {
    /// RUST_LOG takes precedence over STOREFRONT_LOG (default: "info").
    pub fn from_env() -> Self {
        Self {
            storage: StorageConfig::from_env(),
            log_filter: env::var("STOREFRONT_LOG").unwrap_or_else(|_| "info".to_string()),
        }
    }
}
