//! # Inventory Client Configuration
//!
//! Configuration for the HTTP inventory client.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     ROCKETSHOES_API_URL=http://shop.example:3333                       │
//! │     ROCKETSHOES_API_TIMEOUT_SECS=10                                    │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     ~/.config/rocketshoes/inventory.toml (Linux)                       │
//! │     ~/Library/Application Support/com.rocketshoes.cart/... (macOS)     │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     http://localhost:3333 (the development catalog server)             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! # inventory.toml
//! base_url = "http://localhost:3333"
//! connect_timeout_secs = 10
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::{debug, info, warn};
use url::Url;

use crate::error::{InventoryError, InventoryResult};

// =============================================================================
// Inventory Configuration
// =============================================================================

/// Configuration for the HTTP inventory client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventoryConfig {
    /// Base URL of the inventory service.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Connection timeout (seconds).
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_secs: u64,
}

fn default_base_url() -> String {
    // json-server development backend
    "http://localhost:3333".to_string()
}

fn default_connect_timeout() -> u64 {
    10
}

impl Default for InventoryConfig {
    fn default() -> Self {
        InventoryConfig {
            base_url: default_base_url(),
            connect_timeout_secs: default_connect_timeout(),
        }
    }
}

impl InventoryConfig {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (inventory.toml)
    /// 3. Environment variables
    pub fn load(config_path: Option<PathBuf>) -> InventoryResult<Self> {
        let mut config = Self::default();

        if let Some(path) = config_path.or_else(Self::default_config_path) {
            if path.exists() {
                info!(?path, "Loading inventory config from file");
                let contents = std::fs::read_to_string(&path)?;
                config = toml::from_str(&contents)?;
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Loads config or returns default if load fails.
    pub fn load_or_default(config_path: Option<PathBuf>) -> Self {
        Self::load(config_path).unwrap_or_else(|e| {
            warn!("Failed to load inventory config: {}. Using defaults.", e);
            Self::default()
        })
    }

    /// Validates the configuration.
    pub fn validate(&self) -> InventoryResult<()> {
        let url = Url::parse(&self.base_url)?;

        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(InventoryError::InvalidConfig(format!(
                "Base URL must be http or https, got: {}",
                self.base_url
            )));
        }

        if self.connect_timeout_secs == 0 {
            return Err(InventoryError::InvalidConfig(
                "connect_timeout_secs must be greater than 0".into(),
            ));
        }

        Ok(())
    }

    /// Applies environment variable overrides.
    fn apply_env_overrides(&mut self) {
        if let Ok(url) = std::env::var("ROCKETSHOES_API_URL") {
            debug!(url = %url, "Overriding inventory base URL from environment");
            self.base_url = url;
        }

        if let Ok(timeout) = std::env::var("ROCKETSHOES_API_TIMEOUT_SECS") {
            if let Ok(secs) = timeout.parse::<u64>() {
                self.connect_timeout_secs = secs;
            }
        }
    }

    /// Returns the default config file path.
    fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "rocketshoes", "cart")
            .map(|dirs| dirs.config_dir().join("inventory.toml"))
    }
}
