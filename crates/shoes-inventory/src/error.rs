//! # Inventory Error Types
//!
//! Error types for remote inventory lookups.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  Transport / status / decode error (reqwest::Error)                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  InventoryError (this module) ← adds context and categorization        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  SessionError (shoes-cart) ← collapsed to one generic per-operation    │
//! │       │                       message for the shopper                   │
//! │       ▼                                                                 │
//! │  Notifier displays "Failed to add product" etc.                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

/// Remote inventory lookup failures.
///
/// The cart session treats every variant the same way (no state change,
/// one generic notification); the distinction exists for logs and tests.
#[derive(Debug, Error)]
pub enum InventoryError {
    /// Transport failure, non-success status, or undecodable payload.
    ///
    /// reqwest folds all three into its error type; `error_for_status`
    /// turns non-2xx responses into this variant as well.
    #[error("Inventory request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The configured base URL (or a joined endpoint) is not a valid URL.
    #[error("Invalid inventory endpoint: {0}")]
    Endpoint(#[from] url::ParseError),

    /// Reading the config file failed.
    #[error("Failed to read inventory config: {0}")]
    Io(#[from] std::io::Error),

    /// The config file is not valid TOML.
    #[error("Failed to parse inventory config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// The configuration is structurally valid but semantically wrong.
    #[error("Invalid inventory config: {0}")]
    InvalidConfig(String),
}

/// Convenience type alias for Results with InventoryError.
pub type InventoryResult<T> = Result<T, InventoryError>;
