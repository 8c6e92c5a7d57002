//! # shoes-inventory: Remote Inventory Client
//!
//! This crate provides the cart engine's view of the remote inventory
//! service: two typed, fallible lookups keyed by product identifier.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Inventory Lookup Flow                               │
//! │                                                                         │
//! │  CartSession (shoes-cart)                                              │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  shoes-inventory (THIS CRATE)                   │   │
//! │  │                                                                 │   │
//! │  │   ┌────────────────┐   ┌────────────────┐   ┌──────────────┐  │   │
//! │  │   │ InventoryClient│   │ HttpInventory  │   │ Inventory    │  │   │
//! │  │   │ (trait seam)   │◄──│ Client         │   │ Config       │  │   │
//! │  │   │                │   │ (reqwest)      │   │ (toml + env) │  │   │
//! │  │   └────────────────┘   └────────────────┘   └──────────────┘  │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  GET {base}/products/{id}    GET {base}/stock/{id}                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`client`] - The `InventoryClient` trait and its HTTP implementation
//! - [`config`] - Client configuration (TOML file + env overrides)
//! - [`error`] - Inventory error types
//!
//! ## Usage
//!
//! ```rust,ignore
//! use shoes_inventory::{HttpInventoryClient, InventoryClient, InventoryConfig};
//!
//! let config = InventoryConfig::load_or_default(None);
//! let client = HttpInventoryClient::new(&config)?;
//!
//! let product = client.fetch_product(1).await?;
//! let stock = client.fetch_stock(1).await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod client;
pub mod config;
pub mod error;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use client::{HttpInventoryClient, InventoryClient};
pub use config::InventoryConfig;
pub use error::{InventoryError, InventoryResult};
