//! # shoes-storage: Snapshot Persistence
//!
//! Durable key-value byte storage for cart snapshots.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Snapshot Persistence Flow                            │
//! │                                                                         │
//! │  CartSession (shoes-cart)                                              │
//! │       │  write("@RocketShoes:cart", json bytes) on every commit        │
//! │       │  read("@RocketShoes:cart") once at hydration                   │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  shoes-storage (THIS CRATE)                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │ SnapshotStore │    │   FileStore   │    │ MemoryStore  │  │   │
//! │  │   │  (trait seam) │◄───│ (app data dir)│    │ (tests)      │  │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘  │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ~/.local/share/rocketshoes/snapshots/_RocketShoes_cart (Linux)        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`store`] - The `SnapshotStore` trait
//! - [`file`] - File-backed store under the platform app data directory
//! - [`memory`] - In-memory store for tests and ephemeral sessions
//! - [`error`] - Storage error types

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod file;
pub mod memory;
pub mod store;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{StorageError, StorageResult};
pub use file::FileStore;
pub use memory::MemoryStore;
pub use store::SnapshotStore;
