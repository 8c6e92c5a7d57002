//! # Domain Types
//!
//! Core domain types used throughout the cart engine.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐         ┌─────────────────┐                       │
//! │  │    Product      │         │     Stock       │                       │
//! │  │  ─────────────  │         │  ─────────────  │                       │
//! │  │  id (u64)       │◄───────►│  id (u64)       │  same identifier      │
//! │  │  title          │         │  amount (i64)   │  space                │
//! │  │  price_cents    │         └─────────────────┘                       │
//! │  │  image          │                                                    │
//! │  └─────────────────┘                                                    │
//! │                                                                         │
//! │  Product is catalog metadata; Stock is the authoritative remote        │
//! │  count at query time. The engine never caches Stock beyond the         │
//! │  single request that used it.                                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};

// =============================================================================
// Product
// =============================================================================

/// A product from the catalog.
///
/// Metadata is opaque to the cart rules: the engine only keys on `id`.
/// Prices are integer cents (never floats).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique product identifier.
    pub id: u64,

    /// Display name shown in the cart.
    pub title: String,

    /// Price in cents (smallest currency unit).
    pub price_cents: i64,

    /// Image URL for display.
    pub image: String,
}

// =============================================================================
// Stock
// =============================================================================

/// The remote stock count for a product at query time.
///
/// This is authoritative only for the instant the inventory service
/// answered; it can change remotely at any moment afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stock {
    /// Product identifier this count belongs to.
    pub id: u64,

    /// Units available (>= 0).
    pub amount: i64,
}

impl Stock {
    /// Returns true if at least one unit is available.
    #[inline]
    pub const fn is_available(&self) -> bool {
        self.amount > 0
    }

    /// Returns true if the requested quantity can be satisfied.
    #[inline]
    pub const fn covers(&self, requested: i64) -> bool {
        self.amount >= requested
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
