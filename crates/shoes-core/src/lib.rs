//! # shoes-core: Pure Cart Logic for the RocketShoes Cart Engine
//!
//! This crate is the **heart** of the cart engine. It contains the cart
//! rules as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     RocketShoes Cart Engine                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    shoes-cart (session)                         │   │
//! │  │    add_product ──► remove_product ──► update_product_amount    │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ shoes-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌────────────────┐  ┌────────────────────┐   │   │
//! │  │   │   types   │  │      cart      │  │       error        │   │   │
//! │  │   │  Product  │  │  Cart          │  │  CartError         │   │   │
//! │  │   │  Stock    │  │  CartEntry     │  │  CoreResult        │   │   │
//! │  │   └───────────┘  └────────────────┘  └────────────────────┘   │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO NETWORK • NO STORAGE • PURE FUNCTIONS            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, Stock)
//! - [`cart`] - The Cart snapshot and its pure operations
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Immutable Snapshots**: every cart operation returns a wholly new
//!    `Cart`; the previous value is never touched
//! 2. **No I/O**: network, file system and storage access are FORBIDDEN here
//! 3. **Integer Money**: prices are cents (i64), never floats
//! 4. **Explicit Errors**: all failures are typed, never strings or panics

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod error;
pub mod types;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use shoes_core::Cart` instead of
// `use shoes_core::cart::Cart`

pub use cart::{Cart, CartEntry};
pub use error::{CartError, CoreResult};
pub use types::{Product, Stock};
