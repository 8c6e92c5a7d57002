//! # Error Types
//!
//! Domain-specific error types for shoes-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  shoes-core errors (this file)                                         │
//! │  └── CartError        - Cart rule violations                           │
//! │                                                                         │
//! │  shoes-inventory errors (separate crate)                               │
//! │  └── InventoryError   - Remote lookup failures                         │
//! │                                                                         │
//! │  shoes-cart errors (session crate)                                     │
//! │  └── SessionError     - What the consumer sees at the boundary         │
//! │                                                                         │
//! │  Flow: CartError / InventoryError → SessionError → Notifier message    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (product id, counts)
//! 3. Errors are enum variants, never String

use thiserror::Error;

// =============================================================================
// Cart Error
// =============================================================================

/// Cart rule violations.
///
/// These are the validation failures of the three mutation operations.
/// They are detected before any snapshot is committed, so the cart is
/// always unchanged when one of these is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CartError {
    /// The product has zero remote stock and is not yet in the cart.
    #[error("Product {product_id} is out of stock")]
    OutOfStock { product_id: u64 },

    /// The requested quantity exceeds the observed remote stock.
    #[error("Insufficient stock for product {product_id}: available {available}, requested {requested}")]
    InsufficientStock {
        product_id: u64,
        available: i64,
        requested: i64,
    },

    /// The requested quantity is not a positive integer.
    #[error("Invalid quantity: {requested}")]
    InvalidAmount { requested: i64 },

    /// The cart has no entry for this product.
    #[error("Product {product_id} is not in the cart")]
    NotInCart { product_id: u64 },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CartError.
pub type CoreResult<T> = Result<T, CartError>;

// =============================================================================
// Unit Tests
// =============================================================================
