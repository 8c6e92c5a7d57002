//! # Session Error Type
//!
//! Unified error type for the cart session's operation boundary.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the Cart Engine                        │
//! │                                                                         │
//! │  CartError (shoes-core) ──┐                                            │
//! │                           ├──► SessionError ──► caller (typed)         │
//! │  InventoryError ──────────┘         │                                   │
//! │                                     └─────────► Notifier (message)     │
//! │                                                                         │
//! │  Every operation surfaces failures BOTH ways: a tagged error for       │
//! │  programmatic callers and a user-facing message through the Notifier.  │
//! │  Either channel can be ignored; they always agree.                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

use shoes_core::CartError;
use shoes_inventory::InventoryError;

/// What a mutation operation can fail with.
///
/// `Cart` variants are validation failures detected before any commit;
/// `Inventory` variants are collaborator failures. In both cases the
/// cart snapshot is unchanged.
#[derive(Debug, Error)]
pub enum SessionError {
    /// A cart rule rejected the mutation.
    #[error(transparent)]
    Cart(#[from] CartError),

    /// The inventory service could not be consulted.
    #[error(transparent)]
    Inventory(#[from] InventoryError),
}

impl SessionError {
    /// Returns the validation error, if this is one.
    pub fn as_cart_error(&self) -> Option<&CartError> {
        match self {
            SessionError::Cart(e) => Some(e),
            SessionError::Inventory(_) => None,
        }
    }
}

/// Convenience type alias for Results with SessionError.
pub type SessionResult<T> = Result<T, SessionError>;
