//! # shoes-cart: The Cart State Machine
//!
//! This crate owns the authoritative in-memory cart snapshot and exposes
//! the mutation surface the UI layer is allowed to use.
//!
//! ## Module Organization
//! ```text
//! shoes_cart/
//! ├── lib.rs          ◄─── You are here (exports, snapshot key)
//! ├── session.rs      ◄─── CartSession: the state machine
//! ├── notify.rs       ◄─── Notifier seam (user-facing messages)
//! ├── error.rs        ◄─── SessionError (operation boundary type)
//! └── bin/demo.rs     ◄─── CLI demo standing in for the UI
//! ```
//!
//! ## Mutation Protocol
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     One Mutation, Start to Finish                       │
//! │                                                                         │
//! │  UI calls operation                                                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Lock the cart (held until the operation resolves)                     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Query inventory as needed (product metadata and/or stock)             │
//! │       │                                                                 │
//! │       ├── lookup failed ──► notify, return error, cart untouched       │
//! │       ▼                                                                 │
//! │  Validate against observed stock (pure, shoes-core)                    │
//! │       │                                                                 │
//! │       ├── rule violated ──► notify, return error, cart untouched       │
//! │       ▼                                                                 │
//! │  Commit: swap in the new snapshot, then write it to the store          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Return the new snapshot                                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Because the lock is held across the stock fetch, two calls can never
//! interleave between validation and commit: mutations are serialized.

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod notify;
pub mod session;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{SessionError, SessionResult};
pub use notify::{Notifier, Severity, TracingNotifier};
pub use session::{messages, CartSession, CART_SNAPSHOT_KEY};
