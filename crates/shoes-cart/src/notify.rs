//! # Notifier Seam
//!
//! The session reports user-facing outcomes through this seam instead of
//! talking to any concrete toast/notification mechanism.
//!
//! ## Contract
//! `notify(message, severity)` - fire and forget; the session never
//! consumes a return value and never fails because a notifier did.

use tracing::{info, warn};

// =============================================================================
// Severity
// =============================================================================

/// How a message should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Neutral confirmation ("Added to cart").
    Info,

    /// Something the shopper should act on or retry.
    Error,
}

// =============================================================================
// Notifier Trait
// =============================================================================

/// Sink for user-facing messages.
///
/// Implementations decide presentation: a toast, a status line, a log.
/// The session guarantees exactly one notification per failed mutation
/// and at most one success notification per add.
pub trait Notifier: Send + Sync {
    /// Presents `message` to the shopper.
    fn notify(&self, message: &str, severity: Severity);
}

// =============================================================================
// TracingNotifier
// =============================================================================

/// A notifier that writes messages to the tracing pipeline.
///
/// Useful for headless consumers (the demo binary) and as a default when
/// no UI is attached.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, message: &str, severity: Severity) {
        match severity {
            Severity::Info => info!(target: "shoes_cart::notify", "{}", message),
            Severity::Error => warn!(target: "shoes_cart::notify", "{}", message),
        }
    }
}
