//! # Storage Error Types
//!
//! Error types for snapshot persistence.
//!
//! The session treats writes as best-effort: these errors are logged at
//! the commit site, never surfaced to the shopper.

use thiserror::Error;

/// Snapshot store failures.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Reading or writing the backing file failed.
    #[error("Snapshot I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// No platform data directory could be resolved for this user.
    #[error("No application data directory available")]
    NoDataDir,

    /// A poisoned lock in the in-memory store.
    #[error("Snapshot store lock poisoned")]
    Poisoned,
}

/// Convenience type alias for Results with StorageError.
pub type StorageResult<T> = Result<T, StorageError>;
