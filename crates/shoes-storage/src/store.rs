//! # SnapshotStore Trait
//!
//! The key-value byte store contract.

use crate::error::StorageResult;

/// Durable key-value byte storage for serialized snapshots.
///
/// ## Contract
/// - `read` returns the last bytes written under the key, or `None` if
///   the key has never been written
/// - `write` replaces the key's bytes; callers decide how to react to
///   failures (the cart session logs and moves on)
///
/// The trait is synchronous on purpose: the session commits in the same
/// synchronous continuation as the validation that produced the snapshot,
/// with no suspension point between the in-memory swap and the write.
pub trait SnapshotStore: Send + Sync {
    /// Reads the last-saved bytes for `key`, if any.
    fn read(&self, key: &str) -> StorageResult<Option<Vec<u8>>>;

    /// Writes `bytes` under `key`, replacing any previous value.
    fn write(&self, key: &str, bytes: &[u8]) -> StorageResult<()>;
}
