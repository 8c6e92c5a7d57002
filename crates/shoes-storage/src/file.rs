//! # File-Backed Store
//!
//! A `SnapshotStore` that keeps one file per key under a directory,
//! defaulting to the platform app data directory.
//!
//! ## File Placement
//! ```text
//! Linux:   ~/.local/share/rocketshoes/snapshots/
//! macOS:   ~/Library/Application Support/com.rocketshoes.cart/snapshots/
//! Windows: %APPDATA%/rocketshoes/cart/data/snapshots/
//! ```
//!
//! Keys are namespaced strings like `@RocketShoes:cart`; characters that
//! are not filename-safe are mapped to `_` before use.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{StorageError, StorageResult};
use crate::store::SnapshotStore;

/// File-per-key snapshot store.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Creates a store rooted at `dir`, creating the directory if needed.
    pub fn new(dir: impl Into<PathBuf>) -> StorageResult<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(FileStore { dir })
    }

    /// Creates a store under the platform app data directory.
    pub fn open_default() -> StorageResult<Self> {
        let dirs = directories::ProjectDirs::from("com", "rocketshoes", "cart")
            .ok_or(StorageError::NoDataDir)?;
        Self::new(dirs.data_dir().join("snapshots"))
    }

    /// Maps a namespaced key to a filename-safe path within the store.
    fn path_for(&self, key: &str) -> PathBuf {
        let name: String = key
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() || c == '.' || c == '-' { c } else { '_' })
            .collect();
        self.dir.join(name)
    }

    /// The directory this store writes into.
    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl SnapshotStore for FileStore {
    fn read(&self, key: &str) -> StorageResult<Option<Vec<u8>>> {
        let path = self.path_for(key);
        match fs::read(&path) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn write(&self, key: &str, bytes: &[u8]) -> StorageResult<()> {
        let path = self.path_for(key);
        debug!(?path, len = bytes.len(), "Writing snapshot");

        // write to a sibling temp file, then rename, so a crash mid-write
        // never leaves a truncated snapshot behind
        let tmp = path.with_extension("tmp");
        fs::write(&tmp, bytes)?;
        fs::rename(&tmp, &path)?;
        Ok(())
    }
}
