//! Filesystem store in the platform temp directory

use std::fs;
use std::io;
use std::path::PathBuf;
use std::process;

use log::trace;

use super::{ContentHash, ContentStore};

/// Persists units as `<hash>-template-compiled.<ext>` files.
///
/// Writes land in a process-private sibling first and are renamed into
/// place, so a concurrent reader never observes a partially written unit.
/// Concurrent writers racing on the same hash are harmless: content is
/// deterministic from the hash inputs, so last-writer-wins.
#[derive(Debug, Clone)]
pub struct TempFileStore {
    dir: PathBuf,
    extension: String,
}

impl TempFileStore {
    /// Store in the platform temp directory
    pub fn new() -> Self {
        Self::in_dir(std::env::temp_dir())
    }

    /// Store in a specific directory
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            extension: "php".to_string(),
        }
    }

    /// Override the file extension of persisted units
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    fn path_for(&self, hash: &ContentHash) -> PathBuf {
        self.dir
            .join(format!("{hash}-template-compiled.{}", self.extension))
    }
}

impl Default for TempFileStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ContentStore for TempFileStore {
    fn get(&self, hash: &ContentHash) -> Option<PathBuf> {
        let path = self.path_for(hash);
        path.is_file().then_some(path)
    }

    fn put(&self, hash: &ContentHash, content: &str) -> io::Result<PathBuf> {
        let path = self.path_for(hash);
        let staging = path.with_extension(format!("{}.{}", self.extension, process::id()));

        fs::write(&staging, content)?;
        fs::rename(&staging, &path)?;
        trace!("persisted synthesized unit at {}", path.display());
        Ok(path)
    }
}
