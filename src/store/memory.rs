//! In-memory store for tests and hermetic embedding

use std::collections::HashMap;
use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use parking_lot::Mutex;

use super::{ContentHash, ContentStore};

/// Keeps units in memory and hands out `mem://` pseudo-paths.
///
/// Clones share state, so a test can keep a handle while the rule owns the
/// boxed store. The write counter makes cache-hit behavior observable:
/// identical invocations must persist exactly once.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Arc<Mutex<HashMap<ContentHash, String>>>,
    writes: Arc<AtomicUsize>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of `put` calls seen so far
    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::Relaxed)
    }

    /// Stored content for a hash, if any
    pub fn content(&self, hash: &ContentHash) -> Option<String> {
        self.entries.lock().get(hash).cloned()
    }

    fn path_for(hash: &ContentHash) -> PathBuf {
        PathBuf::from(format!("mem://{hash}-template-compiled"))
    }
}

impl ContentStore for MemoryStore {
    fn get(&self, hash: &ContentHash) -> Option<PathBuf> {
        self.entries
            .lock()
            .contains_key(hash)
            .then(|| Self::path_for(hash))
    }

    fn put(&self, hash: &ContentHash, content: &str) -> io::Result<PathBuf> {
        self.entries.lock().insert(*hash, content.to_string());
        self.writes.fetch_add(1, Ordering::Relaxed);
        Ok(Self::path_for(hash))
    }
}
