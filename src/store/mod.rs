//! Content-addressed storage for synthesized units
//!
//! Identical invocations resolve to identical content, so units are keyed
//! by a hash of their inputs: two call sites rendering the same template
//! with the same bindings share one persisted unit, and repeated runs reuse
//! it as a cache. A hash collision with different content is an accepted
//! risk, as it was with the digest-named temp files this replaces.

mod memory;
mod temp_file;

pub use memory::MemoryStore;
pub use temp_file::TempFileStore;

use std::fmt;
use std::hash::Hasher;
use std::io;
use std::path::PathBuf;

use rustc_hash::FxHasher;
use serde::Serialize;

use crate::invocation::{ComponentBinding, RenderInvocation};

/// Key for one distinct (template path, bindings) combination
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContentHash(u64);

impl ContentHash {
    /// Hash an invocation together with the component bindings in scope.
    ///
    /// The hash input is the canonical JSON form of both, so identical
    /// invocations hash identically across call sites and repeated runs.
    pub fn of(invocation: &RenderInvocation, components: &[ComponentBinding]) -> Self {
        #[derive(Serialize)]
        struct HashInput<'a> {
            invocation: &'a RenderInvocation,
            components: &'a [ComponentBinding],
        }

        let serialized = serde_json::to_string(&HashInput {
            invocation,
            components,
        })
        .expect("invocation value objects serialize infallibly");

        let mut hasher = FxHasher::default();
        hasher.write(serialized.as_bytes());
        Self(hasher.finish())
    }
}

impl fmt::Display for ContentHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:016x}", self.0)
    }
}

/// Storage for synthesized units, keyed by content hash.
///
/// `get` before `put` is the expected call pattern; a `get` hit means the
/// unit is already persisted and the write is skipped entirely.
pub trait ContentStore {
    /// Path of an already persisted unit, if present
    fn get(&self, hash: &ContentHash) -> Option<PathBuf>;

    /// Persist the unit and return its path
    fn put(&self, hash: &ContentHash, content: &str) -> io::Result<PathBuf>;
}
