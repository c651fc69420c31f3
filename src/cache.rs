//! Memoized analyzer output keyed by invocation content hash

use dashmap::DashMap;

use crate::analysis::Diagnostic;
use crate::store::ContentHash;

/// Per-invocation memo of filtered analyzer output.
///
/// Synthesis is deterministic, so two call sites rendering the same
/// template with identically typed bindings produce the same unit — the
/// analyzer only needs to run once per distinct content hash. Entries hold
/// post-denylist, pre-reconciliation diagnostics so each call site still
/// gets its own attribution. DashMap keeps the rule reentrant when the
/// host traverses files in parallel.
#[derive(Debug, Default)]
pub struct DiagnosticsCache {
    diagnostics: DashMap<ContentHash, Vec<Diagnostic>>,
}

impl DiagnosticsCache {
    /// Create an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached diagnostics for a hash
    pub fn get(&self, hash: &ContentHash) -> Option<Vec<Diagnostic>> {
        self.diagnostics.get(hash).map(|entry| entry.clone())
    }

    /// Cache diagnostics for a hash
    pub fn insert(&self, hash: ContentHash, diagnostics: Vec<Diagnostic>) {
        self.diagnostics.insert(hash, diagnostics);
    }

    /// Number of memoized invocations
    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    /// Whether the cache is empty
    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Drop all entries
    pub fn clear(&self) {
        self.diagnostics.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::invocation::RenderInvocation;
    use indexmap::IndexMap;

    #[test]
    fn test_round_trip() {
        let cache = DiagnosticsCache::new();
        let invocation = RenderInvocation::new("widget.tpl", IndexMap::new());
        let hash = ContentHash::of(&invocation, &[]);

        assert!(cache.get(&hash).is_none());

        let diagnostics = vec![Diagnostic::error("boom", 2)];
        cache.insert(hash, diagnostics.clone());

        assert_eq!(cache.get(&hash), Some(diagnostics));
        assert_eq!(cache.len(), 1);

        cache.clear();
        assert!(cache.is_empty());
    }
}
