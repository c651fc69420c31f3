//! Synthesizer contract and the synthesized analysis unit

mod error;
mod line_map;

pub use error::SynthesisError;
pub use line_map::{LineMap, LineOrigin};

use std::path::Path;

use indexmap::IndexMap;

use crate::invocation::ComponentBinding;

/// Compilable host-language source synthesized from one template plus its
/// bindings, together with the mapping back to template lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SynthesizedUnit {
    source_text: String,
    line_map: LineMap,
}

impl SynthesizedUnit {
    /// Build a unit, enforcing that the line map covers every source line.
    ///
    /// Every line is either mapped to a template line or explicitly marked
    /// as scaffolding; a map that covers more or fewer lines than the
    /// source is a synthesizer defect and fails construction.
    pub fn new(
        source_text: impl Into<String>,
        line_map: LineMap,
    ) -> Result<Self, SynthesisError> {
        let source_text = source_text.into();
        let actual = source_text.lines().count();
        if line_map.len() != actual {
            return Err(SynthesisError::IncompleteLineMap {
                mapped: line_map.len(),
                actual,
            });
        }
        Ok(Self {
            source_text,
            line_map,
        })
    }

    /// Full source of the temporary analysis unit
    pub fn source_text(&self) -> &str {
        &self.source_text
    }

    /// Synthetic-line → template-line translation table
    pub fn line_map(&self) -> &LineMap {
        &self.line_map
    }
}

/// Turns a template into an independently analyzable source unit.
///
/// Implementations resolve includes, layouts and inherited blocks
/// transitively, declare one host variable per parameter binding typed with
/// its inferred type (falling back to the universal type, never omitting
/// the variable), declare component bindings as typed pseudo-members, and
/// wrap everything in the scaffolding needed to analyze the unit on its
/// own. Synthesis is deterministic: identical inputs yield a byte-identical
/// unit and line map.
pub trait TemplateSynthesizer<S> {
    /// Synthesize `template_file_path` with the given bindings.
    ///
    /// Any unresolvable reference — missing file, broken include chain,
    /// malformed template syntax — is a hard failure; no partial unit is
    /// returned.
    fn synthesize(
        &self,
        template_file_path: &Path,
        parameters: &IndexMap<String, String>,
        scope: &S,
        components: &[ComponentBinding],
    ) -> Result<SynthesizedUnit, SynthesisError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_rejects_incomplete_line_map() {
        let map = LineMap::new(vec![LineOrigin::Scaffolding]);
        let result = SynthesizedUnit::new("<?php\n$user = null;\n", map);

        match result {
            Err(SynthesisError::IncompleteLineMap { mapped, actual }) => {
                assert_eq!(mapped, 1);
                assert_eq!(actual, 2);
            }
            other => panic!("expected IncompleteLineMap, got {other:?}"),
        }
    }

    #[test]
    fn test_unit_accepts_total_line_map() {
        let map = LineMap::new(vec![LineOrigin::Scaffolding, LineOrigin::Template(1)]);
        let unit = SynthesizedUnit::new("<?php\necho $greeting;\n", map).unwrap();

        assert_eq!(unit.line_map().len(), 2);
        assert_eq!(unit.line_map().template_line(2), Some(1));
    }
}
