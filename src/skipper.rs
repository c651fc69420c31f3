//! Denylist filtering of synthesis artifacts

use log::trace;
use regex::Regex;

use crate::analysis::Diagnostic;

/// Message patterns dropped unconditionally as synthesis artifacts.
///
/// The one default entry matches the conventional compiled-template wrapper
/// identifier; diagnostics naming it describe the scaffolding, not the
/// template.
pub const DEFAULT_SKIP_PATTERNS: &[&str] = &["DummyTemplateClass"];

/// Drops diagnostics whose message matches a known-spurious pattern.
///
/// The patterns are ordered data, not code: hosts whose analyzer names its
/// synthetic classes differently extend the list through configuration.
#[derive(Debug)]
pub struct ErrorSkipper {
    patterns: Vec<Regex>,
}

impl Default for ErrorSkipper {
    fn default() -> Self {
        Self::new(DEFAULT_SKIP_PATTERNS).expect("default patterns compile")
    }
}

impl ErrorSkipper {
    /// Compile a skipper from pattern strings
    pub fn new<P: AsRef<str>>(patterns: &[P]) -> Result<Self, regex::Error> {
        let patterns = patterns
            .iter()
            .map(|pattern| Regex::new(pattern.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { patterns })
    }

    /// Build from already compiled patterns
    pub fn from_patterns(patterns: Vec<Regex>) -> Self {
        Self { patterns }
    }

    /// Remove known-spurious diagnostics, regardless of their line
    pub fn skip(&self, diagnostics: Vec<Diagnostic>) -> Vec<Diagnostic> {
        diagnostics
            .into_iter()
            .filter(|diagnostic| {
                let artifact = self
                    .patterns
                    .iter()
                    .any(|pattern| pattern.is_match(&diagnostic.message));
                if artifact {
                    trace!("skipping scaffolding artifact: {}", diagnostic.message);
                }
                !artifact
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skips_matching_messages_on_any_line() {
        let skipper = ErrorSkipper::new(DEFAULT_SKIP_PATTERNS).unwrap();
        let diagnostics = vec![
            Diagnostic::error("Class DummyTemplateClass not found.", 1),
            Diagnostic::error("Call to an undefined method getName().", 1),
            Diagnostic::error("Instantiated class DummyTemplateClass is abstract.", 40),
        ];

        let kept = skipper.skip(diagnostics);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].message, "Call to an undefined method getName().");
    }

    #[test]
    fn test_empty_denylist_keeps_everything() {
        let skipper = ErrorSkipper::new::<&str>(&[]).unwrap();
        let diagnostics = vec![Diagnostic::error("anything", 1)];

        assert_eq!(skipper.skip(diagnostics.clone()), diagnostics);
    }

    #[test]
    fn test_invalid_pattern_is_reported() {
        assert!(ErrorSkipper::new(&["(unclosed"]).is_err());
    }
}
