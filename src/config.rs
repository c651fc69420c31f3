//! Rule configuration

use std::path::PathBuf;

use thiserror::Error;

use crate::registry::TemplateRuleRegistry;
use crate::skipper::DEFAULT_SKIP_PATTERNS;

/// Configuration options for the template check rule
#[derive(Debug, Clone)]
pub struct TemplateCheckConfig {
    /// Memoize analyzer output per distinct invocation
    pub enable_diagnostics_cache: bool,
    /// Directory for persisted units; platform temp dir when unset
    pub temp_dir: Option<PathBuf>,
    /// File extension of persisted units
    pub temp_file_extension: String,
    /// Denylist of message patterns dropped as synthesis artifacts
    pub skip_patterns: Vec<String>,
    /// Analyzer rule identifiers enabled against synthetic units
    pub rule_identifiers: Vec<String>,
}

impl Default for TemplateCheckConfig {
    fn default() -> Self {
        Self {
            enable_diagnostics_cache: true,
            temp_dir: None,
            temp_file_extension: "php".to_string(),
            skip_patterns: DEFAULT_SKIP_PATTERNS
                .iter()
                .map(|pattern| pattern.to_string())
                .collect(),
            rule_identifiers: TemplateRuleRegistry::DEFAULT_IDENTIFIERS
                .iter()
                .map(|identifier| identifier.to_string())
                .collect(),
        }
    }
}

/// Errors surfaced while building a rule from configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A denylist entry is not a valid regular expression
    #[error("invalid skip pattern {pattern:?}: {source}")]
    InvalidSkipPattern {
        /// The offending pattern
        pattern: String,
        /// Compilation failure
        source: regex::Error,
    },

    /// The builder was finished without a synthesizer
    #[error("no template synthesizer configured")]
    MissingSynthesizer,

    /// The builder was finished without an analyzer
    #[error("no file analyzer configured")]
    MissingAnalyzer,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = TemplateCheckConfig::default();

        assert!(config.enable_diagnostics_cache);
        assert_eq!(config.temp_file_extension, "php");
        assert_eq!(config.skip_patterns, ["DummyTemplateClass"]);
        assert!(
            config
                .rule_identifiers
                .iter()
                .any(|identifier| identifier == "method.notFound")
        );
    }
}
