//! Contract for the external general-purpose analyzer

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::registry::TemplateRuleRegistry;

/// Diagnostic severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Severity {
    /// May indicate a problem but does not prevent rendering
    Warning,
    /// Prevents successful rendering
    Error,
}

impl Default for Severity {
    fn default() -> Self {
        Severity::Error
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// One raw finding from the analyzer, in synthetic-unit coordinates
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Human-readable message
    pub message: String,
    /// 1-based line in the synthesized unit
    pub line: u32,
    /// Analyzer rule identifier, e.g. `method.notFound`
    pub identifier: Option<String>,
    /// Severity of the finding
    pub severity: Severity,
}

impl Diagnostic {
    /// Create an error-severity diagnostic
    pub fn error(message: impl Into<String>, line: u32) -> Self {
        Self {
            message: message.into(),
            line,
            identifier: None,
            severity: Severity::Error,
        }
    }

    /// Create a warning-severity diagnostic
    pub fn warning(message: impl Into<String>, line: u32) -> Self {
        Self {
            severity: Severity::Warning,
            ..Self::error(message, line)
        }
    }

    /// Attach the analyzer rule identifier
    pub fn with_identifier(mut self, identifier: impl Into<String>) -> Self {
        self.identifier = Some(identifier.into());
        self
    }
}

/// The external analyzer boundary.
///
/// The analyzer is handed a persisted synthesized unit and the restricted
/// rule registry; it returns its findings in synthetic-unit coordinates.
/// Internal analyzer failures are opaque to this crate and propagate to
/// the host's own fatal-error path.
pub trait FileAnalyzer {
    /// Analyze one persisted unit with the given rule subset
    fn analyze(
        &self,
        file_path: &Path,
        rules: &TemplateRuleRegistry,
    ) -> anyhow::Result<Vec<Diagnostic>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagnostic_builders() {
        let diagnostic = Diagnostic::error("Call to an undefined method getName().", 4)
            .with_identifier("method.notFound");

        assert_eq!(diagnostic.line, 4);
        assert_eq!(diagnostic.severity, Severity::Error);
        assert_eq!(diagnostic.identifier.as_deref(), Some("method.notFound"));

        let warning = Diagnostic::warning("unused variable $tmp", 2);
        assert_eq!(warning.severity, Severity::Warning);
    }

    #[test]
    fn test_severity_ordering() {
        assert!(Severity::Error > Severity::Warning);
        assert_eq!(Severity::default(), Severity::Error);
    }
}
