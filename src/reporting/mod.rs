//! Reconciled template errors and their construction

mod formatter;

pub use formatter::{ErrorFormatter, Format};

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::analysis::{Diagnostic, Severity};
use crate::synthesis::LineMap;

/// Host call site a template error originated from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallSite {
    /// Host source file containing the render call
    pub file: PathBuf,
    /// 1-based line of the render call
    pub line: u32,
}

impl CallSite {
    /// Create a call site
    pub fn new(file: impl Into<PathBuf>, line: u32) -> Self {
        Self {
            file: file.into(),
            line,
        }
    }
}

/// A diagnostic translated into template coordinates.
///
/// This is the pipeline's only externally visible output: `file` is always
/// the template, `line` is the mapped template line — or the host call line
/// when the diagnostic fell on a scaffolding line, so a synthesis defect
/// still surfaces with degraded attribution instead of being dropped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateError {
    /// Human-readable message
    pub message: String,
    /// Template the error belongs to
    pub file: PathBuf,
    /// Template line, or the host call line for scaffolding diagnostics
    pub line: u32,
    /// Analyzer rule identifier, when the analyzer provided one
    pub identifier: Option<String>,
    /// Severity of the finding
    pub severity: Severity,
    /// Render call this error was discovered through
    pub call_site: CallSite,
}

impl TemplateError {
    /// The single error emitted when a template cannot be synthesized
    pub fn missing_template(template: &Path, call_site: CallSite) -> Self {
        Self {
            message: format!("Template file \"{}\" does not exist", template.display()),
            file: template.to_path_buf(),
            line: call_site.line,
            identifier: Some("template.missing".to_string()),
            severity: Severity::Error,
            call_site,
        }
    }
}

/// What the rule reports, with a before/after sample
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleDefinition {
    /// One-line description of the rule
    pub description: String,
    /// Failing and passing samples
    pub samples: Vec<CodeSample>,
}

/// A failing sample next to its corrected form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeSample {
    /// Code the rule reports
    pub bad: String,
    /// Equivalent code it accepts
    pub good: String,
}

/// Translates analyzer output from synthetic-unit coordinates back to the
/// template, attributing every surviving diagnostic to a render call site.
#[derive(Debug, Clone, Default)]
pub struct TemplateErrorsFactory;

impl TemplateErrorsFactory {
    /// Create a factory
    pub fn new() -> Self {
        Self
    }

    /// Reconcile diagnostics for one render site.
    ///
    /// Mapped lines attribute to the template line; scaffolding lines fall
    /// back to the host call line rather than discarding the finding.
    pub fn create_errors(
        &self,
        diagnostics: Vec<Diagnostic>,
        caller_file: &Path,
        template_file_path: &Path,
        line_map: &LineMap,
        call_line: u32,
    ) -> Vec<TemplateError> {
        diagnostics
            .into_iter()
            .map(|diagnostic| {
                let line = line_map
                    .template_line(diagnostic.line)
                    .unwrap_or(call_line);
                TemplateError {
                    message: diagnostic.message,
                    file: template_file_path.to_path_buf(),
                    line,
                    identifier: diagnostic.identifier,
                    severity: diagnostic.severity,
                    call_site: CallSite::new(caller_file, call_line),
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::synthesis::LineOrigin;

    fn line_map() -> LineMap {
        LineMap::new(vec![
            LineOrigin::Scaffolding,
            LineOrigin::Template(1),
            LineOrigin::Template(2),
        ])
    }

    #[test]
    fn test_mapped_lines_attribute_to_template() {
        let factory = TemplateErrorsFactory::new();
        let diagnostics = vec![Diagnostic::error("Call to an undefined method getName().", 3)];

        let errors = factory.create_errors(
            diagnostics,
            Path::new("control.php"),
            Path::new("widget.tpl"),
            &line_map(),
            12,
        );

        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].file, PathBuf::from("widget.tpl"));
        assert_eq!(errors[0].line, 2);
        assert_eq!(errors[0].call_site, CallSite::new("control.php", 12));
    }

    #[test]
    fn test_scaffolding_lines_fall_back_to_call_site() {
        let factory = TemplateErrorsFactory::new();
        let diagnostics = vec![Diagnostic::error("Undefined variable: $this", 1)];

        let errors = factory.create_errors(
            diagnostics,
            Path::new("control.php"),
            Path::new("widget.tpl"),
            &line_map(),
            12,
        );

        assert_eq!(errors[0].line, 12);
        assert_eq!(errors[0].file, PathBuf::from("widget.tpl"));
    }

    #[test]
    fn test_missing_template_error_message() {
        let error = TemplateError::missing_template(
            Path::new("missing.tpl"),
            CallSite::new("control.php", 7),
        );

        assert_eq!(error.message, "Template file \"missing.tpl\" does not exist");
        assert_eq!(error.line, 7);
        assert_eq!(error.severity, Severity::Error);
    }
}
