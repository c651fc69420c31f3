//! Formatting template errors for different output targets

use super::TemplateError;

/// Output format for template errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// Human-readable multi-line format
    Text,
    /// JSON format
    Json,
    /// Compact single-line format
    Compact,
}

/// Formatter for reconciled template errors
#[derive(Debug, Clone)]
pub struct ErrorFormatter {
    format: Format,
    show_identifier: bool,
    show_call_site: bool,
}

impl ErrorFormatter {
    /// Create a formatter
    pub fn new(format: Format) -> Self {
        Self {
            format,
            show_identifier: true,
            show_call_site: true,
        }
    }

    /// Set whether to show rule identifiers
    pub fn with_identifier(mut self, show: bool) -> Self {
        self.show_identifier = show;
        self
    }

    /// Set whether to show the originating call site
    pub fn with_call_site(mut self, show: bool) -> Self {
        self.show_call_site = show;
        self
    }

    /// Format a single error
    pub fn format(&self, error: &TemplateError) -> String {
        match self.format {
            Format::Text => self.format_text(error),
            Format::Json => serde_json::to_string(error).unwrap(),
            Format::Compact => self.format_compact(error),
        }
    }

    /// Format a batch of errors
    pub fn format_all(&self, errors: &[TemplateError]) -> String {
        match self.format {
            Format::Text => errors
                .iter()
                .map(|error| self.format_text(error))
                .collect::<Vec<_>>()
                .join("\n\n"),
            Format::Json => serde_json::to_string_pretty(errors).unwrap(),
            Format::Compact => errors
                .iter()
                .map(|error| self.format_compact(error))
                .collect::<Vec<_>>()
                .join("\n"),
        }
    }

    fn format_text(&self, error: &TemplateError) -> String {
        let mut output = format!(
            "{}: {}\n  --> {}:{}",
            error.severity,
            error.message,
            error.file.display(),
            error.line
        );
        if self.show_identifier {
            if let Some(identifier) = &error.identifier {
                output.push_str(&format!("\n  identifier: {identifier}"));
            }
        }
        if self.show_call_site {
            output.push_str(&format!(
                "\n  rendered at {}:{}",
                error.call_site.file.display(),
                error.call_site.line
            ));
        }
        output
    }

    fn format_compact(&self, error: &TemplateError) -> String {
        format!(
            "{}:{}: {}: {}",
            error.file.display(),
            error.line,
            error.severity,
            error.message
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::Severity;
    use crate::reporting::CallSite;

    fn sample_error() -> TemplateError {
        TemplateError {
            message: "Call to an undefined method getName().".to_string(),
            file: "widget.tpl".into(),
            line: 3,
            identifier: Some("method.notFound".to_string()),
            severity: Severity::Error,
            call_site: CallSite::new("control.php", 12),
        }
    }

    #[test]
    fn test_text_format() {
        let output = ErrorFormatter::new(Format::Text).format(&sample_error());

        assert!(output.starts_with("error: Call to an undefined method getName()."));
        assert!(output.contains("--> widget.tpl:3"));
        assert!(output.contains("identifier: method.notFound"));
        assert!(output.contains("rendered at control.php:12"));
    }

    #[test]
    fn test_compact_format() {
        let output = ErrorFormatter::new(Format::Compact).format(&sample_error());
        assert_eq!(
            output,
            "widget.tpl:3: error: Call to an undefined method getName()."
        );
    }

    #[test]
    fn test_json_round_trip() {
        let error = sample_error();
        let output = ErrorFormatter::new(Format::Json).format(&error);
        let parsed: TemplateError = serde_json::from_str(&output).unwrap();

        assert_eq!(parsed, error);
    }

    #[test]
    fn test_toggles_hide_sections() {
        let output = ErrorFormatter::new(Format::Text)
            .with_identifier(false)
            .with_call_site(false)
            .format(&sample_error());

        assert!(!output.contains("identifier:"));
        assert!(!output.contains("rendered at"));
    }
}
