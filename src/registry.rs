//! Restricted rule subset for synthetic units

/// Analyzer rule identifiers that are meaningful against a synthesized,
/// non-autoloadable unit.
///
/// The synthetic wrapper is intentionally incomplete — no autoloader entry,
/// no real class hierarchy — so running an unrestricted rule set against it
/// yields guaranteed-false positives. The registry is an allowlist of the
/// member-lookup and call-shape identifiers a template body can actually
/// violate; class-structure and file-level identifiers never get in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateRuleRegistry {
    allowed: Vec<String>,
}

impl TemplateRuleRegistry {
    /// Identifiers enabled by default
    pub const DEFAULT_IDENTIFIERS: &'static [&'static str] = &[
        "method.notFound",
        "staticMethod.notFound",
        "property.notFound",
        "variable.undefined",
        "arguments.count",
        "argument.type",
        "offsetAccess.notFound",
    ];

    /// Registry allowing exactly the given identifiers
    pub fn new(identifiers: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            allowed: identifiers.into_iter().map(Into::into).collect(),
        }
    }

    /// Whether a rule identifier is enabled for synthetic units
    pub fn is_enabled(&self, identifier: &str) -> bool {
        self.allowed.iter().any(|allowed| allowed == identifier)
    }

    /// The enabled identifiers, in registration order
    pub fn identifiers(&self) -> &[String] {
        &self.allowed
    }
}

impl Default for TemplateRuleRegistry {
    fn default() -> Self {
        Self::new(Self::DEFAULT_IDENTIFIERS.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_set_targets_template_bodies() {
        let registry = TemplateRuleRegistry::default();

        assert!(registry.is_enabled("method.notFound"));
        assert!(registry.is_enabled("variable.undefined"));
        assert!(!registry.is_enabled("class.notFound"));
        assert!(!registry.is_enabled("autoload.missing"));
    }

    #[test]
    fn test_custom_registry_replaces_default() {
        let registry = TemplateRuleRegistry::new(["property.notFound"]);

        assert!(registry.is_enabled("property.notFound"));
        assert!(!registry.is_enabled("method.notFound"));
        assert_eq!(registry.identifiers(), ["property.notFound"]);
    }
}
