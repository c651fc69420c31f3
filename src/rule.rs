//! The template check rule: per-node pipeline orchestration

use anyhow::{Context, Result};
use log::{debug, warn};
use regex::Regex;

use crate::analysis::{Diagnostic, FileAnalyzer};
use crate::cache::DiagnosticsCache;
use crate::config::{ConfigError, TemplateCheckConfig};
use crate::discovery::{HostNode, HostScope, TemplateHolder};
use crate::invocation::{ComponentBinding, RenderInvocation};
use crate::registry::TemplateRuleRegistry;
use crate::reporting::{CallSite, CodeSample, RuleDefinition, TemplateError, TemplateErrorsFactory};
use crate::skipper::ErrorSkipper;
use crate::store::{ContentHash, ContentStore, TempFileStore};
use crate::synthesis::TemplateSynthesizer;

/// Complete analysis of host code generated from templates.
///
/// Invoked once per node of the enclosing analysis traversal, the rule
/// drives discover → synthesize → persist → analyze → reconcile for every
/// render site found at that node. A failed synthesis contributes exactly
/// one missing-template error for its invocation and never blocks sibling
/// invocations or the enclosing run; analyzer-internal failures propagate
/// unchanged to the host's fatal-error path.
pub struct TemplateCheckRule<N, S> {
    holders: Vec<Box<dyn TemplateHolder<N, S>>>,
    synthesizer: Box<dyn TemplateSynthesizer<S>>,
    analyzer: Box<dyn FileAnalyzer>,
    store: Box<dyn ContentStore>,
    registry: TemplateRuleRegistry,
    skipper: ErrorSkipper,
    errors_factory: TemplateErrorsFactory,
    cache: Option<DiagnosticsCache>,
}

impl<N: HostNode, S: HostScope> TemplateCheckRule<N, S> {
    /// Start wiring a rule from its collaborators
    pub fn builder() -> TemplateCheckRuleBuilder<N, S> {
        TemplateCheckRuleBuilder::new()
    }

    /// Process one node of the host traversal.
    ///
    /// Returns the reconciled errors for every render site visible at the
    /// node; an empty vector when no holder matches.
    pub fn process(&self, node: &N, scope: &S) -> Result<Vec<TemplateError>> {
        let mut errors = Vec::new();
        for holder in &self.holders {
            if !holder.check(node, scope) {
                continue;
            }

            let invocations = holder.find_render_invocations(node, scope);
            if invocations.is_empty() {
                continue;
            }
            let components = holder.find_component_bindings(node, scope);

            for invocation in &invocations {
                errors.extend(self.process_invocation(
                    invocation,
                    scope,
                    &components,
                    node.line(),
                )?);
            }
        }
        Ok(errors)
    }

    fn process_invocation(
        &self,
        invocation: &RenderInvocation,
        scope: &S,
        components: &[ComponentBinding],
        call_line: u32,
    ) -> Result<Vec<TemplateError>> {
        let template = invocation.template_file_path();
        let call_site = CallSite::new(scope.file(), call_line);

        // missing include/layout template or malformed syntax: one error
        // for the whole render site, siblings unaffected
        let unit = match self.synthesizer.synthesize(
            template,
            invocation.parameters(),
            scope,
            components,
        ) {
            Ok(unit) => unit,
            Err(error) => {
                warn!("cannot synthesize {}: {error}", template.display());
                return Ok(vec![TemplateError::missing_template(template, call_site)]);
            }
        };

        let hash = ContentHash::of(invocation, components);
        let unit_path = match self.store.get(&hash) {
            Some(path) => {
                debug!("unit {hash} already persisted");
                path
            }
            None => self
                .store
                .put(&hash, unit.source_text())
                .with_context(|| format!("persisting synthesized unit {hash}"))?,
        };

        let diagnostics = match self.cached_diagnostics(&hash) {
            Some(diagnostics) => diagnostics,
            None => {
                debug!(
                    "analyzing synthesized unit for {} at {}",
                    template.display(),
                    unit_path.display()
                );
                let raw = self.analyzer.analyze(&unit_path, &self.registry)?;
                let filtered = self.skipper.skip(raw);
                if let Some(cache) = &self.cache {
                    cache.insert(hash, filtered.clone());
                }
                filtered
            }
        };

        Ok(self.errors_factory.create_errors(
            diagnostics,
            scope.file(),
            template,
            unit.line_map(),
            call_line,
        ))
    }

    fn cached_diagnostics(&self, hash: &ContentHash) -> Option<Vec<Diagnostic>> {
        let cached = self.cache.as_ref()?.get(hash)?;
        debug!("diagnostics cache hit for {hash}");
        Some(cached)
    }

    /// What this rule reports, with a before/after sample
    pub fn definition(&self) -> RuleDefinition {
        RuleDefinition {
            description: "Complete analysis of host code generated from a template".to_string(),
            samples: vec![CodeSample {
                bad: r#"$this->template->render(__DIR__ . '/widget.latte', [
    'user' => $user,
]);

// widget.latte
{$user->missingMethod()}"#
                    .to_string(),
                good: r#"$this->template->render(__DIR__ . '/widget.latte', [
    'user' => $user,
]);

// widget.latte
{$user->existingMethod()}"#
                    .to_string(),
            }],
        }
    }
}

/// Builder wiring collaborators and configuration into a rule
pub struct TemplateCheckRuleBuilder<N, S> {
    config: TemplateCheckConfig,
    holders: Vec<Box<dyn TemplateHolder<N, S>>>,
    synthesizer: Option<Box<dyn TemplateSynthesizer<S>>>,
    analyzer: Option<Box<dyn FileAnalyzer>>,
    store: Option<Box<dyn ContentStore>>,
}

impl<N: HostNode, S: HostScope> TemplateCheckRuleBuilder<N, S> {
    /// Create a builder with default configuration
    pub fn new() -> Self {
        Self {
            config: TemplateCheckConfig::default(),
            holders: Vec::new(),
            synthesizer: None,
            analyzer: None,
            store: None,
        }
    }

    /// Replace the whole configuration
    pub fn config(mut self, config: TemplateCheckConfig) -> Self {
        self.config = config;
        self
    }

    /// Register a holder for one calling convention; order is match order
    pub fn holder(mut self, holder: impl TemplateHolder<N, S> + 'static) -> Self {
        self.holders.push(Box::new(holder));
        self
    }

    /// Set the template synthesizer (required)
    pub fn synthesizer(mut self, synthesizer: impl TemplateSynthesizer<S> + 'static) -> Self {
        self.synthesizer = Some(Box::new(synthesizer));
        self
    }

    /// Set the external analyzer (required)
    pub fn analyzer(mut self, analyzer: impl FileAnalyzer + 'static) -> Self {
        self.analyzer = Some(Box::new(analyzer));
        self
    }

    /// Substitute the content store; defaults to a [`TempFileStore`]
    pub fn store(mut self, store: impl ContentStore + 'static) -> Self {
        self.store = Some(Box::new(store));
        self
    }

    /// Finish the rule
    pub fn build(self) -> Result<TemplateCheckRule<N, S>, ConfigError> {
        let synthesizer = self.synthesizer.ok_or(ConfigError::MissingSynthesizer)?;
        let analyzer = self.analyzer.ok_or(ConfigError::MissingAnalyzer)?;

        let mut patterns = Vec::with_capacity(self.config.skip_patterns.len());
        for pattern in &self.config.skip_patterns {
            patterns.push(Regex::new(pattern).map_err(|source| {
                ConfigError::InvalidSkipPattern {
                    pattern: pattern.clone(),
                    source,
                }
            })?);
        }

        let store: Box<dyn ContentStore> = match self.store {
            Some(store) => store,
            None => {
                let store = match &self.config.temp_dir {
                    Some(dir) => TempFileStore::in_dir(dir),
                    None => TempFileStore::new(),
                };
                Box::new(store.with_extension(self.config.temp_file_extension.clone()))
            }
        };

        Ok(TemplateCheckRule {
            holders: self.holders,
            synthesizer,
            analyzer,
            store,
            registry: TemplateRuleRegistry::new(self.config.rule_identifiers.clone()),
            skipper: ErrorSkipper::from_patterns(patterns),
            errors_factory: TemplateErrorsFactory::new(),
            cache: self
                .config
                .enable_diagnostics_cache
                .then(DiagnosticsCache::new),
        })
    }
}

impl<N: HostNode, S: HostScope> Default for TemplateCheckRuleBuilder<N, S> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::{MockAnalyzer, MockNode, MockScope, MockSynthesizer, MockTemplateHolder};
    use crate::store::MemoryStore;

    #[test]
    fn test_build_requires_synthesizer_and_analyzer() {
        let builder = TemplateCheckRule::<MockNode, MockScope>::builder();
        assert!(matches!(
            builder.build(),
            Err(ConfigError::MissingSynthesizer)
        ));

        let builder = TemplateCheckRule::<MockNode, MockScope>::builder()
            .synthesizer(MockSynthesizer::new());
        assert!(matches!(builder.build(), Err(ConfigError::MissingAnalyzer)));
    }

    #[test]
    fn test_build_rejects_invalid_skip_pattern() {
        let config = TemplateCheckConfig {
            skip_patterns: vec!["(unclosed".to_string()],
            ..TemplateCheckConfig::default()
        };

        let result = TemplateCheckRule::<MockNode, MockScope>::builder()
            .config(config)
            .synthesizer(MockSynthesizer::new())
            .analyzer(MockAnalyzer::new(Vec::new()))
            .build();

        match result {
            Err(ConfigError::InvalidSkipPattern { pattern, .. }) => {
                assert_eq!(pattern, "(unclosed");
            }
            Err(other) => panic!("unexpected error: {other:?}"),
            Ok(_) => panic!("expected InvalidSkipPattern"),
        }
    }

    #[test]
    fn test_node_without_invocations_is_inert() {
        let store = MemoryStore::new();
        let analyzer = MockAnalyzer::new(Vec::new());
        let calls = analyzer.call_log();

        let rule = TemplateCheckRule::builder()
            .holder(MockTemplateHolder::default())
            .synthesizer(MockSynthesizer::new())
            .analyzer(analyzer)
            .store(store.clone())
            .build()
            .unwrap();

        let errors = rule
            .process(&MockNode { line: 1 }, &MockScope::new("control.php"))
            .unwrap();

        assert!(errors.is_empty());
        assert_eq!(store.write_count(), 0);
        assert!(calls.lock().is_empty());
    }
}
