//! Mock collaborators for exercising the pipeline without a host toolchain
//!
//! These implementations back the crate's own tests and are public so
//! downstream integrations can drive the rule hermetically as well.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::bail;
use indexmap::IndexMap;
use parking_lot::Mutex;

use crate::analysis::{Diagnostic, FileAnalyzer};
use crate::discovery::{HostNode, HostScope, TemplateHolder};
use crate::invocation::{ComponentBinding, RenderInvocation};
use crate::registry::TemplateRuleRegistry;
use crate::synthesis::{SynthesisError, SynthesizedUnit, TemplateSynthesizer};

/// Minimal host syntax node carrying only its line
#[derive(Debug, Clone, Copy)]
pub struct MockNode {
    /// 1-based line of the node
    pub line: u32,
}

impl HostNode for MockNode {
    fn line(&self) -> u32 {
        self.line
    }
}

/// Scope pinned to a single analyzed file
#[derive(Debug, Clone)]
pub struct MockScope {
    file: PathBuf,
}

impl MockScope {
    /// Scope for the given host file
    pub fn new(file: impl Into<PathBuf>) -> Self {
        Self { file: file.into() }
    }
}

impl HostScope for MockScope {
    fn file(&self) -> &Path {
        &self.file
    }
}

/// Holder that reports a fixed set of invocations for every node
#[derive(Debug, Clone, Default)]
pub struct MockTemplateHolder {
    invocations: Vec<RenderInvocation>,
    components: Vec<ComponentBinding>,
}

impl MockTemplateHolder {
    /// Holder returning the given invocations
    pub fn new(invocations: Vec<RenderInvocation>) -> Self {
        Self {
            invocations,
            components: Vec::new(),
        }
    }

    /// Attach component bindings visible in scope
    pub fn with_components(mut self, components: Vec<ComponentBinding>) -> Self {
        self.components = components;
        self
    }
}

impl TemplateHolder<MockNode, MockScope> for MockTemplateHolder {
    fn check(&self, _node: &MockNode, _scope: &MockScope) -> bool {
        true
    }

    fn find_render_invocations(
        &self,
        _node: &MockNode,
        _scope: &MockScope,
    ) -> Vec<RenderInvocation> {
        self.invocations.clone()
    }

    fn find_component_bindings(
        &self,
        _node: &MockNode,
        _scope: &MockScope,
    ) -> Vec<ComponentBinding> {
        self.components.clone()
    }
}

/// Synthesizer backed by a canned per-template result table.
///
/// Templates without an entry fail with [`SynthesisError::TemplateNotFound`],
/// which makes missing-template scenarios the default rather than a setup
/// step.
#[derive(Debug, Clone, Default)]
pub struct MockSynthesizer {
    units: HashMap<PathBuf, Result<SynthesizedUnit, SynthesisError>>,
}

impl MockSynthesizer {
    /// Synthesizer with no known templates
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a successful synthesis result for a template
    pub fn with_unit(mut self, template: impl Into<PathBuf>, unit: SynthesizedUnit) -> Self {
        self.units.insert(template.into(), Ok(unit));
        self
    }

    /// Register a synthesis failure for a template
    pub fn with_failure(mut self, template: impl Into<PathBuf>, error: SynthesisError) -> Self {
        self.units.insert(template.into(), Err(error));
        self
    }
}

impl<S> TemplateSynthesizer<S> for MockSynthesizer {
    fn synthesize(
        &self,
        template_file_path: &Path,
        _parameters: &IndexMap<String, String>,
        _scope: &S,
        _components: &[ComponentBinding],
    ) -> Result<SynthesizedUnit, SynthesisError> {
        match self.units.get(template_file_path) {
            Some(result) => result.clone(),
            None => Err(SynthesisError::TemplateNotFound {
                path: template_file_path.to_path_buf(),
            }),
        }
    }
}

/// Analyzer returning canned diagnostics and recording every call
#[derive(Debug, Default)]
pub struct MockAnalyzer {
    diagnostics: Vec<Diagnostic>,
    fail_with: Option<String>,
    calls: Arc<Mutex<Vec<PathBuf>>>,
}

impl MockAnalyzer {
    /// Analyzer that returns the given diagnostics for every unit
    pub fn new(diagnostics: Vec<Diagnostic>) -> Self {
        Self {
            diagnostics,
            fail_with: None,
            calls: Arc::default(),
        }
    }

    /// Analyzer whose every call fails internally
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            diagnostics: Vec::new(),
            fail_with: Some(message.into()),
            calls: Arc::default(),
        }
    }

    /// Shared log of analyzed paths; clone before moving the analyzer
    /// into a rule
    pub fn call_log(&self) -> Arc<Mutex<Vec<PathBuf>>> {
        Arc::clone(&self.calls)
    }
}

impl FileAnalyzer for MockAnalyzer {
    fn analyze(
        &self,
        file_path: &Path,
        _rules: &TemplateRuleRegistry,
    ) -> anyhow::Result<Vec<Diagnostic>> {
        self.calls.lock().push(file_path.to_path_buf());
        if let Some(message) = &self.fail_with {
            bail!("{message}");
        }
        Ok(self.diagnostics.clone())
    }
}
