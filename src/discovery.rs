//! Discovery contract for render call sites in host code
//!
//! The enclosing static-analysis tool walks host syntax trees and hands each
//! node to the rule together with its analysis scope. One [`TemplateHolder`]
//! per supported calling convention inspects the node structurally and
//! extracts the render invocations and component bindings visible there.

use std::path::Path;

use crate::invocation::{ComponentBinding, RenderInvocation};

/// A syntax node handed in by the enclosing analysis traversal
pub trait HostNode {
    /// 1-based line of the node in its source file
    fn line(&self) -> u32;
}

/// Static-analysis scope surrounding a node
pub trait HostScope {
    /// File currently being analyzed
    fn file(&self) -> &Path;
}

/// One supported calling convention for rendering templates.
///
/// Matching is structural — the shape of the call, not an exact host-API
/// identity — so equivalent direct and framework-mediated render calls can
/// each be covered by their own holder. Implementations must return empty
/// results for nodes they do not recognize, never an error.
pub trait TemplateHolder<N, S> {
    /// Cheap structural pre-check before extraction
    fn check(&self, node: &N, scope: &S) -> bool;

    /// Render invocations visible at this node
    fn find_render_invocations(&self, node: &N, scope: &S) -> Vec<RenderInvocation>;

    /// Component bindings visible in this scope
    fn find_component_bindings(&self, node: &N, scope: &S) -> Vec<ComponentBinding>;
}
