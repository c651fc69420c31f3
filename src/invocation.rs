//! Value objects describing one discovered render call site

use std::fmt;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::Serialize;

/// Statically inferred type carried by a binding
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub enum TypeHint {
    /// A concrete host-language type name
    Named(String),
    /// Inference failed; the variable is still declared, typed universally
    Unknown,
}

impl TypeHint {
    /// Hint for a known type name
    pub fn named(name: impl Into<String>) -> Self {
        TypeHint::Named(name.into())
    }

    /// Check whether inference failed for this binding
    pub fn is_unknown(&self) -> bool {
        matches!(self, TypeHint::Unknown)
    }
}

impl fmt::Display for TypeHint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeHint::Named(name) => write!(f, "{name}"),
            TypeHint::Unknown => write!(f, "mixed"),
        }
    }
}

/// One discovered call that renders a template with a parameter set.
///
/// Constructed fresh per matched call site during discovery and consumed
/// once by synthesis; never mutated after creation. Parameters keep their
/// call-site order, and names are unique within the invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderInvocation {
    template_file_path: PathBuf,
    parameters: IndexMap<String, String>,
}

impl RenderInvocation {
    /// Create an invocation of `template_file_path` with the given
    /// name → host-expression bindings.
    pub fn new(
        template_file_path: impl Into<PathBuf>,
        parameters: IndexMap<String, String>,
    ) -> Self {
        Self {
            template_file_path: template_file_path.into(),
            parameters,
        }
    }

    /// Template source path, resolved at analysis time
    pub fn template_file_path(&self) -> &Path {
        &self.template_file_path
    }

    /// Ordered name → host-expression bindings
    pub fn parameters(&self) -> &IndexMap<String, String> {
        &self.parameters
    }
}

/// Name/type pair for a nested template component available inside the
/// template, distinct from the top-level render parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComponentBinding {
    /// Identifier unique within the enclosing invocation's scope
    pub name: String,
    /// Statically inferred component type
    pub type_hint: TypeHint,
}

impl ComponentBinding {
    /// Create a component binding
    pub fn new(name: impl Into<String>, type_hint: TypeHint) -> Self {
        Self {
            name: name.into(),
            type_hint,
        }
    }
}
