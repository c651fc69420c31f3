//! Synthesis failure taxonomy

use std::path::PathBuf;

use thiserror::Error;

/// Why a template could not be turned into an analyzable unit.
///
/// Every variant is a hard failure for the affected render site; the rule
/// converts it into a single missing-template error instead of aborting
/// the enclosing analysis run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SynthesisError {
    /// The template path did not resolve to a file
    #[error("template file \"{}\" does not exist", path.display())]
    TemplateNotFound {
        /// Path as requested by the render call
        path: PathBuf,
    },

    /// An include, layout or inherited block could not be resolved
    #[error("unresolved reference \"{include}\" in template \"{}\"", path.display())]
    UnresolvedInclude {
        /// Template containing the broken reference
        path: PathBuf,
        /// The reference as written in the template
        include: String,
    },

    /// The template itself failed to compile
    #[error("template \"{}\" failed to compile: {message}", path.display())]
    Malformed {
        /// Template that failed
        path: PathBuf,
        /// Transpiler message
        message: String,
    },

    /// The produced line map does not cover the produced source
    #[error("line map covers {mapped} lines but the synthesized source has {actual}")]
    IncompleteLineMap {
        /// Lines covered by the map
        mapped: usize,
        /// Lines in the synthesized source
        actual: usize,
    },
}
