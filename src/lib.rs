//! Static analysis for templates compiled to host-language source
//!
//! Templates mix literal markup with expressions over host variables, and
//! type errors in those expressions normally surface only at render time.
//! This crate discovers render call sites in host code, synthesizes a
//! compilable unit that declares every template variable with its inferred
//! type, runs an external analyzer over that unit with a template-sized
//! rule subset, filters out scaffolding artifacts, and maps the surviving
//! findings back to template-file lines.

pub mod analysis;
pub mod cache;
pub mod config;
pub mod discovery;
pub mod invocation;
pub mod mock;
pub mod registry;
pub mod reporting;
pub mod rule;
pub mod skipper;
pub mod store;
pub mod synthesis;

// Re-export main types
pub use analysis::{Diagnostic, FileAnalyzer, Severity};
pub use config::{ConfigError, TemplateCheckConfig};
pub use discovery::{HostNode, HostScope, TemplateHolder};
pub use invocation::{ComponentBinding, RenderInvocation, TypeHint};
pub use registry::TemplateRuleRegistry;
pub use reporting::{CallSite, ErrorFormatter, Format, TemplateError, TemplateErrorsFactory};
pub use rule::{TemplateCheckRule, TemplateCheckRuleBuilder};
pub use skipper::ErrorSkipper;
pub use store::{ContentHash, ContentStore, MemoryStore, TempFileStore};
pub use synthesis::{LineMap, LineOrigin, SynthesisError, SynthesizedUnit, TemplateSynthesizer};
