//! Declarative audit configuration.
//!
//! The module map, capability vocabulary, rubric weight table,
//! per-archetype overrides, cross-reference knobs, and thresholds are
//! all supplied as one TOML document — loaded once and passed by value
//! into every component, never a mutable global.

mod spec;

pub use spec::{
    AuditSpec, CrossRefConfig, IndicatorRule, LayoutConfig, ModuleSpec, RubricConfig, Thresholds,
};

use crate::errors::AuditError;

/// The built-in audit spec, embedded at compile time. Carries the
/// default vocabulary, weight table, and archetype overrides; its
/// module list is empty and supplied per project.
pub const BUILTIN_SPEC: &str = include_str!("builtin/default.toml");

impl AuditSpec {
    /// Parse and validate a spec from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, AuditError> {
        let spec: AuditSpec = toml::from_str(toml_str)?;
        spec.validate()?;
        Ok(spec)
    }

    /// Load and validate a spec from a file.
    pub fn from_file(path: &std::path::Path) -> Result<Self, AuditError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml(&text)
    }

    /// The built-in spec. Parsing it is covered by tests; a failure
    /// here means the embedded document itself is broken.
    pub fn builtin() -> Result<Self, AuditError> {
        Self::from_toml(BUILTIN_SPEC)
    }

    /// Attach a project's module map to this spec.
    pub fn with_modules(mut self, modules: Vec<ModuleSpec>) -> Self {
        self.modules = modules;
        self
    }
}

/// Generate a JSON Schema for the `AuditSpec` type, for validating
/// externally authored spec documents.
pub fn generate_json_schema() -> schemars::schema::RootSchema {
    schemars::schema_for!(AuditSpec)
}
