//! Audit error taxonomy.
//!
//! Propagation policy: failures scoped to one artifact or one check
//! degrade to findings inside the pipeline and never abort a run.
//! Only configuration problems surface as errors, and only at load
//! time.

/// Stable machine-readable code for each error variant.
pub trait ErrorCode {
    fn error_code(&self) -> &'static str;
}

/// Errors that can occur while loading configuration or resolving
/// artifacts.
#[derive(Debug, thiserror::Error)]
pub enum AuditError {
    #[error("artifact not found: {path}")]
    ArtifactNotFound { path: String },

    #[error("unterminated body in method '{method}' of {path}")]
    UnterminatedBody { method: String, path: String },

    #[error("invalid audit spec: {message}")]
    InvalidSpec { message: String },

    #[error("unknown capability '{name}' in spec")]
    UnknownCapability { name: String },

    #[error("unknown archetype '{name}' in spec")]
    UnknownArchetype { name: String },

    #[error("invalid indicator pattern '{pattern}': {message}")]
    InvalidPattern { pattern: String, message: String },

    #[error("failed to read spec: {0}")]
    SpecIo(#[from] std::io::Error),

    #[error("failed to parse spec: {0}")]
    SpecParse(#[from] toml::de::Error),
}

impl ErrorCode for AuditError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::ArtifactNotFound { .. } => "AUDIT_ARTIFACT_NOT_FOUND",
            Self::UnterminatedBody { .. } => "AUDIT_UNTERMINATED_BODY",
            Self::InvalidSpec { .. } => "AUDIT_INVALID_SPEC",
            Self::UnknownCapability { .. } => "AUDIT_UNKNOWN_CAPABILITY",
            Self::UnknownArchetype { .. } => "AUDIT_UNKNOWN_ARCHETYPE",
            Self::InvalidPattern { .. } => "AUDIT_INVALID_PATTERN",
            Self::SpecIo(_) => "AUDIT_SPEC_IO",
            Self::SpecParse(_) => "AUDIT_SPEC_PARSE",
        }
    }
}
