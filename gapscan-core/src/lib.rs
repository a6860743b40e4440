//! # gapscan-core
//!
//! Foundation crate for the Gapscan completeness auditor.
//! Defines all types, traits, errors, config, and tracing setup.
//! The analysis crate depends on this.

pub mod config;
pub mod errors;
pub mod tracing;
pub mod traits;
pub mod types;

// Re-export the most commonly used types at the crate root.
pub use config::AuditSpec;
pub use errors::{AuditError, ErrorCode};
pub use traits::{ArtifactSource, HealthProbe, ProbeError, ProbeResponse};
pub use types::archetype::PageArchetype;
pub use types::artifact::{ArtifactKind, SourceArtifact};
pub use types::capability::{Capability, CapabilitySet};
pub use types::collections::{FxHashMap, FxHashSet};
pub use types::findings::{CheckStatus, CrossRefFinding, CrossRefKind, Finding};
pub use types::method::MethodRecord;
pub use types::score::{MissingCapability, ModuleScore};
