//! Artifact resolution.
//!
//! The index turns logical references (module + kind) into loaded
//! artifacts through the `ArtifactSource` seam and the configured
//! layout. Absence is a value; callers turn it into findings.

mod fs;
mod index;
mod memory;

pub use fs::FsSource;
pub use index::SourceIndex;
pub use memory::MemorySource;
