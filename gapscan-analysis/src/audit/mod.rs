//! The audit passes and their orchestration.
//!
//! Per module: backend pass, frontend pass, cross-reference pass, in
//! that order. Cross-reference checks consume the outputs of the
//! passes before them and never start early.

pub mod backend;
pub mod frontend;
pub mod pipeline;

pub use pipeline::AuditPipeline;
