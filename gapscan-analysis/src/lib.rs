//! # gapscan-analysis
//!
//! Audit engine for the Gapscan completeness auditor.
//! Contains the source index, artifact extractors, capability
//! detector, archetype classifier, rubric scorer, cross-reference
//! checks, report aggregation, and the audit pipeline.

pub mod archetype;
pub mod audit;
pub mod capabilities;
pub mod crossref;
pub mod extract;
pub mod health;
pub mod report;
pub mod rubric;
pub mod source;
