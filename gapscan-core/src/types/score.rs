//! Rubric score records.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::archetype::PageArchetype;
use super::capability::Capability;

/// A capability that carries non-zero weight for the page's archetype
/// but was not detected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MissingCapability {
    pub capability: Capability,
    pub weight: u32,
}

/// Weighted completeness score for one scored unit (a page, rolled up
/// per module by the aggregator).
///
/// Invariant: `0 <= percentage <= 100`, with
/// `percentage = round(100 * raw_score / max_score)` when
/// `max_score > 0`, else 100 (no applicable criteria means vacuously
/// complete).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModuleScore {
    pub module_name: String,
    pub priority_tag: String,
    pub archetype: PageArchetype,
    pub raw_score: u32,
    pub max_score: u32,
    pub percentage: u8,
    /// Missing weighted capabilities, sorted by descending weight,
    /// ties broken by capability name.
    pub missing: SmallVec<[MissingCapability; 4]>,
}

impl ModuleScore {
    /// Compute the percentage per the type invariant.
    pub fn percentage_of(raw: u32, max: u32) -> u8 {
        if max == 0 {
            return 100;
        }
        let pct = (raw as f64 / max as f64 * 100.0).round();
        pct.clamp(0.0, 100.0) as u8
    }
}
