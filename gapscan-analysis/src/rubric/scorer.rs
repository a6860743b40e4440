//! Rubric scoring.

use smallvec::SmallVec;

use gapscan_core::types::score::{MissingCapability, ModuleScore};
use gapscan_core::{CapabilitySet, PageArchetype};

use super::weights::RubricWeights;

/// Score one page against the rubric.
///
/// Zero-weight capabilities never contribute to the maximum and never
/// appear in the missing list — the mechanism by which
/// archetype-inapplicable criteria do not penalize a page. A page
/// where every applicable capability is present scores exactly 100.
pub fn score_page(
    name: &str,
    priority: &str,
    caps: &CapabilitySet,
    archetype: PageArchetype,
    rubric: &RubricWeights,
) -> ModuleScore {
    let effective = rubric.effective(archetype);

    let mut raw_score = 0u32;
    let mut max_score = 0u32;
    let mut missing: SmallVec<[MissingCapability; 4]> = SmallVec::new();

    for (cap, weight) in effective.iter() {
        if weight == 0 {
            continue;
        }
        max_score += weight;
        if caps.has(cap) {
            raw_score += weight;
        } else {
            missing.push(MissingCapability {
                capability: cap,
                weight,
            });
        }
    }

    // Heaviest gaps first; ties broken by capability name so the
    // ordering is stable across runs.
    missing.sort_by(|a, b| {
        b.weight
            .cmp(&a.weight)
            .then_with(|| a.capability.name().cmp(b.capability.name()))
    });

    ModuleScore {
        module_name: name.to_string(),
        priority_tag: priority.to_string(),
        archetype,
        raw_score,
        max_score,
        percentage: ModuleScore::percentage_of(raw_score, max_score),
        missing,
    }
}
