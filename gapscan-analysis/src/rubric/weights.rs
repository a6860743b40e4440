//! Rubric weight tables.
//!
//! The base table is pure configuration. Per-archetype effective
//! weights are a fresh copy with the archetype's override set zeroed
//! — the base is never mutated, so concurrent scoring of different
//! pages never races on a shared table.

use rustc_hash::FxHashMap;

use gapscan_core::config::RubricConfig;
use gapscan_core::{AuditError, Capability, PageArchetype};

/// Weight per capability, in vocabulary order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WeightTable {
    weights: [u32; 14],
}

impl WeightTable {
    pub fn get(&self, cap: Capability) -> u32 {
        self.weights[cap as usize]
    }

    pub fn set(&mut self, cap: Capability, weight: u32) {
        self.weights[cap as usize] = weight;
    }

    /// Sum of all non-zero weights — the maximum attainable score.
    pub fn max_score(&self) -> u32 {
        self.weights.iter().sum()
    }

    /// Iterate `(capability, weight)` pairs in vocabulary order.
    pub fn iter(&self) -> impl Iterator<Item = (Capability, u32)> + '_ {
        Capability::all().iter().map(|c| (*c, self.get(*c)))
    }
}

/// Compiled rubric: base weights plus per-archetype override sets.
#[derive(Debug, Clone)]
pub struct RubricWeights {
    base: WeightTable,
    overrides: FxHashMap<PageArchetype, Vec<Capability>>,
}

impl RubricWeights {
    /// Compile from the spec's rubric configuration.
    pub fn from_config(cfg: &RubricConfig) -> Result<Self, AuditError> {
        let mut base = WeightTable::default();
        for (name, weight) in &cfg.base_weights {
            let cap = Capability::parse_str(name)
                .ok_or_else(|| AuditError::UnknownCapability { name: name.clone() })?;
            base.set(cap, *weight);
        }

        let mut overrides = FxHashMap::default();
        for (archetype_name, zeroed) in &cfg.overrides {
            let archetype = PageArchetype::parse_str(archetype_name).ok_or_else(|| {
                AuditError::UnknownArchetype {
                    name: archetype_name.clone(),
                }
            })?;
            let mut caps = Vec::with_capacity(zeroed.len());
            for name in zeroed {
                caps.push(
                    Capability::parse_str(name)
                        .ok_or_else(|| AuditError::UnknownCapability { name: name.clone() })?,
                );
            }
            overrides.insert(archetype, caps);
        }

        Ok(Self { base, overrides })
    }

    /// The base weight table.
    pub fn base(&self) -> &WeightTable {
        &self.base
    }

    /// Effective weights for an archetype: a fresh copy of the base
    /// with the archetype's override capabilities zeroed. Archetypes
    /// without an override entry keep every base weight.
    pub fn effective(&self, archetype: PageArchetype) -> WeightTable {
        let mut table = self.base.clone();
        if let Some(zeroed) = self.overrides.get(&archetype) {
            for cap in zeroed {
                table.set(*cap, 0);
            }
        }
        table
    }
}
