//! Kind-aware capability detection over raw artifact text.
//!
//! Each indicator rule compiles its substring group into one
//! Aho-Corasick automaton and its regex group into one `RegexSet`. A
//! capability is true iff at least one of its rules fires. Detection
//! is heuristic by contract: a miss is `false`, never an error.

use aho_corasick::AhoCorasick;
use regex::RegexSet;

use gapscan_core::config::{AuditSpec, IndicatorRule};
use gapscan_core::{ArtifactKind, AuditError, Capability, CapabilitySet};

struct CompiledRule {
    capability: Capability,
    /// Kinds the rule is restricted to. Empty = every kind the
    /// capability itself applies to.
    kinds: Vec<ArtifactKind>,
    substrings: Option<AhoCorasick>,
    patterns: Option<RegexSet>,
    /// Secondary group that must also hit (AND between groups).
    paired_with: Option<AhoCorasick>,
}

impl CompiledRule {
    fn applies_to(&self, kind: ArtifactKind) -> bool {
        if !self.capability.applies_to(kind) {
            return false;
        }
        self.kinds.is_empty() || self.kinds.contains(&kind)
    }

    fn fires(&self, text: &str) -> bool {
        let primary = self
            .substrings
            .as_ref()
            .is_some_and(|ac| ac.is_match(text))
            || self.patterns.as_ref().is_some_and(|rs| rs.is_match(text));
        if !primary {
            return false;
        }
        match &self.paired_with {
            Some(ac) => ac.is_match(text),
            None => true,
        }
    }
}

/// Evaluates the capability vocabulary against artifact text.
pub struct CapabilityDetector {
    rules: Vec<CompiledRule>,
}

impl CapabilityDetector {
    /// Compile the vocabulary of an audit spec.
    pub fn from_spec(spec: &AuditSpec) -> Result<Self, AuditError> {
        Self::compile(&spec.vocabulary)
    }

    /// Compile a list of indicator rules.
    pub fn compile(vocabulary: &[IndicatorRule]) -> Result<Self, AuditError> {
        let mut rules = Vec::with_capacity(vocabulary.len());
        for rule in vocabulary {
            rules.push(compile_rule(rule)?);
        }
        Ok(Self { rules })
    }

    /// Number of compiled rules.
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Evaluate every capability applicable to `kind` against `text`.
    pub fn detect(&self, text: &str, kind: ArtifactKind) -> CapabilitySet {
        let mut set = CapabilitySet::new();
        for rule in &self.rules {
            if rule.applies_to(kind) && !set.has(rule.capability) && rule.fires(text) {
                set.set(rule.capability, true);
            }
        }
        set
    }
}

fn compile_rule(rule: &IndicatorRule) -> Result<CompiledRule, AuditError> {
    let capability = Capability::parse_str(&rule.capability).ok_or_else(|| {
        AuditError::UnknownCapability {
            name: rule.capability.clone(),
        }
    })?;

    let mut kinds = Vec::with_capacity(rule.kinds.len());
    for name in &rule.kinds {
        kinds.push(ArtifactKind::parse_str(name).ok_or_else(|| AuditError::InvalidSpec {
            message: format!("unknown artifact kind '{name}'"),
        })?);
    }

    let substrings = if rule.substrings.is_empty() {
        None
    } else {
        Some(
            AhoCorasick::new(&rule.substrings).map_err(|e| AuditError::InvalidSpec {
                message: format!("bad substring set for '{}': {e}", rule.capability),
            })?,
        )
    };

    let patterns = if rule.patterns.is_empty() {
        None
    } else {
        Some(
            RegexSet::new(&rule.patterns).map_err(|e| AuditError::InvalidPattern {
                pattern: rule.patterns.join(", "),
                message: e.to_string(),
            })?,
        )
    };

    let paired_with = if rule.paired_with.is_empty() {
        None
    } else {
        Some(
            AhoCorasick::new(&rule.paired_with).map_err(|e| AuditError::InvalidSpec {
                message: format!("bad paired_with set for '{}': {e}", rule.capability),
            })?,
        )
    };

    Ok(CompiledRule {
        capability,
        kinds,
        substrings,
        patterns,
        paired_with,
    })
}
