//! Serde types defining the TOML schema for audit specs.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::errors::AuditError;
use crate::types::archetype::PageArchetype;
use crate::types::artifact::ArtifactKind;
use crate::types::capability::Capability;

/// Top-level audit spec (one per TOML document).
#[derive(Debug, Clone, Serialize, Deserialize, Default, schemars::JsonSchema)]
#[serde(default)]
pub struct AuditSpec {
    /// Module → artifact mapping. Enumeration of which paths belong to
    /// which module is configuration, never discovered by the core.
    pub modules: Vec<ModuleSpec>,
    /// Capability indicator rules.
    pub vocabulary: Vec<IndicatorRule>,
    /// Rubric weight table and per-archetype overrides.
    pub rubric: RubricConfig,
    /// Cross-reference check knobs.
    pub crossref: CrossRefConfig,
    /// Report severity thresholds.
    pub thresholds: Thresholds,
    /// Artifact path layout.
    pub layout: LayoutConfig,
}

/// One functional module and the artifacts that implement it.
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
pub struct ModuleSpec {
    /// Module display name (report key).
    pub name: String,
    /// Priority tag carried into the report (e.g., "P0").
    #[serde(default)]
    pub priority: String,
    /// Controller paths, relative to the controllers root.
    #[serde(default)]
    pub controllers: Vec<String>,
    /// Model names (file name without extension).
    #[serde(default)]
    pub models: Vec<String>,
    /// Page paths, relative to the pages root.
    #[serde(default)]
    pub pages: Vec<String>,
    /// Route path fragments owned by this module.
    #[serde(default)]
    pub route_patterns: Vec<String>,
    /// Whether the full CRUD surface is required.
    #[serde(default)]
    pub crud_required: bool,
    /// Required CRUD method names when `crud_required` is set.
    #[serde(default)]
    pub crud_methods: Vec<String>,
    /// Logical table name for migration/model cross-referencing.
    pub table_name: Option<String>,
}

/// Indicator rule for one capability.
///
/// `substrings` and `patterns` act as OR — the rule's primary group
/// matches if any element hits. `paired_with` is a second OR group
/// that must ALSO hit for the rule to fire (AND between groups, the
/// mechanism behind "delete verb paired with confirm dialog"). A
/// capability is true iff at least one of its rules fires.
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
pub struct IndicatorRule {
    /// Capability this rule detects.
    pub capability: String,
    /// Artifact kinds the rule applies to. Empty = every kind the
    /// capability itself applies to.
    #[serde(default)]
    pub kinds: Vec<String>,
    /// Literal substring indicators (OR).
    #[serde(default)]
    pub substrings: Vec<String>,
    /// Regex indicators (OR).
    #[serde(default)]
    pub patterns: Vec<String>,
    /// Secondary substring group that must also match (AND).
    #[serde(default)]
    pub paired_with: Vec<String>,
}

/// Rubric weight configuration.
///
/// Pure configuration, never mutated at run time — per-archetype
/// effective weights are computed by copying the base table and
/// zeroing the override set, producing a new table.
#[derive(Debug, Clone, Serialize, Deserialize, Default, schemars::JsonSchema)]
#[serde(default)]
pub struct RubricConfig {
    /// Base weight per capability name.
    pub base_weights: BTreeMap<String, u32>,
    /// Archetype name → capabilities zeroed for that archetype.
    pub overrides: BTreeMap<String, Vec<String>>,
}

/// Cross-reference check knobs.
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
#[serde(default)]
pub struct CrossRefConfig {
    /// Framework-managed columns excluded from schema/model matching.
    pub framework_columns: Vec<String>,
    /// Unrouted-method count above which an orphan finding is emitted.
    pub orphan_threshold: usize,
    /// Missing-column count at or below which the drift warning names
    /// each column; above it, the stronger exposure message is used.
    pub drift_warn_limit: usize,
}

impl Default for CrossRefConfig {
    fn default() -> Self {
        Self {
            framework_columns: default_framework_columns(),
            orphan_threshold: 3,
            drift_warn_limit: 5,
        }
    }
}

fn default_framework_columns() -> Vec<String> {
    ["id", "created_at", "updated_at", "deleted_at", "tenant_id", "remember_token"]
        .into_iter()
        .map(String::from)
        .collect()
}

/// Report severity thresholds.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, schemars::JsonSchema)]
#[serde(default)]
pub struct Thresholds {
    /// Module percentage below which the module is flagged critical.
    pub critical_below: u8,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self { critical_below: 70 }
    }
}

/// Where each artifact kind lives. Paths are joined by the source
/// index; the core performs no directory traversal.
#[derive(Debug, Clone, Serialize, Deserialize, Default, schemars::JsonSchema)]
#[serde(default)]
pub struct LayoutConfig {
    pub controllers_root: Option<String>,
    pub models_root: Option<String>,
    pub migrations_root: Option<String>,
    pub pages_root: Option<String>,
    pub route_table: Option<String>,
    /// Explicit migration file paths (relative to the migrations
    /// root). Supplied, not discovered.
    pub migration_paths: Vec<String>,
}

impl LayoutConfig {
    pub fn effective_controllers_root(&self) -> &str {
        self.controllers_root
            .as_deref()
            .unwrap_or("backend/app/Http/Controllers/Api/V1")
    }

    pub fn effective_models_root(&self) -> &str {
        self.models_root.as_deref().unwrap_or("backend/app/Models")
    }

    pub fn effective_migrations_root(&self) -> &str {
        self.migrations_root
            .as_deref()
            .unwrap_or("backend/database/migrations")
    }

    pub fn effective_pages_root(&self) -> &str {
        self.pages_root.as_deref().unwrap_or("frontend/src/pages")
    }

    pub fn effective_route_table(&self) -> &str {
        self.route_table.as_deref().unwrap_or("backend/routes/api.php")
    }
}

impl AuditSpec {
    /// Validate names and patterns. Called by every load path.
    pub fn validate(&self) -> Result<(), AuditError> {
        for rule in &self.vocabulary {
            if Capability::parse_str(&rule.capability).is_none() {
                return Err(AuditError::UnknownCapability {
                    name: rule.capability.clone(),
                });
            }
            for kind in &rule.kinds {
                if ArtifactKind::parse_str(kind).is_none() {
                    return Err(AuditError::InvalidSpec {
                        message: format!("unknown artifact kind '{kind}'"),
                    });
                }
            }
            for pattern in &rule.patterns {
                if let Err(e) = regex::Regex::new(pattern) {
                    return Err(AuditError::InvalidPattern {
                        pattern: pattern.clone(),
                        message: e.to_string(),
                    });
                }
            }
            if rule.substrings.is_empty() && rule.patterns.is_empty() {
                return Err(AuditError::InvalidSpec {
                    message: format!(
                        "indicator rule for '{}' has no substrings or patterns",
                        rule.capability
                    ),
                });
            }
        }

        for name in self.rubric.base_weights.keys() {
            if Capability::parse_str(name).is_none() {
                return Err(AuditError::UnknownCapability { name: name.clone() });
            }
        }
        for (archetype, zeroed) in &self.rubric.overrides {
            if PageArchetype::parse_str(archetype).is_none() {
                return Err(AuditError::UnknownArchetype {
                    name: archetype.clone(),
                });
            }
            for name in zeroed {
                if Capability::parse_str(name).is_none() {
                    return Err(AuditError::UnknownCapability { name: name.clone() });
                }
            }
        }

        Ok(())
    }
}
