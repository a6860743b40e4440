//! Data-model extraction: mass-assignable fields, relationships,
//! casts, tenant scoping.

use std::sync::LazyLock;

use regex::Regex;

static FILLABLE_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\$fillable\s*=\s*\[([\s\S]*?)\]").expect("fillable block pattern")
});

static QUOTED_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"'(\w+)'").expect("quoted name pattern"));

static CASTS_DECL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\$casts|\bcasts\b.*=>|protected\s+function\s+casts").expect("casts pattern")
});

static TENANT_SCOPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"tenant_id|BelongsToTenant|ScopedByTenant|bootTenantScoped")
        .expect("tenant scope pattern")
});

/// Relationship kinds recognized on a model.
const RELATIONSHIP_KINDS: &[&str] = &[
    "belongsTo",
    "hasMany",
    "hasOne",
    "belongsToMany",
    "morphMany",
];

/// Extracted facts for one model artifact.
#[derive(Debug, Clone)]
pub struct ModelFacts {
    /// Mass-assignable field names, in declaration order. Empty when
    /// no `$fillable` block exists.
    pub fillable: Vec<String>,
    pub has_fillable: bool,
    pub has_guarded: bool,
    /// Relationship kinds present, in recognition order.
    pub relationships: Vec<&'static str>,
    pub has_casts: bool,
    pub has_tenant_scope: bool,
}

/// Extract model facts from raw text.
pub fn extract_model(text: &str) -> ModelFacts {
    let fillable: Vec<String> = FILLABLE_BLOCK
        .captures(text)
        .map(|c| {
            QUOTED_NAME
                .captures_iter(c.get(1).map_or("", |m| m.as_str()))
                .map(|n| n[1].to_string())
                .collect()
        })
        .unwrap_or_default();

    let relationships: Vec<&'static str> = RELATIONSHIP_KINDS
        .iter()
        .copied()
        .filter(|kind| text.contains(&format!("{kind}(")) || text.contains(&format!("{kind} (")))
        .collect();

    ModelFacts {
        has_fillable: !fillable.is_empty() || text.contains("$fillable"),
        has_guarded: text.contains("$guarded"),
        fillable,
        relationships,
        has_casts: CASTS_DECL.is_match(text),
        has_tenant_scope: TENANT_SCOPE.is_match(text),
    }
}
