//! Tests for audit spec loading and validation.

use gapscan_core::config::{self, AuditSpec};
use gapscan_core::{ArtifactKind, AuditError, Capability, PageArchetype};

#[test]
fn test_builtin_spec_loads_successfully() {
    let spec = AuditSpec::builtin().expect("builtin spec should parse");
    assert!(
        spec.vocabulary.len() >= 14,
        "expected a rule for every capability, got {}",
        spec.vocabulary.len()
    );
    assert_eq!(spec.rubric.base_weights.len(), 12);
    assert_eq!(spec.modules.len(), 0, "builtin spec carries no modules");
    assert_eq!(spec.thresholds.critical_below, 70);
    assert_eq!(spec.crossref.orphan_threshold, 3);
    assert_eq!(spec.crossref.drift_warn_limit, 5);
}

#[test]
fn test_builtin_framework_columns() {
    let spec = AuditSpec::builtin().expect("builtin spec should parse");
    for col in ["id", "created_at", "updated_at", "deleted_at", "tenant_id"] {
        assert!(
            spec.crossref.framework_columns.iter().any(|c| c == col),
            "missing framework column {col}"
        );
    }
}

#[test]
fn test_single_spec_loads_from_toml() {
    let toml = r#"
[[modules]]
name = "Customers"
priority = "P0"
controllers = ["CustomerController.php"]
models = ["Customer"]
pages = ["CustomersPage.tsx"]
route_patterns = ["customers"]
crud_required = true
crud_methods = ["index", "store", "show", "update", "destroy"]
table_name = "customers"

[[vocabulary]]
capability = "data_fetch"
kinds = ["page"]
substrings = ["useQuery"]

[rubric.base_weights]
data_fetch = 15
"#;

    let spec = AuditSpec::from_toml(toml).expect("should parse");
    assert_eq!(spec.modules.len(), 1);
    assert_eq!(spec.modules[0].name, "Customers");
    assert_eq!(spec.modules[0].crud_methods.len(), 5);
    assert_eq!(spec.modules[0].table_name.as_deref(), Some("customers"));
    assert_eq!(spec.vocabulary.len(), 1);
    assert_eq!(spec.rubric.base_weights["data_fetch"], 15);
}

#[test]
fn test_unknown_capability_rejected() {
    let toml = r#"
[[vocabulary]]
capability = "telepathy"
substrings = ["mindread"]
"#;
    let err = AuditSpec::from_toml(toml).expect_err("should reject");
    assert!(matches!(err, AuditError::UnknownCapability { .. }));
}

#[test]
fn test_unknown_archetype_rejected() {
    let toml = r#"
[rubric.overrides]
wizard = ["mutation"]
"#;
    let err = AuditSpec::from_toml(toml).expect_err("should reject");
    assert!(matches!(err, AuditError::UnknownArchetype { .. }));
}

#[test]
fn test_bad_indicator_regex_rejected() {
    let toml = r#"
[[vocabulary]]
capability = "data_fetch"
patterns = ["(unclosed"]
"#;
    let err = AuditSpec::from_toml(toml).expect_err("should reject");
    assert!(matches!(err, AuditError::InvalidPattern { .. }));
}

#[test]
fn test_rule_without_indicators_rejected() {
    let toml = r#"
[[vocabulary]]
capability = "data_fetch"
"#;
    let err = AuditSpec::from_toml(toml).expect_err("should reject");
    assert!(matches!(err, AuditError::InvalidSpec { .. }));
}

#[test]
fn test_layout_defaults() {
    let spec = AuditSpec::default();
    assert_eq!(
        spec.layout.effective_route_table(),
        "backend/routes/api.php"
    );
    assert_eq!(spec.layout.effective_models_root(), "backend/app/Models");
    assert_eq!(spec.layout.effective_pages_root(), "frontend/src/pages");
}

#[test]
fn test_capability_name_round_trip() {
    for cap in Capability::all() {
        assert_eq!(Capability::parse_str(cap.name()), Some(*cap));
    }
    assert_eq!(Capability::parse_str("nope"), None);
}

#[test]
fn test_archetype_name_round_trip() {
    for archetype in PageArchetype::all() {
        assert_eq!(PageArchetype::parse_str(archetype.name()), Some(*archetype));
    }
    assert_eq!(PageArchetype::all().len(), 16);
}

#[test]
fn test_kind_awareness() {
    assert!(Capability::TransactionalIntegrity.applies_to(ArtifactKind::Controller));
    assert!(!Capability::TransactionalIntegrity.applies_to(ArtifactKind::Page));
    assert!(Capability::FaultHandling.applies_to(ArtifactKind::Page));
    assert!(Capability::FaultHandling.applies_to(ArtifactKind::Controller));
    assert!(Capability::Pagination.applies_to(ArtifactKind::Page));
    assert!(!Capability::Pagination.applies_to(ArtifactKind::Controller));
}

#[test]
fn test_error_codes_are_stable() {
    use gapscan_core::ErrorCode;
    let err = AuditError::ArtifactNotFound {
        path: "x.php".to_string(),
    };
    assert_eq!(err.error_code(), "AUDIT_ARTIFACT_NOT_FOUND");

    let err = AuditError::UnterminatedBody {
        method: "store".to_string(),
        path: "x.php".to_string(),
    };
    assert_eq!(err.error_code(), "AUDIT_UNTERMINATED_BODY");
    assert!(err.to_string().contains("store"));
}

#[test]
fn test_json_schema_generation() {
    let schema = config::generate_json_schema();
    let json = serde_json::to_string(&schema).expect("schema serializes");
    assert!(json.contains("ModuleSpec"));
    assert!(json.contains("IndicatorRule"));
}
