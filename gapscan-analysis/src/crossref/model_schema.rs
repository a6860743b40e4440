//! Migration columns ↔ model mass-assignable fields.

use gapscan_core::{CheckStatus, CrossRefFinding, CrossRefKind};

/// Compare the migration's declared columns against the model's
/// mass-assignable list.
///
/// The difference is reported as WARN in both tiers, never FAIL: a
/// field legitimately protected from mass assignment is statically
/// indistinguishable from an oversight. Above `drift_warn_limit` the
/// stronger exposure wording is used instead of naming each column.
pub fn match_model_schema(
    model_name: &str,
    migration_columns: &[String],
    fillable: &[String],
    drift_warn_limit: usize,
) -> CrossRefFinding {
    let missing: Vec<&String> = migration_columns
        .iter()
        .filter(|col| !fillable.contains(col))
        .collect();

    if missing.is_empty() {
        CrossRefFinding {
            kind: CrossRefKind::SchemaFillableDrift,
            status: CheckStatus::Pass,
            detail: format!(
                "{} column(s), {} fillable — aligned for {}",
                migration_columns.len(),
                fillable.len(),
                model_name
            ),
        }
    } else if missing.len() <= drift_warn_limit {
        CrossRefFinding {
            kind: CrossRefKind::SchemaFillableDrift,
            status: CheckStatus::Warn,
            detail: format!(
                "{} migration column(s) not in {} fillable: {}",
                missing.len(),
                model_name,
                missing
                    .iter()
                    .map(|s| s.as_str())
                    .collect::<Vec<_>>()
                    .join(", ")
            ),
        }
    } else {
        CrossRefFinding {
            kind: CrossRefKind::SchemaFillableDrift,
            status: CheckStatus::Warn,
            detail: format!(
                "{} column(s) outside {} fillable (possible mass-assignment exposure risk)",
                missing.len(),
                model_name
            ),
        }
    }
}
