//! Deep backend pass: controller bodies, validation, fault handling,
//! models, CRUD completeness.

use gapscan_core::config::ModuleSpec;
use gapscan_core::{ArtifactKind, Capability, CheckStatus, Finding};

use crate::capabilities::CapabilityDetector;
use crate::extract::controller::{self, ValidationStyle};
use crate::extract::model;
use crate::source::SourceIndex;

/// What the cross-reference pass needs from each analyzed controller.
#[derive(Debug, Clone)]
pub struct ControllerSummary {
    pub class_name: Option<String>,
    pub method_names: Vec<String>,
}

/// Output of the backend pass for one module.
#[derive(Debug, Clone, Default)]
pub struct BackendOutcome {
    pub findings: Vec<Finding>,
    pub controllers: Vec<ControllerSummary>,
}

fn basename(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}

/// Analyze a module's backend artifacts.
pub fn analyze_backend(
    module: &ModuleSpec,
    index: &SourceIndex<'_>,
    detector: &CapabilityDetector,
) -> BackendOutcome {
    let mut out = BackendOutcome::default();
    let mut all_method_names: Vec<String> = Vec::new();

    for rel in &module.controllers {
        let name = basename(rel);
        let Some(artifact) = index.controller(rel) else {
            out.findings.push(Finding::new(
                &module.name,
                format!("Controller {name}"),
                CheckStatus::Fail,
                "file not found",
            ));
            continue;
        };

        let facts = controller::extract_controller(&artifact.text);
        let methods = &facts.methods;
        let total = methods.len();

        let empty: Vec<&str> = methods
            .iter()
            .filter(|m| m.is_empty)
            .map(|m| m.name.as_str())
            .collect();
        let todos: Vec<&str> = methods
            .iter()
            .filter(|m| m.has_todo_marker && !m.is_empty)
            .map(|m| m.name.as_str())
            .collect();
        let unterminated: Vec<&str> = methods
            .iter()
            .filter(|m| m.unterminated)
            .map(|m| m.name.as_str())
            .collect();

        // An empty handler is always a FAIL, whatever else the file
        // contains.
        if !empty.is_empty() {
            out.findings.push(Finding::new(
                &module.name,
                format!("Controller {name}: empty methods"),
                CheckStatus::Fail,
                format!("{} ({}/{total})", empty.join(", "), empty.len()),
            ));
        } else if !todos.is_empty() {
            out.findings.push(Finding::new(
                &module.name,
                format!("Controller {name}: TODOs"),
                CheckStatus::Warn,
                format!("{} carry TODO markers", todos.join(", ")),
            ));
        } else {
            let avg = if total > 0 {
                methods.iter().map(|m| m.effective_line_count).sum::<usize>() / total
            } else {
                0
            };
            out.findings.push(Finding::new(
                &module.name,
                format!("Controller {name}: {total} methods with body"),
                CheckStatus::Pass,
                format!("avg {avg} lines/method"),
            ));
        }

        if !unterminated.is_empty() {
            out.findings.push(Finding::new(
                &module.name,
                format!("Controller {name}: unterminated body"),
                CheckStatus::Warn,
                format!("unbalanced braces in {}", unterminated.join(", ")),
            ));
        }

        match facts.validation {
            ValidationStyle::Inline => out.findings.push(Finding::new(
                &module.name,
                "Validation",
                CheckStatus::Pass,
                format!("inline validate ({} rules)", facts.rule_count),
            )),
            ValidationStyle::FormRequest => out.findings.push(Finding::new(
                &module.name,
                "Validation",
                CheckStatus::Pass,
                "form request + rules",
            )),
            ValidationStyle::HelperValidator => out.findings.push(Finding::new(
                &module.name,
                "Validation",
                CheckStatus::Pass,
                "Validator::make (helper method)",
            )),
            ValidationStyle::ValidatedOnly => out.findings.push(Finding::new(
                &module.name,
                "Validation",
                CheckStatus::Warn,
                "uses validated() but no visible rules in controller",
            )),
            ValidationStyle::None => out.findings.push(Finding::new(
                &module.name,
                "Validation",
                CheckStatus::Warn,
                "no explicit validation found",
            )),
        }

        let caps = detector.detect(&artifact.text, ArtifactKind::Controller);
        if caps.has(Capability::FaultHandling) && caps.has(Capability::TransactionalIntegrity) {
            out.findings.push(Finding::new(
                &module.name,
                "Error handling",
                CheckStatus::Pass,
                "try/catch + transaction boundary",
            ));
        } else if caps.has(Capability::FaultHandling) {
            out.findings.push(Finding::new(
                &module.name,
                "Error handling",
                CheckStatus::Pass,
                "try/catch (no explicit transaction)",
            ));
        } else {
            out.findings.push(Finding::new(
                &module.name,
                "Error handling",
                CheckStatus::Warn,
                if facts.has_try {
                    "try without catch"
                } else {
                    "no try/catch"
                },
            ));
        }

        all_method_names.extend(methods.iter().map(|m| m.name.clone()));
        out.controllers.push(ControllerSummary {
            class_name: facts.class_name,
            method_names: controller::method_names(&artifact.text),
        });
    }

    for model_name in &module.models {
        let Some(artifact) = index.model(model_name) else {
            out.findings.push(Finding::new(
                &module.name,
                format!("Model {model_name}"),
                CheckStatus::Fail,
                "file not found",
            ));
            continue;
        };

        let facts = model::extract_model(&artifact.text);
        if facts.has_fillable || facts.has_guarded {
            let mut parts: Vec<String> = Vec::new();
            parts.push(if facts.has_fillable {
                format!("{} fillable", facts.fillable.len())
            } else {
                "guarded".to_string()
            });
            parts.push(if facts.relationships.is_empty() {
                "no relationships".to_string()
            } else {
                facts.relationships.join("+")
            });
            if facts.has_casts {
                parts.push("casts".to_string());
            }
            if facts.has_tenant_scope {
                parts.push("tenant-scoped".to_string());
            }
            out.findings.push(Finding::new(
                &module.name,
                format!("Model {model_name}"),
                CheckStatus::Pass,
                parts.join(", "),
            ));
        } else {
            out.findings.push(Finding::new(
                &module.name,
                format!("Model {model_name}"),
                CheckStatus::Warn,
                "neither fillable nor guarded declared",
            ));
        }
    }

    // CRUD completeness is judged across every controller in the
    // module, since resource methods may be split between files.
    if module.crud_required && !module.crud_methods.is_empty() {
        let missing: Vec<&str> = module
            .crud_methods
            .iter()
            .filter(|m| !all_method_names.contains(m))
            .map(|s| s.as_str())
            .collect();
        if missing.is_empty() {
            out.findings.push(Finding::new(
                &module.name,
                "CRUD completeness",
                CheckStatus::Pass,
                format!("{0}/{0} methods", module.crud_methods.len()),
            ));
        } else {
            out.findings.push(Finding::new(
                &module.name,
                "CRUD completeness",
                CheckStatus::Fail,
                format!("missing: {}", missing.join(", ")),
            ));
        }
    }

    out
}
