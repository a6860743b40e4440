//! Route table ↔ controller method binding.

use gapscan_core::{CheckStatus, CrossRefFinding, CrossRefKind};

use crate::extract::routes::RouteTable;

/// Methods the route binder never counts as orphans: framework hooks
/// that are not request handlers.
const NON_HANDLER_METHODS: &[&str] = &["__construct", "rules", "authorize"];

/// Cross-reference the route table against one controller's declared
/// methods, in both directions.
///
/// A route binding a method the controller does not declare is the
/// single most severe finding kind — that route errors at request
/// time. Unrouted methods are only reported above `orphan_threshold`,
/// and only as INFO: they are likely private helpers.
pub fn bind_routes(
    routes: &RouteTable<'_>,
    class_name: &str,
    controller_methods: &[String],
    orphan_threshold: usize,
) -> Vec<CrossRefFinding> {
    let mut findings = Vec::new();

    let bound = routes.bound_methods(class_name);

    let missing: Vec<&String> = bound
        .iter()
        .filter(|m| !controller_methods.contains(m))
        .collect();
    if !missing.is_empty() {
        findings.push(CrossRefFinding {
            kind: CrossRefKind::RouteMissingHandler,
            status: CheckStatus::Fail,
            detail: format!(
                "{} route-bound method(s) absent from {}: {}",
                missing.len(),
                class_name,
                missing
                    .iter()
                    .map(|s| s.as_str())
                    .collect::<Vec<_>>()
                    .join(", ")
            ),
        });
    } else if !bound.is_empty() {
        findings.push(CrossRefFinding {
            kind: CrossRefKind::RouteMissingHandler,
            status: CheckStatus::Pass,
            detail: format!("{} route(s), every bound method exists", bound.len()),
        });
    }

    let orphans: Vec<&String> = controller_methods
        .iter()
        .filter(|m| !bound.contains(m) && !NON_HANDLER_METHODS.contains(&m.as_str()))
        .collect();
    if orphans.len() > orphan_threshold {
        findings.push(CrossRefFinding {
            kind: CrossRefKind::OrphanHandler,
            status: CheckStatus::Info,
            detail: format!(
                "{} method(s) in {} have no route binding (may be helpers)",
                orphans.len(),
                class_name
            ),
        });
    }

    findings
}
