//! Frontend call sites ↔ backend route table.

use gapscan_core::{CheckStatus, CrossRefFinding, CrossRefKind};

use crate::extract::frontend::CallSite;
use crate::extract::routes::RouteTable;

/// Check every call site's primary path segment for literal presence
/// in the route table.
///
/// Segment-level matching is intentionally coarse: it tolerates
/// prefix and middleware wrapping differences in the declaration
/// while still catching entirely absent endpoints.
pub fn link_frontend_calls(
    call_sites: &[CallSite],
    routes: &RouteTable<'_>,
) -> Vec<CrossRefFinding> {
    if call_sites.is_empty() {
        return Vec::new();
    }

    let unrouted: Vec<String> = call_sites
        .iter()
        .filter(|cs| !routes.contains_segment(cs.primary_segment()))
        .map(|cs| format!("{} {}", cs.method, cs.path))
        .collect();

    if unrouted.is_empty() {
        vec![CrossRefFinding {
            kind: CrossRefKind::FrontendCallNoRoute,
            status: CheckStatus::Pass,
            detail: format!("{} endpoint(s) match declared routes", call_sites.len()),
        }]
    } else {
        let shown: Vec<&str> = unrouted.iter().map(String::as_str).take(3).collect();
        vec![CrossRefFinding {
            kind: CrossRefKind::FrontendCallNoRoute,
            status: CheckStatus::Fail,
            detail: format!(
                "{} endpoint(s) with no declared route: {}",
                unrouted.len(),
                shown.join(", ")
            ),
        }]
    }
}
