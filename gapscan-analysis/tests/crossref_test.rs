//! Tests for the cross-reference checks.

use gapscan_analysis::crossref::{bind_routes, link_frontend_calls, match_model_schema};
use gapscan_analysis::extract::frontend::extract_call_sites;
use gapscan_analysis::extract::routes::RouteTable;
use gapscan_core::{CheckStatus, CrossRefKind};

#[test]
fn test_route_missing_handler_is_single_fail() {
    let routes_src = r#"
Route::get('widgets', [WidgetController::class, 'index']);
Route::post('widgets', [WidgetController::class, 'store']);
Route::delete('widgets/{id}', [WidgetController::class, 'destroy']);
"#;
    let routes = RouteTable::new(routes_src);
    let controller_methods: Vec<String> =
        ["index", "store"].into_iter().map(String::from).collect();

    let findings = bind_routes(&routes, "WidgetController", &controller_methods, 3);

    let fails: Vec<_> = findings
        .iter()
        .filter(|f| f.status == CheckStatus::Fail)
        .collect();
    assert_eq!(fails.len(), 1, "exactly one FAIL");
    assert_eq!(fails[0].kind, CrossRefKind::RouteMissingHandler);
    assert!(fails[0].detail.contains("destroy"));
}

#[test]
fn test_all_bound_methods_present_passes() {
    let routes_src = "Route::get('widgets', [WidgetController::class, 'index']);";
    let routes = RouteTable::new(routes_src);
    let methods = vec!["index".to_string()];

    let findings = bind_routes(&routes, "WidgetController", &methods, 3);
    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].status, CheckStatus::Pass);
}

#[test]
fn test_orphans_reported_only_above_threshold() {
    let routes_src = "Route::get('widgets', [WidgetController::class, 'index']);";
    let routes = RouteTable::new(routes_src);

    // Three unrouted helpers: at the threshold, no orphan finding.
    let at_threshold: Vec<String> = ["index", "a", "b", "c"]
        .into_iter()
        .map(String::from)
        .collect();
    let findings = bind_routes(&routes, "WidgetController", &at_threshold, 3);
    assert!(!findings
        .iter()
        .any(|f| f.kind == CrossRefKind::OrphanHandler));

    // Four unrouted helpers: above the threshold, one INFO.
    let above: Vec<String> = ["index", "a", "b", "c", "d"]
        .into_iter()
        .map(String::from)
        .collect();
    let findings = bind_routes(&routes, "WidgetController", &above, 3);
    let orphans: Vec<_> = findings
        .iter()
        .filter(|f| f.kind == CrossRefKind::OrphanHandler)
        .collect();
    assert_eq!(orphans.len(), 1);
    assert_eq!(orphans[0].status, CheckStatus::Info);
    assert!(orphans[0].detail.contains('4'));
}

#[test]
fn test_frontend_call_without_route_fails() {
    // Scenario: the page calls GET /widgets/42 and the route table
    // never mentions the widgets segment.
    let page = "const load = () => api.get(`/widgets/${id}`);";
    let sites = extract_call_sites(page);
    let routes = RouteTable::new("Route::get('customers', [CustomerController::class, 'index']);");

    let findings = link_frontend_calls(&sites, &routes);
    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].kind, CrossRefKind::FrontendCallNoRoute);
    assert_eq!(findings[0].status, CheckStatus::Fail);
    assert!(findings[0].detail.contains("GET /widgets/{id}"));
}

#[test]
fn test_segment_match_tolerates_prefix_wrapping() {
    // The route lives under a group prefix; segment containment still
    // links it.
    let page = "api.get('/widgets');";
    let sites = extract_call_sites(page);
    let routes = RouteTable::new(
        "Route::prefix('v1')->group(function () { Route::apiResource('widgets', WidgetController::class); });",
    );

    let findings = link_frontend_calls(&sites, &routes);
    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].status, CheckStatus::Pass);
}

#[test]
fn test_no_call_sites_no_findings() {
    let routes = RouteTable::new("");
    assert!(link_frontend_calls(&[], &routes).is_empty());
}

#[test]
fn test_schema_drift_warns_and_names_columns() {
    // Scenario: migration declares archived_flag beyond the fillable
    // list — one WARN naming it.
    let columns: Vec<String> = ["name", "email", "phone", "archived_flag"]
        .into_iter()
        .map(String::from)
        .collect();
    let fillable: Vec<String> = ["name", "email", "phone"]
        .into_iter()
        .map(String::from)
        .collect();

    let finding = match_model_schema("Customer", &columns, &fillable, 5);
    assert_eq!(finding.kind, CrossRefKind::SchemaFillableDrift);
    assert_eq!(finding.status, CheckStatus::Warn);
    assert!(finding.detail.contains("archived_flag"));
}

#[test]
fn test_schema_aligned_passes() {
    let columns: Vec<String> = ["name"].into_iter().map(String::from).collect();
    let fillable = columns.clone();
    let finding = match_model_schema("Customer", &columns, &fillable, 5);
    assert_eq!(finding.status, CheckStatus::Pass);
}

#[test]
fn test_large_drift_uses_exposure_wording_still_warn() {
    let columns: Vec<String> = (0..7).map(|i| format!("col_{i}")).collect();
    let fillable: Vec<String> = Vec::new();
    let finding = match_model_schema("Customer", &columns, &fillable, 5);
    assert_eq!(finding.status, CheckStatus::Warn, "heuristic stays WARN");
    assert!(finding.detail.contains("mass-assignment"));
    assert!(
        !finding.detail.contains("col_0"),
        "large drift does not enumerate columns"
    );
}
