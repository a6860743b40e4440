//! End-to-end pipeline tests over an in-memory artifact source.

use gapscan_analysis::audit::AuditPipeline;
use gapscan_analysis::source::MemorySource;
use gapscan_core::{AuditSpec, CheckStatus};

const ROUTES: &str = r#"
Route::get('widgets', [WidgetController::class, 'index']);
Route::post('widgets', [WidgetController::class, 'store']);
Route::get('widgets/{id}', [WidgetController::class, 'show']);
Route::put('widgets/{id}', [WidgetController::class, 'update']);
Route::delete('widgets/{id}', [WidgetController::class, 'destroy']);
"#;

const WIDGET_CONTROLLER: &str = r#"
class WidgetController extends Controller
{
    public function index(Request $request)
    {
        $widgets = Widget::query()->paginate(15);
        return response()->json($widgets);
    }

    public function store(Request $request)
    {
        $data = $request->validate(['name' => 'required']);
        DB::beginTransaction();
        try {
            $widget = Widget::create($data);
            DB::commit();
            return response()->json($widget, 201);
        } catch (\Throwable $e) {
            DB::rollBack();
            return response()->json(['error' => 'failed'], 500);
        }
    }

    public function show(Widget $widget)
    {
        return response()->json($widget);
    }

    public function update(Request $request, Widget $widget)
    {
        $widget->update($request->validate(['name' => 'required']));
        return response()->json($widget);
    }

    public function destroy(Widget $widget)
    {
    }
}
"#;

const WIDGET_MODEL: &str = r#"
class Widget extends Model
{
    protected $fillable = ['name', 'email', 'phone'];

    public function owner()
    {
        return $this->belongsTo(User::class);
    }
}
"#;

const WIDGET_MIGRATION: &str = r#"
Schema::create('widgets', function (Blueprint $table) {
    $table->id();
    $table->string('name');
    $table->string('email');
    $table->string('phone');
    $table->boolean('archived_flag');
    $table->timestamp('created_at');
});
"#;

const WIDGET_PAGE: &str = r#"
import { api } from '@/lib/api';
import { toast } from 'sonner';

export function WidgetsPage() {
    const { data, isLoading } = useQuery({ queryFn: () => api.get('/widgets') });
    const del = useMutation({
        mutationFn: (id) => api.delete(`/widgets/${id}`),
        onError: () => toast.error('failed'),
    });
    if (isLoading) return <Skeleton />;
    if (!data?.length) return <EmptyState />;
    return <AlertDialog onClick={() => del.mutate(id)}><Input name="search" /></AlertDialog>;
}
"#;

fn spec_toml() -> String {
    let modules = r#"
[[modules]]
name = "Widgets"
priority = "P0"
controllers = ["WidgetController.php"]
models = ["Widget"]
pages = ["WidgetsPage.tsx"]
route_patterns = ["widgets"]
crud_required = true
crud_methods = ["index", "store", "show", "update", "destroy"]
table_name = "widgets"

[[modules]]
name = "Gadgets"
priority = "P1"
controllers = ["GadgetController.php"]
models = []
pages = ["GadgetsPage.tsx"]
route_patterns = ["gadgets"]
crud_required = false

[layout]
migration_paths = ["2024_01_01_000000_create_widgets_table.php"]
"#;
    format!("{}\n{}", modules, gapscan_core::config::BUILTIN_SPEC)
}

fn memory_app() -> MemorySource {
    MemorySource::new()
        .with("backend/routes/api.php", ROUTES)
        .with(
            "backend/app/Http/Controllers/Api/V1/WidgetController.php",
            WIDGET_CONTROLLER,
        )
        .with("backend/app/Models/Widget.php", WIDGET_MODEL)
        .with(
            "backend/database/migrations/2024_01_01_000000_create_widgets_table.php",
            WIDGET_MIGRATION,
        )
        .with("frontend/src/pages/WidgetsPage.tsx", WIDGET_PAGE)
}

fn pipeline() -> AuditPipeline {
    let spec = AuditSpec::from_toml(&spec_toml()).expect("spec parses");
    AuditPipeline::new(spec).expect("pipeline compiles")
}

#[test]
fn test_empty_handler_fails_and_suppresses_body_pass() {
    // Scenario: destroy has an empty body — exactly one FAIL names
    // it, and no "methods with body" PASS is emitted alongside.
    let report = pipeline().run(&memory_app());

    let empties: Vec<_> = report
        .findings
        .iter()
        .filter(|f| f.module == "Widgets" && f.check.contains("empty methods"))
        .collect();
    assert_eq!(empties.len(), 1);
    assert_eq!(empties[0].status, CheckStatus::Fail);
    assert!(empties[0].detail.contains("destroy"));

    assert!(!report
        .findings
        .iter()
        .any(|f| f.module == "Widgets" && f.check.contains("methods with body")));
}

#[test]
fn test_missing_artifacts_degrade_to_findings() {
    // The Gadgets module has no artifacts at all; the run still
    // covers it with FAIL findings and Widgets is unaffected.
    let report = pipeline().run(&memory_app());

    assert_eq!(report.summary.module_count, 2);
    let gadget_fails: Vec<_> = report
        .findings
        .iter()
        .filter(|f| f.module == "Gadgets" && f.status == CheckStatus::Fail)
        .collect();
    assert!(gadget_fails.iter().any(|f| f.check == "Controller GadgetController.php"));
    assert!(gadget_fails.iter().any(|f| f.check == "Page GadgetsPage.tsx"));
}

#[test]
fn test_crud_completeness_passes() {
    let report = pipeline().run(&memory_app());
    let crud = report
        .findings
        .iter()
        .find(|f| f.module == "Widgets" && f.check == "CRUD completeness")
        .expect("crud finding");
    assert_eq!(crud.status, CheckStatus::Pass);
    assert_eq!(crud.detail, "5/5 methods");
}

#[test]
fn test_schema_drift_warn_emitted() {
    let report = pipeline().run(&memory_app());
    let drift = report
        .findings
        .iter()
        .find(|f| f.check == "Migration <-> Model Widget")
        .expect("drift finding");
    assert_eq!(drift.status, CheckStatus::Warn);
    assert!(drift.detail.contains("archived_flag"));
}

#[test]
fn test_route_bindings_all_resolve() {
    let report = pipeline().run(&memory_app());
    let bind = report
        .findings
        .iter()
        .find(|f| f.check == "Routes -> WidgetController")
        .expect("binding finding");
    assert_eq!(bind.status, CheckStatus::Pass);
}

#[test]
fn test_frontend_calls_link_to_routes() {
    let report = pipeline().run(&memory_app());
    let link = report
        .findings
        .iter()
        .find(|f| f.check == "Frontend -> Backend WidgetsPage.tsx")
        .expect("link finding");
    assert_eq!(link.status, CheckStatus::Pass);
}

#[test]
fn test_page_scores_present() {
    let report = pipeline().run(&memory_app());
    let widgets = report
        .modules
        .iter()
        .find(|m| m.module == "Widgets")
        .expect("widgets rollup");
    assert_eq!(widgets.page_scores.len(), 1);
    let score = &widgets.page_scores[0];
    assert!(score.percentage > 0);
    assert!(score.percentage <= 100);
}

#[test]
fn test_report_is_deterministic() {
    let pipe = pipeline();
    let app = memory_app();
    let a = pipe.run(&app).to_json().expect("json");
    let b = pipe.run(&app).to_json().expect("json");
    assert_eq!(a, b, "identical inputs must produce identical reports");
}

#[test]
fn test_module_filter_is_case_insensitive() {
    let report = pipeline().run_filtered(&memory_app(), Some("widg"));
    assert_eq!(report.summary.module_count, 1);
    assert_eq!(report.modules[0].module, "Widgets");
}

#[test]
fn test_missing_route_table_scoped_fail() {
    // Drop the route table: every module with route patterns gets a
    // scoped FAIL, nothing aborts.
    let app = MemorySource::new().with(
        "backend/app/Http/Controllers/Api/V1/WidgetController.php",
        WIDGET_CONTROLLER,
    );
    let report = pipeline().run(&app);
    let route_fails: Vec<_> = report
        .findings
        .iter()
        .filter(|f| f.check == "Route table" && f.status == CheckStatus::Fail)
        .collect();
    assert_eq!(route_fails.len(), 2);
}

#[test]
fn test_issues_export_excludes_pass_and_info() {
    let report = pipeline().run(&memory_app());
    for issue in report.issues() {
        assert!(matches!(issue.status, CheckStatus::Warn | CheckStatus::Fail));
    }
}
