//! Finding records — the universal output type of every check.

use serde::{Deserialize, Serialize};

/// Status of a single check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CheckStatus {
    Pass,
    Warn,
    Fail,
    Info,
}

impl CheckStatus {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Pass => "PASS",
            Self::Warn => "WARN",
            Self::Fail => "FAIL",
            Self::Info => "INFO",
        }
    }

    /// Whether this status counts toward the per-module percentage.
    /// INFO findings are advisory and excluded from the denominator.
    pub fn is_scored(&self) -> bool {
        !matches!(self, Self::Info)
    }
}

impl std::fmt::Display for CheckStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Kinds of cross-reference discrepancy between independently authored
/// artifacts describing the same logical entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CrossRefKind {
    /// A route binds a controller method that does not exist. The most
    /// severe kind — the route errors at request time.
    RouteMissingHandler,
    /// A controller method no route ever binds to.
    OrphanHandler,
    /// A frontend call site whose path segment occurs nowhere in the
    /// route table.
    FrontendCallNoRoute,
    /// Migration columns absent from the model's mass-assignable list.
    SchemaFillableDrift,
}

impl CrossRefKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::RouteMissingHandler => "route_missing_handler",
            Self::OrphanHandler => "orphan_handler",
            Self::FrontendCallNoRoute => "frontend_call_no_route",
            Self::SchemaFillableDrift => "schema_fillable_drift",
        }
    }
}

/// A cross-reference discrepancy, before it is folded into the report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrossRefFinding {
    pub kind: CrossRefKind,
    pub status: CheckStatus,
    pub detail: String,
}

/// One check result, scoped to a module. The report is a flat list of
/// these plus summary counts — stable enough for a downstream renderer
/// (console, HTML, CI gate) to consume without re-parsing source.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Finding {
    pub module: String,
    pub check: String,
    pub status: CheckStatus,
    pub detail: String,
}

impl Finding {
    pub fn new(
        module: impl Into<String>,
        check: impl Into<String>,
        status: CheckStatus,
        detail: impl Into<String>,
    ) -> Self {
        Self {
            module: module.into(),
            check: check.into(),
            status,
            detail: detail.into(),
        }
    }

    /// Fold a cross-reference finding into the report record shape.
    pub fn from_crossref(module: impl Into<String>, check: impl Into<String>, f: CrossRefFinding) -> Self {
        Self::new(module, check, f.status, f.detail)
    }
}
