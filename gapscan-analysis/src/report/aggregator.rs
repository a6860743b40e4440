//! Merges all per-module findings into a severity-classified report.
//!
//! Aggregation never fails on a per-module error: a missing artifact
//! is already a FAIL finding scoped to its module and check, and the
//! final report covers every configured module.

use serde::{Deserialize, Serialize};

use gapscan_core::config::Thresholds;
use gapscan_core::{CheckStatus, Finding, ModuleScore};

/// Raw results for one module, before aggregation.
#[derive(Debug, Clone)]
pub struct ModuleResult {
    pub module: String,
    pub priority: String,
    pub findings: Vec<Finding>,
    pub page_scores: Vec<ModuleScore>,
}

/// Aggregated status counts for one module.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModuleRollup {
    pub module: String,
    pub priority: String,
    pub pass: usize,
    pub warn: usize,
    pub fail: usize,
    pub info: usize,
    /// `round(100 * pass / (pass + warn + fail))`; INFO findings are
    /// advisory and excluded. 100 when no scored findings exist.
    pub percentage: u8,
    pub page_scores: Vec<ModuleScore>,
}

/// Global summary statistics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditSummary {
    pub module_count: usize,
    pub average_percentage: u8,
    pub total_pass: usize,
    pub total_warn: usize,
    pub total_fail: usize,
    pub total_info: usize,
    /// Modules at exactly 100%.
    pub perfect: Vec<String>,
    /// Modules at or above the critical threshold but below 100%.
    pub with_gaps: Vec<String>,
    /// Modules below the critical threshold.
    pub critical: Vec<String>,
}

/// The full audit report — the sole output contract. Serializable so
/// a downstream renderer (console, HTML, CI gate) can consume it
/// without re-parsing source.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditReport {
    pub findings: Vec<Finding>,
    pub modules: Vec<ModuleRollup>,
    pub summary: AuditSummary,
}

impl AuditReport {
    /// WARN and FAIL findings only — the issue list the original
    /// serialized export carried.
    pub fn issues(&self) -> Vec<&Finding> {
        self.findings
            .iter()
            .filter(|f| matches!(f.status, CheckStatus::Warn | CheckStatus::Fail))
            .collect()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Aggregate per-module results into the final report. Module order
/// is preserved from the input, which follows the configured module
/// order — reports diff cleanly across runs.
pub fn aggregate(results: Vec<ModuleResult>, thresholds: &Thresholds) -> AuditReport {
    let mut findings = Vec::new();
    let mut modules = Vec::with_capacity(results.len());

    for result in results {
        let pass = count(&result.findings, CheckStatus::Pass);
        let warn = count(&result.findings, CheckStatus::Warn);
        let fail = count(&result.findings, CheckStatus::Fail);
        let info = count(&result.findings, CheckStatus::Info);

        let scored = pass + warn + fail;
        let percentage = if scored > 0 {
            ((pass as f64 / scored as f64) * 100.0).round() as u8
        } else {
            100
        };

        modules.push(ModuleRollup {
            module: result.module,
            priority: result.priority,
            pass,
            warn,
            fail,
            info,
            percentage,
            page_scores: result.page_scores,
        });
        findings.extend(result.findings);
    }

    let module_count = modules.len();
    let average_percentage = if module_count > 0 {
        (modules.iter().map(|m| m.percentage as u32).sum::<u32>() as f64 / module_count as f64)
            .round() as u8
    } else {
        100
    };

    let mut perfect = Vec::new();
    let mut with_gaps = Vec::new();
    let mut critical = Vec::new();
    for m in &modules {
        if m.percentage == 100 {
            perfect.push(m.module.clone());
        } else if m.percentage >= thresholds.critical_below {
            with_gaps.push(m.module.clone());
        } else {
            critical.push(m.module.clone());
        }
    }

    let summary = AuditSummary {
        module_count,
        average_percentage,
        total_pass: modules.iter().map(|m| m.pass).sum(),
        total_warn: modules.iter().map(|m| m.warn).sum(),
        total_fail: modules.iter().map(|m| m.fail).sum(),
        total_info: modules.iter().map(|m| m.info).sum(),
        perfect,
        with_gaps,
        critical,
    };

    AuditReport {
        findings,
        modules,
        summary,
    }
}

fn count(findings: &[Finding], status: CheckStatus) -> usize {
    findings.iter().filter(|f| f.status == status).count()
}
