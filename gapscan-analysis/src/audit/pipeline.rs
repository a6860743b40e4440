//! The audit pipeline: static analysis over every configured module.
//!
//! Per-module analysis is a pure function of the loaded artifacts, so
//! modules fan out across rayon workers; the ordered collect keeps
//! the report byte-identical to a sequential run.

use rayon::prelude::*;
use tracing::{debug, info};

use gapscan_core::config::{AuditSpec, ModuleSpec};
use gapscan_core::{ArtifactSource, AuditError, CheckStatus, CrossRefKind, Finding};

use crate::capabilities::CapabilityDetector;
use crate::crossref;
use crate::extract::frontend::CallSite;
use crate::extract::migration;
use crate::extract::model;
use crate::extract::routes::RouteTable;
use crate::report::{self, AuditReport, ModuleResult};
use crate::rubric::RubricWeights;
use crate::source::SourceIndex;

use super::backend;
use super::frontend;

/// One configured audit, ready to run against any artifact source.
pub struct AuditPipeline {
    spec: AuditSpec,
    detector: CapabilityDetector,
    rubric: RubricWeights,
}

impl AuditPipeline {
    /// Compile a pipeline from a validated spec.
    pub fn new(spec: AuditSpec) -> Result<Self, AuditError> {
        let detector = CapabilityDetector::from_spec(&spec)?;
        let rubric = RubricWeights::from_config(&spec.rubric)?;
        Ok(Self {
            spec,
            detector,
            rubric,
        })
    }

    pub fn spec(&self) -> &AuditSpec {
        &self.spec
    }

    /// Run the audit over every configured module.
    pub fn run(&self, source: &dyn ArtifactSource) -> AuditReport {
        self.run_filtered(source, None)
    }

    /// Run the audit over modules whose name contains `filter`
    /// (case-insensitive). `None` runs everything.
    pub fn run_filtered(&self, source: &dyn ArtifactSource, filter: Option<&str>) -> AuditReport {
        let index = SourceIndex::new(source, &self.spec.layout);

        // The route table is shared by every module's cross-reference
        // pass; load it once.
        let route_artifact = index.route_table();
        let route_text = route_artifact.as_ref().map(|a| a.text.as_str());

        let selected: Vec<&ModuleSpec> = match filter {
            Some(f) => {
                let needle = f.to_lowercase();
                self.spec
                    .modules
                    .iter()
                    .filter(|m| m.name.to_lowercase().contains(&needle))
                    .collect()
            }
            None => self.spec.modules.iter().collect(),
        };
        info!(modules = selected.len(), "starting audit");

        let results: Vec<ModuleResult> = selected
            .par_iter()
            .map(|module| self.analyze_module(module, &index, route_text))
            .collect();

        let report = report::aggregate(results, &self.spec.thresholds);
        info!(
            average = report.summary.average_percentage,
            critical = report.summary.critical.len(),
            "audit complete"
        );
        report
    }

    /// The three static phases for one module, in dependency order.
    fn analyze_module(
        &self,
        module: &ModuleSpec,
        index: &SourceIndex<'_>,
        route_text: Option<&str>,
    ) -> ModuleResult {
        debug!(module = %module.name, "analyzing");

        let backend_out = backend::analyze_backend(module, index, &self.detector);
        let frontend_out = frontend::analyze_frontend(module, index, &self.detector, &self.rubric);

        let mut findings = backend_out.findings;
        findings.extend(frontend_out.findings);
        findings.extend(self.cross_reference(
            module,
            index,
            route_text,
            &backend_out.controllers,
            &frontend_out.call_sites,
        ));

        ModuleResult {
            module: module.name.clone(),
            priority: module.priority.clone(),
            findings,
            page_scores: frontend_out.scores,
        }
    }

    /// Cross-reference pass. Requires the completed per-artifact
    /// analyses; a missing route table degrades to a module-scoped
    /// FAIL and the module keeps its other results.
    fn cross_reference(
        &self,
        module: &ModuleSpec,
        index: &SourceIndex<'_>,
        route_text: Option<&str>,
        controllers: &[backend::ControllerSummary],
        call_sites: &[(String, Vec<CallSite>)],
    ) -> Vec<Finding> {
        let mut findings = Vec::new();

        let Some(route_text) = route_text else {
            if !module.route_patterns.is_empty() {
                findings.push(Finding::new(
                    &module.name,
                    "Route table",
                    CheckStatus::Fail,
                    "route table not found",
                ));
            }
            return findings;
        };
        let routes = RouteTable::new(route_text);

        for summary in controllers {
            let Some(class_name) = &summary.class_name else {
                continue;
            };
            for f in crossref::bind_routes(
                &routes,
                class_name,
                &summary.method_names,
                self.spec.crossref.orphan_threshold,
            ) {
                let check = match f.kind {
                    CrossRefKind::OrphanHandler => format!("Orphan methods {class_name}"),
                    _ => format!("Routes -> {class_name}"),
                };
                findings.push(Finding::from_crossref(&module.name, check, f));
            }
        }

        for (page, sites) in call_sites {
            for f in crossref::link_frontend_calls(sites, &routes) {
                findings.push(Finding::from_crossref(
                    &module.name,
                    format!("Frontend -> Backend {page}"),
                    f,
                ));
            }
        }

        if let (Some(table), Some(model_name)) = (&module.table_name, module.models.first()) {
            if let Some(mig) = index.migration_for_table(table) {
                let columns = migration::table_columns(
                    &mig.text,
                    table,
                    &self.spec.crossref.framework_columns,
                );
                if let Some(model_artifact) = index.model(model_name) {
                    let facts = model::extract_model(&model_artifact.text);
                    if facts.has_fillable {
                        let f = crossref::match_model_schema(
                            model_name,
                            &columns,
                            &facts.fillable,
                            self.spec.crossref.drift_warn_limit,
                        );
                        findings.push(Finding::from_crossref(
                            &module.name,
                            format!("Migration <-> Model {model_name}"),
                            f,
                        ));
                    }
                }
            }
        }

        findings
    }
}
