//! Deep frontend pass: per-page capabilities, archetype, rubric
//! score, and the high-signal gap findings.

use std::sync::LazyLock;

use aho_corasick::AhoCorasick;

use gapscan_core::config::ModuleSpec;
use gapscan_core::{ArtifactKind, Capability, CheckStatus, Finding, ModuleScore, PageArchetype};

use crate::archetype;
use crate::capabilities::CapabilityDetector;
use crate::extract::frontend::{self, CallSite, DataChannel};
use crate::rubric::{self, RubricWeights};
use crate::source::SourceIndex;

/// Loading hook markers, as distinct from the visual indicator — a
/// hook without a spinner downgrades the finding to WARN.
static LOADING_HOOKS: LazyLock<AhoCorasick> = LazyLock::new(|| {
    AhoCorasick::new(["isLoading", "isPending", "isFetching"]).expect("loading hook set")
});

static LOADING_VISUALS: LazyLock<AhoCorasick> = LazyLock::new(|| {
    AhoCorasick::new([
        "Loader2",
        "Spinner",
        "skeleton",
        "Skeleton",
        "animate-spin",
        "animate-pulse",
    ])
    .expect("loading visual set")
});

static DELETE_VERBS: LazyLock<AhoCorasick> = LazyLock::new(|| {
    AhoCorasick::new(["delete", "destroy", "remove", "excluir", "Excluir"])
        .expect("delete verb set")
});

/// Output of the frontend pass for one module.
#[derive(Debug, Clone, Default)]
pub struct FrontendOutcome {
    pub findings: Vec<Finding>,
    /// One rubric score per analyzed page.
    pub scores: Vec<ModuleScore>,
    /// Call sites per page, for the cross-reference pass.
    pub call_sites: Vec<(String, Vec<CallSite>)>,
}

fn basename(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}

/// Analyze a module's pages.
pub fn analyze_frontend(
    module: &ModuleSpec,
    index: &SourceIndex<'_>,
    detector: &CapabilityDetector,
    rubric: &RubricWeights,
) -> FrontendOutcome {
    let mut out = FrontendOutcome::default();

    for rel in &module.pages {
        let name = basename(rel);
        let Some(artifact) = index.page(rel) else {
            out.findings.push(Finding::new(
                &module.name,
                format!("Page {name}"),
                CheckStatus::Fail,
                "file not found",
            ));
            continue;
        };
        let text = &artifact.text;

        let caps = detector.detect(text, ArtifactKind::Page);
        let page_archetype = archetype::classify(name, artifact.folder(), text);
        let call_sites = frontend::extract_call_sites(text);
        let channel = frontend::data_channel(text, &call_sites);

        // Form fields.
        let field_count = frontend::form_field_count(text);
        if field_count > 0 {
            out.findings.push(Finding::new(
                &module.name,
                format!("Form {name}"),
                CheckStatus::Pass,
                format!("{field_count} form fields"),
            ));
        } else if module.crud_required {
            out.findings.push(Finding::new(
                &module.name,
                format!("Form {name}"),
                CheckStatus::Warn,
                "CRUD module without visible form fields",
            ));
        }

        // API reachability.
        let (status, detail) = match channel {
            DataChannel::Direct => {
                let mut verbs: Vec<&str> =
                    call_sites.iter().map(|c| c.method.as_str()).collect();
                verbs.sort_unstable();
                verbs.dedup();
                (
                    CheckStatus::Pass,
                    format!("{} call(s): {}", call_sites.len(), verbs.join("+")),
                )
            }
            DataChannel::Hooks => (CheckStatus::Pass, "via query/mutation hooks".to_string()),
            DataChannel::StoreOrFetch => {
                (CheckStatus::Pass, "via store or direct fetch".to_string())
            }
            DataChannel::CustomHooks => {
                (CheckStatus::Pass, "via custom data hooks".to_string())
            }
            DataChannel::HooksWithoutApi => (
                CheckStatus::Warn,
                "hooks present but no api import".to_string(),
            ),
            DataChannel::None => (CheckStatus::Fail, "no API calls detected".to_string()),
        };
        out.findings.push(Finding::new(
            &module.name,
            format!("API calls {name}"),
            status,
            detail,
        ));

        // Empty state. Create/edit pages are exempt.
        if caps.has(Capability::EmptyState) {
            out.findings.push(Finding::new(
                &module.name,
                format!("Empty state {name}"),
                CheckStatus::Pass,
                "empty-state handling present",
            ));
        } else if module.crud_required && page_archetype != PageArchetype::Form {
            out.findings.push(Finding::new(
                &module.name,
                format!("Empty state {name}"),
                CheckStatus::Warn,
                "list without a visible empty state",
            ));
        }

        // Loading state: hook + visual = PASS, hook alone = WARN.
        let has_hook = LOADING_HOOKS.is_match(text);
        let has_visual = LOADING_VISUALS.is_match(text);
        if has_hook && has_visual {
            out.findings.push(Finding::new(
                &module.name,
                format!("Loading state {name}"),
                CheckStatus::Pass,
                "hook + spinner/skeleton",
            ));
        } else if has_hook || caps.has(Capability::LoadingIndicator) {
            out.findings.push(Finding::new(
                &module.name,
                format!("Loading state {name}"),
                CheckStatus::Warn,
                "loading hook without a visual indicator",
            ));
        } else {
            out.findings.push(Finding::new(
                &module.name,
                format!("Loading state {name}"),
                CheckStatus::Fail,
                "no loading state",
            ));
        }

        // Error handling: error state or catch, paired with feedback.
        let has_error = caps.has(Capability::ErrorState);
        let has_fault = caps.has(Capability::FaultHandling);
        let has_feedback = caps.has(Capability::UserFeedback);
        if (has_error || has_fault) && has_feedback {
            out.findings.push(Finding::new(
                &module.name,
                format!("Error handling {name}"),
                CheckStatus::Pass,
                if has_error {
                    "error state + user feedback"
                } else {
                    "catch + user feedback"
                },
            ));
        } else if has_error || has_fault {
            out.findings.push(Finding::new(
                &module.name,
                format!("Error handling {name}"),
                CheckStatus::Warn,
                "partial error handling (no user feedback)",
            ));
        } else {
            out.findings.push(Finding::new(
                &module.name,
                format!("Error handling {name}"),
                CheckStatus::Fail,
                "no error handling",
            ));
        }

        // Pagination.
        if caps.has(Capability::Pagination) {
            out.findings.push(Finding::new(
                &module.name,
                format!("Pagination {name}"),
                CheckStatus::Pass,
                "present",
            ));
        } else if module.crud_required {
            out.findings.push(Finding::new(
                &module.name,
                format!("Pagination {name}"),
                CheckStatus::Info,
                "no pagination (may be client-side)",
            ));
        }

        // Delete confirmation.
        if module.crud_required {
            if caps.has(Capability::DeleteConfirmation) {
                out.findings.push(Finding::new(
                    &module.name,
                    format!("Delete confirmation {name}"),
                    CheckStatus::Pass,
                    "confirm dialog present",
                ));
            } else if DELETE_VERBS.is_match(text) {
                out.findings.push(Finding::new(
                    &module.name,
                    format!("Delete confirmation {name}"),
                    CheckStatus::Warn,
                    "delete without visible confirmation",
                ));
            }
        }

        out.scores.push(rubric::score_page(
            name.trim_end_matches(".tsx"),
            &module.priority,
            &caps,
            page_archetype,
            rubric,
        ));
        out.call_sites.push((name.to_string(), call_sites));
    }

    out
}
