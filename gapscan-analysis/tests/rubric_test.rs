//! Tests for rubric weight derivation and scoring.

use gapscan_analysis::rubric::{score_page, RubricWeights};
use gapscan_core::{AuditSpec, Capability, CapabilitySet, PageArchetype};

fn builtin_rubric() -> RubricWeights {
    let spec = AuditSpec::builtin().expect("builtin spec");
    RubricWeights::from_config(&spec.rubric).expect("rubric compiles")
}

#[test]
fn test_effective_weights_never_mutate_base() {
    let rubric = builtin_rubric();
    let before = rubric.base().clone();
    let _ = rubric.effective(PageArchetype::Dashboard);
    let _ = rubric.effective(PageArchetype::Report);
    assert_eq!(*rubric.base(), before, "base table must stay untouched");
}

#[test]
fn test_max_score_equals_nonzero_weight_sum_for_every_archetype() {
    let rubric = builtin_rubric();
    for archetype in PageArchetype::all() {
        let effective = rubric.effective(*archetype);
        let expected: u32 = effective
            .iter()
            .map(|(_, w)| w)
            .filter(|w| *w > 0)
            .sum();

        // A set with every applicable capability present must reach
        // exactly the maximum and score 100.
        let all_true: CapabilitySet = Capability::all().iter().copied().collect();
        let score = score_page("page", "P0", &all_true, *archetype, &rubric);
        assert_eq!(score.max_score, expected, "archetype {archetype}");
        assert_eq!(score.raw_score, expected, "archetype {archetype}");
        assert_eq!(score.percentage, 100, "archetype {archetype}");
        assert!(score.missing.is_empty(), "archetype {archetype}");
    }
}

#[test]
fn test_zero_weight_capability_never_reported_missing() {
    let rubric = builtin_rubric();
    // Dashboards zero out mutation/form/delete/pagination/validation/
    // search; an empty capability set must not report any of them.
    let none = CapabilitySet::new();
    let score = score_page("dash", "P0", &none, PageArchetype::Dashboard, &rubric);
    for missing in &score.missing {
        let zeroed = [
            Capability::Mutation,
            Capability::Form,
            Capability::DeleteConfirmation,
            Capability::Pagination,
            Capability::Validation,
            Capability::Search,
        ];
        assert!(
            !zeroed.contains(&missing.capability),
            "{} has zero weight for dashboards",
            missing.capability
        );
    }
    assert_eq!(score.percentage, 0);
}

#[test]
fn test_list_page_missing_loading_indicator() {
    // Scenario: a list page fetches, mutates, and paginates but shows
    // no loading indicator (base weight 10). The missing list names
    // the loading indicator and no pagination entry appears.
    let rubric = builtin_rubric();
    let caps: CapabilitySet = [
        Capability::DataFetch,
        Capability::Mutation,
        Capability::Pagination,
    ]
    .into_iter()
    .collect();

    let score = score_page("list", "P1", &caps, PageArchetype::ListDefault, &rubric);
    assert!(score
        .missing
        .iter()
        .any(|m| m.capability == Capability::LoadingIndicator && m.weight == 10));
    assert!(!score
        .missing
        .iter()
        .any(|m| m.capability == Capability::Pagination));
}

#[test]
fn test_dashboard_with_all_applicable_scores_100() {
    // Scenario: a dashboard missing every zero-weighted capability
    // still scores 100 when the applicable ones are present.
    let rubric = builtin_rubric();
    let caps: CapabilitySet = [
        Capability::DataFetch,
        Capability::UserFeedback,
        Capability::LoadingIndicator,
        Capability::EmptyState,
        Capability::ErrorState,
        Capability::PermissionCheck,
    ]
    .into_iter()
    .collect();

    let score = score_page("dash", "P0", &caps, PageArchetype::Dashboard, &rubric);
    assert_eq!(score.percentage, 100);
    assert!(score.missing.is_empty());
}

#[test]
fn test_missing_sorted_by_weight_then_name() {
    let rubric = builtin_rubric();
    let none = CapabilitySet::new();
    let score = score_page("list", "P1", &none, PageArchetype::ListDefault, &rubric);

    for pair in score.missing.windows(2) {
        let (a, b) = (&pair[0], &pair[1]);
        assert!(
            a.weight > b.weight
                || (a.weight == b.weight
                    && a.capability.name() <= b.capability.name()),
            "ordering violated: {:?} before {:?}",
            a,
            b
        );
    }
    // The two 15-weight capabilities tie and order by name.
    assert_eq!(score.missing[0].capability, Capability::DataFetch);
    assert_eq!(score.missing[1].capability, Capability::Mutation);
}

#[test]
fn test_empty_rubric_is_vacuously_complete() {
    let spec = AuditSpec::default();
    let rubric = RubricWeights::from_config(&spec.rubric).expect("empty rubric");
    let score = score_page(
        "page",
        "",
        &CapabilitySet::new(),
        PageArchetype::ListDefault,
        &rubric,
    );
    assert_eq!(score.max_score, 0);
    assert_eq!(score.percentage, 100, "no applicable criteria means 100");
}
