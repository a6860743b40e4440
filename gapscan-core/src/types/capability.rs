//! Capability signals — the closed vocabulary of boolean properties
//! detected heuristically from an artifact's text.

use serde::{Deserialize, Serialize};

use super::artifact::ArtifactKind;

/// The 14 capability signals.
///
/// The vocabulary is closed and versioned: detection rules and rubric
/// weights refer to capabilities by these names, and adding a signal is
/// a breaking change to any stored rubric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Capability {
    /// Fetches data from the backend (queries, loaders).
    DataFetch,
    /// Performs a write (create/update/delete mutation).
    Mutation,
    /// Surfaces operation results to the user (toasts, banners).
    UserFeedback,
    /// Shows a loading indicator while data is in flight.
    LoadingIndicator,
    /// Renders a dedicated empty state for zero records.
    EmptyState,
    /// Renders or reacts to an error state.
    ErrorState,
    /// Offers search or filtering over listed data.
    Search,
    /// Paginates listed data.
    Pagination,
    /// Gates UI or actions behind a permission check.
    PermissionCheck,
    /// Contains a data-entry form.
    Form,
    /// Validates form input.
    Validation,
    /// Asks for confirmation before destructive deletes.
    DeleteConfirmation,
    /// Handles faults explicitly (try/catch, onError, rollback paths).
    FaultHandling,
    /// Wraps multi-step writes in a fault-isolation boundary with
    /// rollback-on-error.
    TransactionalIntegrity,
}

impl Capability {
    /// All capabilities, in vocabulary order. This order is the
    /// deterministic iteration order for capability sets.
    pub fn all() -> &'static [Capability] {
        &[
            Self::DataFetch,
            Self::Mutation,
            Self::UserFeedback,
            Self::LoadingIndicator,
            Self::EmptyState,
            Self::ErrorState,
            Self::Search,
            Self::Pagination,
            Self::PermissionCheck,
            Self::Form,
            Self::Validation,
            Self::DeleteConfirmation,
            Self::FaultHandling,
            Self::TransactionalIntegrity,
        ]
    }

    /// Capability name as a string.
    pub fn name(&self) -> &'static str {
        match self {
            Self::DataFetch => "data_fetch",
            Self::Mutation => "mutation",
            Self::UserFeedback => "user_feedback",
            Self::LoadingIndicator => "loading_indicator",
            Self::EmptyState => "empty_state",
            Self::ErrorState => "error_state",
            Self::Search => "search",
            Self::Pagination => "pagination",
            Self::PermissionCheck => "permission_check",
            Self::Form => "form",
            Self::Validation => "validation",
            Self::DeleteConfirmation => "delete_confirmation",
            Self::FaultHandling => "fault_handling",
            Self::TransactionalIntegrity => "transactional_integrity",
        }
    }

    /// Parse from string.
    pub fn parse_str(s: &str) -> Option<Self> {
        match s {
            "data_fetch" => Some(Self::DataFetch),
            "mutation" => Some(Self::Mutation),
            "user_feedback" => Some(Self::UserFeedback),
            "loading_indicator" => Some(Self::LoadingIndicator),
            "empty_state" => Some(Self::EmptyState),
            "error_state" => Some(Self::ErrorState),
            "search" => Some(Self::Search),
            "pagination" => Some(Self::Pagination),
            "permission_check" => Some(Self::PermissionCheck),
            "form" => Some(Self::Form),
            "validation" => Some(Self::Validation),
            "delete_confirmation" => Some(Self::DeleteConfirmation),
            "fault_handling" => Some(Self::FaultHandling),
            "transactional_integrity" => Some(Self::TransactionalIntegrity),
            _ => None,
        }
    }

    /// Whether this capability is evaluated for the given artifact kind.
    ///
    /// Page-facing signals only apply to pages; `TransactionalIntegrity`
    /// only to controllers. `FaultHandling` applies to both — a page's
    /// catch/onError handling and a controller's try/catch both count.
    pub fn applies_to(&self, kind: ArtifactKind) -> bool {
        match self {
            Self::TransactionalIntegrity => kind == ArtifactKind::Controller,
            Self::FaultHandling => {
                matches!(kind, ArtifactKind::Page | ArtifactKind::Controller)
            }
            Self::Validation => {
                matches!(kind, ArtifactKind::Page | ArtifactKind::Controller)
            }
            _ => kind == ArtifactKind::Page,
        }
    }

    fn index(&self) -> usize {
        *self as usize
    }
}

impl std::fmt::Display for Capability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Detected capability signals for one artifact.
///
/// Iteration is always in `Capability::all()` order, so downstream
/// consumers see a deterministic sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CapabilitySet {
    flags: [bool; 14],
}

impl CapabilitySet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, cap: Capability, value: bool) {
        self.flags[cap.index()] = value;
    }

    pub fn has(&self, cap: Capability) -> bool {
        self.flags[cap.index()]
    }

    /// Number of detected capabilities.
    pub fn count(&self) -> usize {
        self.flags.iter().filter(|f| **f).count()
    }

    /// Iterate `(capability, detected)` pairs in vocabulary order.
    pub fn iter(&self) -> impl Iterator<Item = (Capability, bool)> + '_ {
        Capability::all().iter().map(|c| (*c, self.has(*c)))
    }

    /// The detected capabilities, in vocabulary order.
    pub fn detected(&self) -> Vec<Capability> {
        Capability::all()
            .iter()
            .copied()
            .filter(|c| self.has(*c))
            .collect()
    }
}

impl FromIterator<Capability> for CapabilitySet {
    fn from_iter<I: IntoIterator<Item = Capability>>(iter: I) -> Self {
        let mut set = Self::new();
        for cap in iter {
            set.set(cap, true);
        }
        set
    }
}
