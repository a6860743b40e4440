//! Source artifacts — the raw inputs of one audit run.

use serde::{Deserialize, Serialize};

/// The kinds of source artifact the auditor understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ArtifactKind {
    /// The backend route declaration file.
    RouteTable,
    /// A backend HTTP controller.
    Controller,
    /// A backend data model.
    Model,
    /// A schema migration.
    Migration,
    /// A frontend page component.
    Page,
}

impl ArtifactKind {
    /// All artifact kinds.
    pub fn all() -> &'static [ArtifactKind] {
        &[
            Self::RouteTable,
            Self::Controller,
            Self::Model,
            Self::Migration,
            Self::Page,
        ]
    }

    /// Kind name as a string.
    pub fn name(&self) -> &'static str {
        match self {
            Self::RouteTable => "route_table",
            Self::Controller => "controller",
            Self::Model => "model",
            Self::Migration => "migration",
            Self::Page => "page",
        }
    }

    /// Parse from string.
    pub fn parse_str(s: &str) -> Option<Self> {
        match s {
            "route_table" => Some(Self::RouteTable),
            "controller" => Some(Self::Controller),
            "model" => Some(Self::Model),
            "migration" => Some(Self::Migration),
            "page" => Some(Self::Page),
            _ => None,
        }
    }
}

impl std::fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// One loaded source file. Immutable once loaded; owned by the source
/// index for the duration of a single audit run.
#[derive(Debug, Clone)]
pub struct SourceArtifact {
    pub path: String,
    pub kind: ArtifactKind,
    pub text: String,
}

impl SourceArtifact {
    pub fn new(path: impl Into<String>, kind: ArtifactKind, text: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            kind,
            text: text.into(),
        }
    }

    /// File name portion of the path.
    pub fn file_name(&self) -> &str {
        self.path.rsplit('/').next().unwrap_or(&self.path)
    }

    /// Containing folder portion of the path (empty for bare names).
    pub fn folder(&self) -> &str {
        match self.path.rfind('/') {
            Some(idx) => &self.path[..idx],
            None => "",
        }
    }
}
