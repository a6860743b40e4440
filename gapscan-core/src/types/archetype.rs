//! Page archetypes — the functional categories that decide which
//! completeness criteria apply to a page.

use serde::{Deserialize, Serialize};

/// The 16 page archetypes. Exactly one per page; `ListDefault` is the
/// fallback when no classification rule matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[derive(Default)]
pub enum PageArchetype {
    Dashboard,
    Detail,
    Auth,
    Visualization,
    Form,
    Config,
    Component,
    Utility,
    Report,
    ReadonlyList,
    Messaging,
    Analysis,
    TabComponent,
    TechFeature,
    Tabbed,
    #[default]
    ListDefault,
}

impl PageArchetype {
    /// All 16 archetypes.
    pub fn all() -> &'static [PageArchetype] {
        &[
            Self::Dashboard,
            Self::Detail,
            Self::Auth,
            Self::Visualization,
            Self::Form,
            Self::Config,
            Self::Component,
            Self::Utility,
            Self::Report,
            Self::ReadonlyList,
            Self::Messaging,
            Self::Analysis,
            Self::TabComponent,
            Self::TechFeature,
            Self::Tabbed,
            Self::ListDefault,
        ]
    }

    /// Archetype name as a string.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Dashboard => "dashboard",
            Self::Detail => "detail",
            Self::Auth => "auth",
            Self::Visualization => "visualization",
            Self::Form => "form",
            Self::Config => "config",
            Self::Component => "component",
            Self::Utility => "utility",
            Self::Report => "report",
            Self::ReadonlyList => "readonly_list",
            Self::Messaging => "messaging",
            Self::Analysis => "analysis",
            Self::TabComponent => "tab_component",
            Self::TechFeature => "tech_feature",
            Self::Tabbed => "tabbed",
            Self::ListDefault => "list_default",
        }
    }

    /// Parse from string.
    pub fn parse_str(s: &str) -> Option<Self> {
        match s {
            "dashboard" => Some(Self::Dashboard),
            "detail" => Some(Self::Detail),
            "auth" => Some(Self::Auth),
            "visualization" => Some(Self::Visualization),
            "form" => Some(Self::Form),
            "config" => Some(Self::Config),
            "component" => Some(Self::Component),
            "utility" => Some(Self::Utility),
            "report" => Some(Self::Report),
            "readonly_list" => Some(Self::ReadonlyList),
            "messaging" => Some(Self::Messaging),
            "analysis" => Some(Self::Analysis),
            "tab_component" => Some(Self::TabComponent),
            "tech_feature" => Some(Self::TechFeature),
            "tabbed" => Some(Self::Tabbed),
            "list_default" => Some(Self::ListDefault),
            _ => None,
        }
    }
}

impl std::fmt::Display for PageArchetype {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
