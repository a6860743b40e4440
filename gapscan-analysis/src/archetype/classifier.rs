//! Ordered classification cascade for page archetypes.
//!
//! Evaluation order is part of the contract: rules run top to bottom
//! and the first match wins. Name/folder rules come first (most
//! specific first — detail/view beats a generic list), then the
//! content fallback for tab-switching pages, then `ListDefault`.
//! The function is pure: identical inputs always yield the identical
//! archetype.

use std::sync::LazyLock;

use aho_corasick::AhoCorasick;

use gapscan_core::PageArchetype;

/// One name-substring rule. Needles are matched against the
/// lower-cased file name.
pub struct ArchetypeRule {
    pub archetype: PageArchetype,
    pub name_contains: &'static [&'static str],
}

/// The name rule cascade, in evaluation order.
pub static NAME_RULES: &[ArchetypeRule] = &[
    ArchetypeRule {
        archetype: PageArchetype::Dashboard,
        name_contains: &["dashboard", "overview", "analytics", "people"],
    },
    ArchetypeRule {
        archetype: PageArchetype::Detail,
        name_contains: &["detail", "view", "360"],
    },
    ArchetypeRule {
        archetype: PageArchetype::Auth,
        name_contains: &["login", "register"],
    },
    ArchetypeRule {
        archetype: PageArchetype::Visualization,
        name_contains: &["map", "kanban", "gantt", "calendar", "chart", "timeline"],
    },
    ArchetypeRule {
        archetype: PageArchetype::Form,
        name_contains: &["create", "edit", "compose", "builder", "form", "emitir"],
    },
    ArchetypeRule {
        archetype: PageArchetype::Config,
        name_contains: &["settings", "profile", "config", "widget", "preference"],
    },
    ArchetypeRule {
        archetype: PageArchetype::Component,
        name_contains: &["modal", "dialog", "selector", "picker"],
    },
    ArchetypeRule {
        archetype: PageArchetype::Utility,
        name_contains: &["import", "export", "batch", "merge"],
    },
    ArchetypeRule {
        archetype: PageArchetype::Report,
        name_contains: &["report", "relatorio", "contabil", "accounting"],
    },
    ArchetypeRule {
        archetype: PageArchetype::ReadonlyList,
        name_contains: &["audit", "log", "history", "kardex", "seal", "price"],
    },
    ArchetypeRule {
        archetype: PageArchetype::Messaging,
        name_contains: &["chat", "notification", "inbox", "template"],
    },
    ArchetypeRule {
        archetype: PageArchetype::Analysis,
        name_contains: &["matrix", "intelligence", "quality"],
    },
    ArchetypeRule {
        archetype: PageArchetype::Config,
        name_contains: &["checklist", "agenda", "execution"],
    },
];

/// Tab-switching markers for the content fallback.
static TAB_MARKERS: LazyLock<AhoCorasick> = LazyLock::new(|| {
    AhoCorasick::new([
        "TabsContent",
        "TabsTrigger",
        "setActiveTab",
        "activeTab",
        "setTab",
        "const tabs =",
        "const tabs=",
    ])
    .expect("tab marker set")
});

/// Classify a page from its file name, containing folder, and text.
pub fn classify(file_name: &str, folder: &str, text: &str) -> PageArchetype {
    let name = file_name.to_lowercase();
    let dir = folder.to_lowercase();

    for rule in NAME_RULES {
        if rule.name_contains.iter().any(|needle| name.contains(needle)) {
            return rule.archetype;
        }
    }

    // Folder rules: sub-tab components and technician mobile features.
    if dir.contains("components") && name.contains("tab") {
        return PageArchetype::TabComponent;
    }
    if dir.contains("tech") && !name.contains("page") && !name.contains("list") {
        return PageArchetype::TechFeature;
    }

    // Content fallback: a tab-switching page delegates its criteria to
    // its sub-components.
    if TAB_MARKERS.is_match(text) {
        return PageArchetype::Tabbed;
    }

    PageArchetype::ListDefault
}
