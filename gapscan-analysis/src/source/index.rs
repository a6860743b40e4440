//! The source index — resolves logical artifact references to text.

use gapscan_core::config::LayoutConfig;
use gapscan_core::{ArtifactKind, ArtifactSource, SourceArtifact};

/// Resolves module artifact references through an `ArtifactSource`
/// plus the configured layout. Holds nothing between reads; loaded
/// artifacts are owned by the caller for the duration of one run.
pub struct SourceIndex<'a> {
    source: &'a dyn ArtifactSource,
    layout: &'a LayoutConfig,
}

impl<'a> SourceIndex<'a> {
    pub fn new(source: &'a dyn ArtifactSource, layout: &'a LayoutConfig) -> Self {
        Self { source, layout }
    }

    fn load(&self, path: String, kind: ArtifactKind) -> Option<SourceArtifact> {
        let text = self.source.read(&path)?;
        Some(SourceArtifact::new(path, kind, text))
    }

    /// The backend route table.
    pub fn route_table(&self) -> Option<SourceArtifact> {
        self.load(
            self.layout.effective_route_table().to_string(),
            ArtifactKind::RouteTable,
        )
    }

    /// A controller, by path relative to the controllers root.
    pub fn controller(&self, rel: &str) -> Option<SourceArtifact> {
        self.load(
            format!("{}/{}", self.layout.effective_controllers_root(), rel),
            ArtifactKind::Controller,
        )
    }

    /// A model, by name.
    pub fn model(&self, name: &str) -> Option<SourceArtifact> {
        self.load(
            format!("{}/{}.php", self.layout.effective_models_root(), name),
            ArtifactKind::Model,
        )
    }

    /// A page, by path relative to the pages root.
    pub fn page(&self, rel: &str) -> Option<SourceArtifact> {
        self.load(
            format!("{}/{}", self.layout.effective_pages_root(), rel),
            ArtifactKind::Page,
        )
    }

    /// The migration that creates the given table, searched across the
    /// configured migration paths. The first migration whose text
    /// declares the table's creation wins.
    pub fn migration_for_table(&self, table: &str) -> Option<SourceArtifact> {
        let decl = regex::Regex::new(&format!(
            r#"(?i)Schema::create\s*\(\s*['"]{}['"]"#,
            regex::escape(table)
        ))
        .ok()?;
        for rel in &self.layout.migration_paths {
            let path = format!("{}/{}", self.layout.effective_migrations_root(), rel);
            if let Some(text) = self.source.read(&path) {
                if decl.is_match(&text) {
                    return Some(SourceArtifact::new(path, ArtifactKind::Migration, text));
                }
            }
        }
        None
    }
}
