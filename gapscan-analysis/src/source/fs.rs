//! Filesystem-backed artifact source.

use std::path::PathBuf;

use gapscan_core::ArtifactSource;

/// Reads artifacts under a fixed root directory. Performs no
/// traversal — it only resolves the exact paths it is asked for.
pub struct FsSource {
    root: PathBuf,
}

impl FsSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl ArtifactSource for FsSource {
    fn read(&self, path: &str) -> Option<String> {
        std::fs::read_to_string(self.root.join(path)).ok()
    }
}
