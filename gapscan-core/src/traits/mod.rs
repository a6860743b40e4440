//! Trait seams for external collaborators.
//!
//! The core audit never walks directories and never performs HTTP.
//! Artifact access and live endpoint probing are supplied through
//! these traits.

/// Abstract artifact access: given a path, return its text or absence.
///
/// Absence is a value, not an error — a missing artifact degrades to a
/// FAIL finding scoped to the module and check that needed it.
pub trait ArtifactSource: Send + Sync {
    fn read(&self, path: &str) -> Option<String>;
}

/// Response from a live endpoint probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProbeResponse {
    pub http_status: u16,
    pub elapsed_ms: u64,
    /// Content type indicated a JSON body.
    pub is_json: bool,
}

/// Probe failure. A timeout or transport error on one endpoint is
/// isolated to that endpoint's finding.
#[derive(Debug, thiserror::Error)]
pub enum ProbeError {
    #[error("request timed out after {timeout_ms} ms")]
    Timeout { timeout_ms: u64 },

    #[error("transport error: {message}")]
    Transport { message: String },
}

/// Live HTTP health-check collaborator. Optional; the static audit
/// never calls a live server for its findings.
pub trait HealthProbe {
    fn probe(
        &self,
        url: &str,
        bearer: Option<&str>,
        timeout_ms: u64,
    ) -> Result<ProbeResponse, ProbeError>;
}
