//! Health-check runner — drives the `HealthProbe` collaborator.
//!
//! Runs after static analysis completes and never feeds back into the
//! static findings. One endpoint's failure or timeout is isolated to
//! its own finding; the phase always runs to completion.

use tracing::debug;

use gapscan_core::config::ModuleSpec;
use gapscan_core::{CheckStatus, Finding, HealthProbe};

/// Configuration for the live probe phase. Token acquisition is the
/// collaborator's concern; the runner only forwards the bearer.
#[derive(Debug, Clone)]
pub struct HealthConfig {
    /// Base URL prepended to every route pattern.
    pub base_url: String,
    pub bearer_token: Option<String>,
    /// Per-request timeout, enforced by the probe implementation.
    pub timeout_ms: u64,
}

impl Default for HealthConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000/api/v1".to_string(),
            bearer_token: None,
            timeout_ms: 5_000,
        }
    }
}

/// Probes a module's GET surface through the collaborator interface.
pub struct HealthCheckRunner<'a> {
    probe: &'a dyn HealthProbe,
    config: HealthConfig,
}

impl<'a> HealthCheckRunner<'a> {
    pub fn new(probe: &'a dyn HealthProbe, config: HealthConfig) -> Self {
        Self { probe, config }
    }

    /// Probe each of the module's route patterns. Parameterized and
    /// auth endpoints are skipped — they need request bodies the
    /// static route patterns cannot supply.
    pub fn check_module(&self, module: &ModuleSpec) -> Vec<Finding> {
        let mut findings = Vec::new();

        for pattern in &module.route_patterns {
            if pattern.contains('{')
                || pattern.contains("login")
                || pattern.contains("logout")
            {
                continue;
            }
            let endpoint = if pattern.starts_with('/') {
                pattern.clone()
            } else {
                format!("/{pattern}")
            };
            let url = format!("{}{}", self.config.base_url, endpoint);
            debug!(%url, "probing");

            let check = format!("GET {endpoint}");
            match self.probe.probe(
                &url,
                self.config.bearer_token.as_deref(),
                self.config.timeout_ms,
            ) {
                Ok(resp) if (200..300).contains(&resp.http_status) && resp.is_json => {
                    findings.push(Finding::new(
                        &module.name,
                        check,
                        CheckStatus::Pass,
                        format!("{} ({}ms)", resp.http_status, resp.elapsed_ms),
                    ));
                }
                Ok(resp) if resp.http_status == 403 => {
                    findings.push(Finding::new(
                        &module.name,
                        check,
                        CheckStatus::Warn,
                        format!(
                            "403 forbidden ({}ms) — may be a permission gate",
                            resp.elapsed_ms
                        ),
                    ));
                }
                Ok(resp) => {
                    findings.push(Finding::new(
                        &module.name,
                        check,
                        CheckStatus::Fail,
                        format!("{} ({}ms)", resp.http_status, resp.elapsed_ms),
                    ));
                }
                Err(e) => {
                    findings.push(Finding::new(
                        &module.name,
                        check,
                        CheckStatus::Fail,
                        e.to_string(),
                    ));
                }
            }
        }

        findings
    }
}
