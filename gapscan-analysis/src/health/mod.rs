//! Optional live HTTP health-check phase.

mod runner;

pub use runner::{HealthCheckRunner, HealthConfig};
