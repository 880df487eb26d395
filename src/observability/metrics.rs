//! Metrics collection and exposition.
//!
//! # Metrics
//! - `navigation_decisions_total` (counter): decisions by outcome
//!   (`redirect`, `allow`, `invalid`)
//!
//! # Design Decisions
//! - Recording goes through the `metrics` facade; without an installed
//!   recorder every call is a no-op, so tests need no setup
//! - The Prometheus exporter is opt-in through configuration

use std::net::SocketAddr;

use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};

pub const DECISIONS_TOTAL: &str = "navigation_decisions_total";

/// Outcome label for a decision as seen by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecisionOutcome {
    Redirect,
    Allow,
    /// Engine reported invalid input; the host failed open.
    Invalid,
}

impl DecisionOutcome {
    pub fn as_str(self) -> &'static str {
        match self {
            DecisionOutcome::Redirect => "redirect",
            DecisionOutcome::Allow => "allow",
            DecisionOutcome::Invalid => "invalid",
        }
    }
}

pub fn record_decision(outcome: DecisionOutcome) {
    metrics::counter!(DECISIONS_TOTAL, "outcome" => outcome.as_str()).increment(1);
}

/// Install the global Prometheus recorder and serve it on `addr`.
///
/// Must be called from inside a Tokio runtime.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;
    tracing::info!(address = %addr, "Metrics exporter listening");
    Ok(())
}
