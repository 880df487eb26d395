//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Host-side code produces:
//!     → logging.rs (structured log events)
//!     → metrics.rs (decision counters)
//!
//! Consumers:
//!     → stdout (fmt layer, filtered by RUST_LOG or config)
//!     → Metrics endpoint (Prometheus scrape, optional)
//! ```
//!
//! # Design Decisions
//! - The decision engine stays silent; only the host adapter and server emit events
//! - Request ID flows through the HTTP layer into handler logs
//! - Metrics are cheap (atomic increments) and a no-op when no recorder is installed

pub mod logging;
pub mod metrics;
