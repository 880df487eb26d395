//! Interception host adapters.
//!
//! # Data Flow
//! ```text
//! onBeforeRequest details (JSON)
//!     → webrequest.rs (decode details, unknown fields ignored)
//!     → engine (decide)
//!     → webrequest.rs (fail-open on InvalidInput, log, count)
//!     → BlockingResponse JSON: { "redirectUrl": ... } or {}
//! ```
//!
//! # Design Decisions
//! - The host injects each event; nothing subscribes to global browser state
//! - Fail-open: no input, however broken, blocks a navigation
//! - Adapters own logging and metrics so the engine stays pure

pub mod webrequest;

pub use webrequest::{BlockingResponse, RequestDetails, WebRequestAdapter};
