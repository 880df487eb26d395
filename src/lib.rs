//! Markdown navigation redirect engine.
//!
//! Decides, for each browser navigation, whether it targets a Markdown
//! document (`*.md`, main frame) and if so where to send it instead:
//! `http://localhost:2403?url=<percent-encoded original URL>`.
//!
//! The engine is a pure function ([`engine::decide`]). Everything else in
//! the crate is host-side plumbing: the `onBeforeRequest` wire adapter, an
//! HTTP decision service, configuration, logging and metrics.

pub mod config;
pub mod engine;
pub mod host;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod policy;

pub use config::ServiceConfig;
pub use engine::{decide, DecisionError, NavigationRequest, RedirectDecision, RedirectEngine, RequestKind};
pub use host::{BlockingResponse, WebRequestAdapter};
pub use http::DecisionServer;
pub use lifecycle::Shutdown;
pub use policy::RedirectPolicy;
