//! Redirect decision subsystem.
//!
//! # Data Flow
//! ```text
//! NavigationRequest (url, kind)
//!     → policy (is the kind in scope?)
//!     → decision.rs (validate url syntax)
//!     → policy (kind AND suffix matchers)
//!     → target.rs (percent-encode original url, append to local base)
//!     → Return: RedirectDecision::Redirect or RedirectDecision::Allow
//! ```
//!
//! # Design Decisions
//! - Pure function: no I/O, no logging, no state carried between calls
//! - Policy is immutable after construction and shared via Arc
//! - Malformed URLs surface as `DecisionError::InvalidInput`; the host picks the fallback
//! - Out-of-scope request kinds are never inspected

pub mod decision;
pub mod error;
pub mod target;
pub mod types;

pub use decision::{decide, RedirectEngine};
pub use error::DecisionError;
pub use types::{NavigationRequest, RedirectDecision, RequestKind};
