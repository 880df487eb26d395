//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware: request ID, trace, timeout, body limit)
//!     → handlers.rs (POST /v1/decide, GET /health)
//!     → host adapter (decode details, decide, fail open)
//!     → JSON response to the extension
//! ```

pub mod handlers;
pub mod server;

/// Header carrying the per-request correlation ID.
pub const X_REQUEST_ID: &str = "x-request-id";

pub use handlers::HealthResponse;
pub use server::DecisionServer;
