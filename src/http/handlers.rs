//! Request handlers for the decision service.

use axum::{
    body::Bytes,
    extract::State,
    http::HeaderMap,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::host::BlockingResponse;
use crate::http::server::AppState;
use crate::http::X_REQUEST_ID;

/// Body of `GET /health`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    /// Where matching navigations are sent.
    pub target: String,
}

/// `POST /v1/decide`: answer one onBeforeRequest event.
///
/// The body is taken raw so that undecodable events fail open with `{}`
/// instead of a 4xx the extension would have to interpret.
pub async fn decide(State(state): State<AppState>, headers: HeaderMap, body: Bytes) -> Json<BlockingResponse> {
    let request_id = headers
        .get(X_REQUEST_ID)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("unknown");

    let response = state.adapter.respond_raw(&body);
    tracing::debug!(
        request_id = %request_id,
        redirect = response.redirect_url.is_some(),
        "Decision served"
    );
    Json(response)
}

/// `GET /health`.
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        target: state.adapter.engine().policy().target_base().to_string(),
    })
}
