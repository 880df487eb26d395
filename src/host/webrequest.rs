//! Adapter for the browser `webRequest.onBeforeRequest` blocking listener.

use serde::{Deserialize, Serialize};

use crate::engine::{NavigationRequest, RedirectDecision, RedirectEngine};
use crate::observability::metrics::{record_decision, DecisionOutcome};

/// The `details` object handed to an `onBeforeRequest` listener.
///
/// Only `url` and `type` are required; everything else is carried for logs.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestDetails {
    #[serde(flatten)]
    pub navigation: NavigationRequest,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tab_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub frame_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_stamp: Option<f64>,
}

impl From<NavigationRequest> for RequestDetails {
    fn from(navigation: NavigationRequest) -> Self {
        Self {
            navigation,
            request_id: None,
            tab_id: None,
            frame_id: None,
            method: None,
            time_stamp: None,
        }
    }
}

/// What the listener returns to the browser: `{"redirectUrl": ...}` or `{}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct BlockingResponse {
    #[serde(rename = "redirectUrl", default, skip_serializing_if = "Option::is_none")]
    pub redirect_url: Option<String>,
}

impl BlockingResponse {
    /// The empty instruction: let the request through.
    pub fn allow() -> Self {
        Self::default()
    }
}

impl From<RedirectDecision> for BlockingResponse {
    fn from(decision: RedirectDecision) -> Self {
        match decision {
            RedirectDecision::Redirect { target_url } => Self {
                redirect_url: Some(target_url),
            },
            RedirectDecision::Allow => Self::allow(),
        }
    }
}

/// Runs the engine for browser events and applies the fail-open rule.
#[derive(Debug, Clone, Default)]
pub struct WebRequestAdapter {
    engine: RedirectEngine,
}

impl WebRequestAdapter {
    pub fn new(engine: RedirectEngine) -> Self {
        Self { engine }
    }

    pub fn engine(&self) -> &RedirectEngine {
        &self.engine
    }

    /// Answer one decoded event.
    pub fn respond(&self, details: &RequestDetails) -> BlockingResponse {
        match self.engine.decide(&details.navigation) {
            Ok(decision) => {
                if let Some(target) = decision.target_url() {
                    tracing::info!(
                        url = %details.navigation.url,
                        target = %target,
                        request_id = ?details.request_id,
                        tab_id = ?details.tab_id,
                        "Intercepted Markdown navigation"
                    );
                    record_decision(DecisionOutcome::Redirect);
                } else {
                    tracing::trace!(
                        url = %details.navigation.url,
                        kind = %details.navigation.kind,
                        "Navigation allowed"
                    );
                    record_decision(DecisionOutcome::Allow);
                }
                decision.into()
            }
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    request_id = ?details.request_id,
                    "Invalid navigation request, allowing unmodified"
                );
                record_decision(DecisionOutcome::Invalid);
                BlockingResponse::allow()
            }
        }
    }

    /// Answer a raw JSON event. Undecodable events are allowed.
    pub fn respond_raw(&self, body: &[u8]) -> BlockingResponse {
        match serde_json::from_slice::<RequestDetails>(body) {
            Ok(details) => self.respond(&details),
            Err(e) => {
                tracing::warn!(error = %e, "Undecodable request details, allowing unmodified");
                record_decision(DecisionOutcome::Invalid);
                BlockingResponse::allow()
            }
        }
    }
}
