//! Navigation request and decision types.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Resource type of an intercepted browser request.
///
/// Serialized with the browser's wire names (`main_frame`, `xmlhttprequest`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "&'static str", try_from = "String")]
pub enum RequestKind {
    MainFrame,
    SubFrame,
    Stylesheet,
    Script,
    Image,
    Font,
    Object,
    XmlHttpRequest,
    Ping,
    CspReport,
    Media,
    WebSocket,
    WebBundle,
    Other,
}

impl RequestKind {
    pub const ALL: [RequestKind; 14] = [
        RequestKind::MainFrame,
        RequestKind::SubFrame,
        RequestKind::Stylesheet,
        RequestKind::Script,
        RequestKind::Image,
        RequestKind::Font,
        RequestKind::Object,
        RequestKind::XmlHttpRequest,
        RequestKind::Ping,
        RequestKind::CspReport,
        RequestKind::Media,
        RequestKind::WebSocket,
        RequestKind::WebBundle,
        RequestKind::Other,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            RequestKind::MainFrame => "main_frame",
            RequestKind::SubFrame => "sub_frame",
            RequestKind::Stylesheet => "stylesheet",
            RequestKind::Script => "script",
            RequestKind::Image => "image",
            RequestKind::Font => "font",
            RequestKind::Object => "object",
            RequestKind::XmlHttpRequest => "xmlhttprequest",
            RequestKind::Ping => "ping",
            RequestKind::CspReport => "csp_report",
            RequestKind::Media => "media",
            RequestKind::WebSocket => "websocket",
            RequestKind::WebBundle => "webbundle",
            RequestKind::Other => "other",
        }
    }
}

impl fmt::Display for RequestKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A request type string the browser API does not define.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unrecognized request kind `{0}`")]
pub struct UnknownKind(pub String);

impl FromStr for RequestKind {
    type Err = UnknownKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| UnknownKind(s.to_string()))
    }
}

impl TryFrom<String> for RequestKind {
    type Error = UnknownKind;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<RequestKind> for &'static str {
    fn from(kind: RequestKind) -> Self {
        kind.as_str()
    }
}

/// One navigation attempt as delivered by the interception host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationRequest {
    /// Absolute URL being navigated to, exactly as the browser reported it.
    pub url: String,

    #[serde(rename = "type")]
    pub kind: RequestKind,
}

impl NavigationRequest {
    pub fn new(url: impl Into<String>, kind: RequestKind) -> Self {
        Self {
            url: url.into(),
            kind,
        }
    }

    pub fn main_frame(url: impl Into<String>) -> Self {
        Self::new(url, RequestKind::MainFrame)
    }
}

/// What the host should do with the navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RedirectDecision {
    /// Let the original request proceed untouched.
    Allow,
    /// Cancel the original request and navigate to `target_url` instead.
    Redirect { target_url: String },
}

impl RedirectDecision {
    pub fn is_redirect(&self) -> bool {
        matches!(self, RedirectDecision::Redirect { .. })
    }

    pub fn target_url(&self) -> Option<&str> {
        match self {
            RedirectDecision::Redirect { target_url } => Some(target_url),
            RedirectDecision::Allow => None,
        }
    }
}
