//! Redirect policy subsystem.
//!
//! # Data Flow
//! ```text
//! Policy construction (once):
//!     fixed constants (kind, suffix, local base)
//!     → compile matchers (KindMatcher AND SuffixMatcher)
//!     → freeze as immutable RedirectPolicy
//!
//! Per request:
//!     NavigationRequest → in_scope() → matches() → bool
//! ```
//!
//! # Design Decisions
//! - The Markdown policy is fixed; nothing here reads configuration
//! - Deterministic: same input always yields the same answer
//! - Thread-safe without locks (no interior mutability)

pub mod matcher;

use crate::engine::types::{NavigationRequest, RequestKind};
use matcher::{AllOf, KindMatcher, Matcher, SuffixMatcher};

/// Trailing characters that mark a navigation as a Markdown document.
pub const MARKDOWN_SUFFIX: &str = ".md";

/// Base URL of the local service that renders intercepted documents.
pub const LOCAL_SERVICE_BASE: &str = "http://localhost:2403";

/// The only request kind eligible for redirection.
pub const ELIGIBLE_KIND: RequestKind = RequestKind::MainFrame;

/// A compiled redirect rule: which requests it applies to and where they go.
#[derive(Debug)]
pub struct RedirectPolicy {
    scope: KindMatcher,
    rule: AllOf,
    target_base: String,
}

impl RedirectPolicy {
    /// Build a policy for `kind` requests whose URL satisfies every matcher in `rule`.
    pub fn new(kind: RequestKind, rule: Vec<Box<dyn Matcher>>, target_base: impl Into<String>) -> Self {
        Self {
            scope: KindMatcher::new(kind),
            rule: AllOf::new(rule),
            target_base: target_base.into(),
        }
    }

    /// Main-frame navigations to `*.md` go to the local service.
    pub fn markdown() -> Self {
        Self::new(
            ELIGIBLE_KIND,
            vec![Box::new(SuffixMatcher::new(MARKDOWN_SUFFIX))],
            LOCAL_SERVICE_BASE,
        )
    }

    /// Whether the request kind is one this policy inspects at all.
    pub fn in_scope(&self, req: &NavigationRequest) -> bool {
        self.scope.matches(req)
    }

    pub fn matches(&self, req: &NavigationRequest) -> bool {
        self.in_scope(req) && self.rule.matches(req)
    }

    pub fn target_base(&self) -> &str {
        &self.target_base
    }

    pub fn eligible_kind(&self) -> RequestKind {
        self.scope.kind()
    }
}

impl Default for RedirectPolicy {
    fn default() -> Self {
        Self::markdown()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markdown_policy_scope() {
        let policy = RedirectPolicy::markdown();

        assert_eq!(policy.target_base(), "http://localhost:2403");
        assert_eq!(policy.eligible_kind(), RequestKind::MainFrame);
        assert!(!policy.in_scope(&NavigationRequest::new("https://a.org/x.md", RequestKind::SubFrame)));
    }

    #[test]
    fn test_markdown_policy_matches() {
        let policy = RedirectPolicy::markdown();

        assert!(policy.matches(&NavigationRequest::main_frame("https://a.org/x.md")));
        assert!(!policy.matches(&NavigationRequest::main_frame("https://a.org/x.markdown")));
        assert!(!policy.matches(&NavigationRequest::new("https://a.org/x.md", RequestKind::Image)));
    }
}
