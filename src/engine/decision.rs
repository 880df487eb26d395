//! The redirect decision function.

use std::sync::{Arc, LazyLock};

use url::Url;

use crate::engine::error::DecisionError;
use crate::engine::target::build_target;
use crate::engine::types::{NavigationRequest, RedirectDecision};
use crate::policy::RedirectPolicy;

/// Applies a [`RedirectPolicy`] to navigation requests.
///
/// Cheap to clone; clones share the same immutable policy.
#[derive(Debug, Clone)]
pub struct RedirectEngine {
    policy: Arc<RedirectPolicy>,
}

impl RedirectEngine {
    pub fn new(policy: RedirectPolicy) -> Self {
        Self {
            policy: Arc::new(policy),
        }
    }

    pub fn policy(&self) -> &RedirectPolicy {
        &self.policy
    }

    /// Classify one navigation request.
    ///
    /// Requests outside the policy's kind are allowed without looking at the
    /// URL. For in-scope requests a URL that does not parse as an absolute URL
    /// is reported as [`DecisionError::InvalidInput`].
    pub fn decide(&self, request: &NavigationRequest) -> Result<RedirectDecision, DecisionError> {
        if !self.policy.in_scope(request) {
            return Ok(RedirectDecision::Allow);
        }

        validate_url(&request.url)?;

        if self.policy.matches(request) {
            Ok(RedirectDecision::Redirect {
                target_url: build_target(self.policy.target_base(), &request.url),
            })
        } else {
            Ok(RedirectDecision::Allow)
        }
    }
}

impl Default for RedirectEngine {
    fn default() -> Self {
        Self::new(RedirectPolicy::markdown())
    }
}

static MARKDOWN_ENGINE: LazyLock<RedirectEngine> = LazyLock::new(RedirectEngine::default);

/// Decide a request against the fixed Markdown policy.
pub fn decide(request: &NavigationRequest) -> Result<RedirectDecision, DecisionError> {
    MARKDOWN_ENGINE.decide(request)
}

fn validate_url(raw: &str) -> Result<(), DecisionError> {
    // The parser silently strips these; the raw string is what gets encoded.
    if raw.trim() != raw || raw.contains(['\t', '\n', '\r']) {
        return Err(DecisionError::invalid_input(
            raw,
            "URL contains surrounding whitespace or control characters",
        ));
    }

    Url::parse(raw)
        .map(|_| ())
        .map_err(|e| DecisionError::invalid_input(raw, format!("not an absolute URL: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::types::RequestKind;

    #[test]
    fn test_redirects_markdown_main_frame() {
        let decision = decide(&NavigationRequest::main_frame("https://example.com/docs/readme.md")).unwrap();

        assert_eq!(
            decision,
            RedirectDecision::Redirect {
                target_url: "http://localhost:2403?url=https%3A%2F%2Fexample.com%2Fdocs%2Freadme.md".into()
            }
        );
    }

    #[test]
    fn test_allows_other_suffixes() {
        for url in [
            "https://example.com/",
            "https://example.com/readme.MD",
            "https://example.com/readme.md?raw=1",
            "https://example.com/readme.md#intro",
            "https://example.com/readme.mdx",
        ] {
            assert_eq!(decide(&NavigationRequest::main_frame(url)).unwrap(), RedirectDecision::Allow, "{}", url);
        }
    }

    #[test]
    fn test_query_ending_in_suffix_redirects_whole_url() {
        let url = "https://example.com/view?file=notes.md";
        let decision = decide(&NavigationRequest::main_frame(url)).unwrap();

        assert_eq!(
            decision.target_url(),
            Some("http://localhost:2403?url=https%3A%2F%2Fexample.com%2Fview%3Ffile%3Dnotes.md")
        );
    }

    #[test]
    fn test_other_kinds_always_allowed() {
        for kind in RequestKind::ALL.into_iter().filter(|k| *k != RequestKind::MainFrame) {
            let req = NavigationRequest::new("https://example.com/readme.md", kind);
            assert_eq!(decide(&req).unwrap(), RedirectDecision::Allow, "{}", kind);
        }
    }

    #[test]
    fn test_other_kinds_skip_url_validation() {
        let req = NavigationRequest::new("not a url.md", RequestKind::Script);
        assert_eq!(decide(&req).unwrap(), RedirectDecision::Allow);
    }

    #[test]
    fn test_malformed_url_is_invalid_input() {
        for url in ["", "readme.md", "/docs/readme.md", " https://a.org/x.md", "https://a.org/x\n.md", "http://[::1/x.md"] {
            let err = decide(&NavigationRequest::main_frame(url)).unwrap_err();
            assert!(matches!(err, DecisionError::InvalidInput { .. }), "{:?}", url);
            assert_eq!(err.input(), url);
        }
    }

    #[test]
    fn test_custom_policy() {
        use crate::policy::matcher::SuffixMatcher;

        let engine = RedirectEngine::new(RedirectPolicy::new(
            RequestKind::SubFrame,
            vec![Box::new(SuffixMatcher::new(".txt"))],
            "http://127.0.0.1:9000/view",
        ));

        let decision = engine
            .decide(&NavigationRequest::new("https://a.org/n.txt", RequestKind::SubFrame))
            .unwrap();
        assert_eq!(decision.target_url(), Some("http://127.0.0.1:9000/view?url=https%3A%2F%2Fa.org%2Fn.txt"));
        assert!(!engine.decide(&NavigationRequest::main_frame("https://a.org/n.txt")).unwrap().is_redirect());
    }
}
