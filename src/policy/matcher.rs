//! Navigation matching logic.
//!
//! # Responsibilities
//! - Match the request kind (exact)
//! - Match the raw URL suffix (case-sensitive)
//! - Combine conditions with AND semantics
//!
//! # Design Decisions
//! - Suffix matching runs on the raw string; query and fragment are not stripped
//! - No case folding: `.MD` is not `.md`
//! - No regex to guarantee O(n) matching

use crate::engine::types::{NavigationRequest, RequestKind};

/// Trait for matching navigation requests against conditions.
pub trait Matcher: Send + Sync + std::fmt::Debug {
    /// Returns true if the request matches this condition.
    fn matches(&self, req: &NavigationRequest) -> bool;
}

/// Matches one request kind.
#[derive(Debug, Clone, Copy)]
pub struct KindMatcher {
    kind: RequestKind,
}

impl KindMatcher {
    pub fn new(kind: RequestKind) -> Self {
        Self { kind }
    }

    pub fn kind(&self) -> RequestKind {
        self.kind
    }
}

impl Matcher for KindMatcher {
    fn matches(&self, req: &NavigationRequest) -> bool {
        req.kind == self.kind
    }
}

/// Matches the trailing characters of the URL.
#[derive(Debug, Clone)]
pub struct SuffixMatcher {
    suffix: String,
}

impl SuffixMatcher {
    pub fn new(suffix: impl Into<String>) -> Self {
        Self {
            suffix: suffix.into(),
        }
    }
}

impl Matcher for SuffixMatcher {
    fn matches(&self, req: &NavigationRequest) -> bool {
        req.url.ends_with(&self.suffix)
    }
}

/// Combines multiple matchers with AND semantics.
///
/// An empty set matches everything.
#[derive(Debug, Default)]
pub struct AllOf {
    matchers: Vec<Box<dyn Matcher>>,
}

impl AllOf {
    pub fn new(matchers: Vec<Box<dyn Matcher>>) -> Self {
        Self { matchers }
    }
}

impl Matcher for AllOf {
    fn matches(&self, req: &NavigationRequest) -> bool {
        self.matchers.iter().all(|m| m.matches(req))
    }
}
