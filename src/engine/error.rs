//! Errors raised by the decision engine.

/// The only failure the engine reports: the caller handed it something it
/// cannot reason about.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecisionError {
    #[error("invalid input `{input}`: {reason}")]
    InvalidInput { input: String, reason: String },
}

impl DecisionError {
    pub fn invalid_input(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            input: input.into(),
            reason: reason.into(),
        }
    }

    /// The offending input string.
    pub fn input(&self) -> &str {
        match self {
            Self::InvalidInput { input, .. } => input,
        }
    }
}
