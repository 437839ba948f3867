//! Evaluation errors for the episode pipeline

use crate::rules::RuleError;
use regimen_model::SourceError;
use thiserror::Error;

/// Result type for evaluation operations
pub type EvalResult<T> = Result<T, EvalError>;

/// Errors that can occur during an episode evaluation.
///
/// The pipeline stages themselves are total; errors come only from the
/// boundaries: the observation fetch and the rule configuration.
#[derive(Debug, Error)]
pub enum EvalError {
    /// The observation source failed to deliver a stream
    #[error("Observation fetch failed: {0}")]
    Source(#[from] SourceError),

    /// The rule could not be built or resolved
    #[error("Rule error: {0}")]
    Rule(#[from] RuleError),

    /// Internal error (should not happen)
    #[error("Internal evaluation error: {message}")]
    Internal { message: String },
}

impl EvalError {
    /// Create an internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}
