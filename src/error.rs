//! Typed failure taxonomy for the oracle function cores
//!
//! Every failure aborts the invocation immediately and propagates to the
//! simulation harness as the sole observable outcome. Nothing is caught and
//! converted internally.

use thiserror::Error;

/// Failure classes a function run can end with
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FunctionError {
    /// A required secret or setting is missing. Non-retryable.
    #[error("configuration error: {0}")]
    Config(String),

    /// The outbound fetch failed or returned no usable payload.
    /// Non-retryable by the core; the caller may retry the whole invocation.
    #[error("upstream error: {0}")]
    Upstream(String),

    /// The query matched nothing. Terminal, not an upstream fault.
    #[error("not found: {0}")]
    NotFound(String),

    /// A matched record or a caller-supplied argument is malformed. Terminal.
    #[error("validation error: {0}")]
    Validation(String),
}
