//! Error taxonomy for the skill contract.
//!
//! Two families: [`ValidationError`] for malformed or out-of-range envelope
//! fields (surfaced immediately to the caller, never recovered locally), and
//! [`SkillError`] for dispatch-level failures. Every failure is terminal for
//! the call that produced it; no retry or backoff semantics exist anywhere.

use thiserror::Error;

/// A request or response envelope broke the contract. The message always
/// names the offending field and the violated constraint.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("{field} is required but missing")]
    MissingField { field: &'static str },

    #[error("{field} must be {expected}, got {actual}")]
    WrongType {
        field: &'static str,
        expected: &'static str,
        actual: String,
    },

    #[error("request_id must be a non-empty string")]
    EmptyRequestId,

    #[error("confidence must be in [0.0, 1.0], got {got}")]
    ConfidenceOutOfRange { got: f64 },

    #[error("processing_time must be non-negative, got {got}")]
    NegativeProcessingTime { got: f64 },

    /// `result` is present exactly when `success` is true.
    #[error("result must be present iff success is true (success: {success}, result present: {has_result})")]
    ResultSuccessMismatch { success: bool, has_result: bool },

    /// `error` is present exactly when `success` is false.
    #[error("error must be present iff success is false (success: {success}, error present: {has_error})")]
    ErrorSuccessMismatch { success: bool, has_error: bool },

    #[error("request_id must echo the originating request: expected '{expected}', got '{got}'")]
    RequestIdMismatch { expected: String, got: String },
}

/// Dispatch-level failures surfaced by [`crate::SkillRegistry`].
#[derive(Debug, Error)]
pub enum SkillError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Capability invoked without a concrete implementation registered.
    /// Fatal: indicates a missing collaborator, never retried.
    #[error("no skill registered under '{0}'")]
    UnknownSkill(String),

    #[error("skill '{skill}' exceeded the {secs}s invocation deadline")]
    Timeout { skill: String, secs: u64 },

    /// A skill implementation failed internally. Dispatch normally folds this
    /// into a failed response envelope; the variant exists for skills that
    /// need to abort before producing one.
    #[error("skill execution failed: {0}")]
    Execution(String),
}
