//! Error types for the contact form.
//!
//! Validation failures are per field and always user-correctable.
//! Everything else describes why the coordinator refused a request, why the
//! submitter failed, or why a configuration value was rejected.

use thiserror::Error;

use crate::fields::FormErrors;

/// Why a single field failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum ValidationError {
    /// Empty after trimming whitespace.
    #[error("required")]
    Required,
    /// Shorter than `min` characters after trimming.
    #[error("too short (minimum {min} characters)")]
    TooShort { min: usize },
    /// Not a `local@domain.tld` address.
    #[error("invalid format")]
    InvalidFormat,
}

/// Failure of the (simulated) remote call.
#[derive(Debug, Error)]
pub enum SubmissionError {
    #[error("submission transport failed: {0}")]
    Transport(String),
    #[error("failed to encode contact request: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Why the coordinator refused to act.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitRejected {
    #[error("{} field(s) failed validation", .0.len())]
    Invalid(FormErrors),
    #[error("a submission is already in flight")]
    Busy,
    #[error("the request was already submitted")]
    AlreadySubmitted,
    #[error("nothing to reset: the form has not been submitted")]
    NotSubmitted,
    #[error("the form is no longer mounted")]
    Detached,
}

/// Invalid build-time configuration value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("unknown locale `{0}` (expected `de` or `en`)")]
    UnknownLocale(String),
    #[error("invalid submit delay `{0}`: expected milliseconds as an unsigned integer")]
    InvalidDelay(String),
}
