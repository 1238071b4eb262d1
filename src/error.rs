//! Typed error model for the lookup path.
//!
//! Exactly two failure kinds exist: a CRN that fails lexical validation, and
//! anything that goes wrong talking to the upstream registry. Validation
//! failures never reach the network; upstream failures are propagated to the
//! caller, never masked or retried.

use thiserror::Error;

/// Failure modes of a company record lookup.
#[derive(Debug, Error)]
pub enum LookupError {
    /// The raw CRN contained a non-alphanumeric character (or was empty).
    ///
    /// The display text is the caller-visible diagnostic and must not change.
    #[error("CRN should only contain alphanumeric characters")]
    InvalidCrn,

    /// Transport failure, non-success upstream status, or a payload that
    /// could not be decoded.
    #[error("upstream registry error: {message}")]
    Upstream { message: String },
}

impl LookupError {
    pub fn upstream(message: impl Into<String>) -> Self {
        Self::Upstream {
            message: message.into(),
        }
    }
}
