//! CRN validation
//!
//! Lexical well-formedness check for Company Registration Numbers. This is
//! the only place format rules live; everything downstream assumes a `Crn`
//! is already valid.

use crate::error::LookupError;

/// A validated Company Registration Number.
///
/// Constructed only through [`Crn::parse`]; the text is immutable afterwards
/// and [`Crn::as_str`] returns it exactly as submitted (no trimming, case
/// folding, or zero-padding).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Crn(String);

impl Crn {
    /// Validate a raw CRN string.
    ///
    /// Accepts iff the input is non-empty and every character is
    /// alphanumeric. Letters and digits outside ASCII pass; whitespace,
    /// punctuation, and symbols do not. The empty string is rejected the
    /// same way a symbol-containing string is.
    pub fn parse(raw: &str) -> Result<Self, LookupError> {
        if raw.is_empty() || !raw.chars().all(char::is_alphanumeric) {
            return Err(LookupError::InvalidCrn);
        }
        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Crn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
