//! # Error Types
//!
//! Core error enum used by the foundational types. All errors use
//! `thiserror` for derive-based `Display` and `Error` implementations.
//!
//! Record-level validation reports (exhaustive, per-field) live in
//! `ct-schema`; the errors here cover single-value construction failures
//! for timestamps, vocabularies, and validated newtypes.

use thiserror::Error;

/// Error constructing a foundational value.
#[derive(Error, Debug)]
pub enum CtError {
    /// A timestamp string could not be parsed or lacked an explicit offset.
    #[error("invalid timestamp: {0}")]
    InvalidTimestamp(String),

    /// A value failed the constraint attached to its field.
    #[error("invalid {field}: {reason}")]
    InvalidValue {
        /// Field or vocabulary name the value was destined for.
        field: &'static str,
        /// Why the value was rejected.
        reason: String,
    },
}

impl CtError {
    /// Shorthand constructor for constraint failures.
    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidValue {
            field,
            reason: reason.into(),
        }
    }
}
