//! Error types for radix conversion, literal evaluation and value decoding.

use thiserror::Error;

use crate::radix::Radix;

/// Errors that can occur in primitives-core operations.
#[derive(Error, Debug)]
pub enum PrimitiveError {
    /// The requested base is not one of 2, 8, 10 or 16.
    #[error("Invalid radix: {0} (expected 2, 8, 10 or 16)")]
    InvalidRadix(u32),

    /// `parse` found no digit valid for the radix at the start of the input.
    #[error("Not a number: {input:?} has no base-{radix} digits")]
    NotANumber { input: String, radix: Radix },

    /// The digit run is valid but its value does not fit in an `i64`.
    #[error("Overflow: {input:?} does not fit in a 64-bit integer in base {radix}")]
    Overflow { input: String, radix: Radix },

    /// The text is not a well-formed numeric literal.
    #[error("Invalid numeric literal: {0:?}")]
    InvalidLiteral(String),

    /// A legacy `0`-prefixed literal such as `0100`, whose base cannot be inferred.
    #[error("Ambiguous octal literal {0:?}: use a 0o prefix or parse with radix 8")]
    AmbiguousOctal(String),

    /// The input string was not valid JSON.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias used throughout primitives-core.
pub type Result<T> = std::result::Result<T, PrimitiveError>;
