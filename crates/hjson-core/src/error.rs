//! Error types for value construction, narrowing and container access.

use crate::value::Kind;
use thiserror::Error;

/// Errors raised by the document model. Every variant is a synchronous,
/// caller-actionable contract violation; nothing is retried or swallowed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValueError {
    /// A required name or value slot was empty.
    #[error("Missing argument: {0}")]
    NullArgument(&'static str),

    /// A narrowing accessor was called on a value of another kind.
    #[error("Type mismatch: expected {expected}, found {found}")]
    TypeMismatch { expected: Kind, found: Kind },

    /// A numeric payload does not fit the requested representation
    /// (overflow, fractional value requested as an integer, malformed literal).
    #[error("Number {literal:?} cannot be represented as {target}")]
    RangeOrFormat {
        literal: String,
        target: &'static str,
    },

    /// An array index was outside `0..len`.
    #[error("Index {index} out of range for array of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// Mutation was attempted through a read-only view.
    #[error("Unsupported operation: {0}")]
    UnsupportedOperation(&'static str),
}

/// Convenience alias used throughout hjson-core.
pub type Result<T> = std::result::Result<T, ValueError>;
