//! Error types for vitrine-core.
//!
//! The listing path itself never fails: decode, reduction, windowing and tree
//! construction all degrade to defaults (see the per-module contracts).
//! Errors exist only at the boundaries where the caller hands in payloads or
//! configuration that cannot be given a sensible default: JSON parsing and
//! config validation.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type VitrineResult<T> = Result<T, VitrineError>;

/// Crate-wide error type.
#[derive(Debug, Error)]
pub enum VitrineError {
    /// The caller supplied an argument that violates a documented contract.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A payload could not be decoded into the expected shape.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// An internal invariant did not hold for collaborator-supplied data.
    #[error("invariant violation: {0}")]
    Invariant(String),
}

impl VitrineError {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    pub fn serialization(msg: impl Into<String>) -> Self {
        Self::Serialization(msg.into())
    }

    pub fn invariant(msg: impl Into<String>) -> Self {
        Self::Invariant(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_message() {
        let e = VitrineError::invalid_argument("bad page");
        assert!(e.to_string().contains("bad page"));

        let e = VitrineError::invariant("values not sorted");
        assert!(e.to_string().contains("invariant"));
    }
}
