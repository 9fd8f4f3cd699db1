//! Engine error taxonomy.
//!
//! Boundary conditions (out-of-range index, empty needle, no match)
//! are defined result values and never appear here. Errors are
//! reserved for malformed traffic at the dispatch boundary; a failed
//! call leaves every slot untouched.

use thiserror::Error;

/// Errors surfaced by the call/response boundary.
#[derive(Debug, Error)]
pub enum OpsError {
    /// A wire argument could not be decoded into the operation's
    /// parameter type: missing key, wrong JSON type, unrepresentable
    /// number, or non-ASCII string content.
    #[error("invalid argument for {operation}: {reason}")]
    InvalidArgument {
        /// Wire name of the operation (or `read`) that rejected the call.
        operation: String,
        /// Human-readable description of the violation.
        reason: String,
    },

    /// The wire operation name does not exist.
    #[error("unknown operation '{0}'")]
    UnknownOperation(String),

    /// The named result slot does not exist.
    #[error("unknown result slot '{0}'")]
    UnknownSlot(String),
}

impl OpsError {
    /// Shorthand constructor for [`OpsError::InvalidArgument`].
    pub fn invalid_argument(operation: &str, reason: impl Into<String>) -> Self {
        OpsError::InvalidArgument {
            operation: operation.to_string(),
            reason: reason.into(),
        }
    }
}
