//! Error types for attitude construction and estimation.
//!
//! Only genuinely ill-posed inputs are reported here. Numerically delicate but
//! well-defined cases (tiny rotation angles, gimbal lock, small Shepperd
//! pivots) are handled by stable branches and always produce a value.

use thiserror::Error;

/// Result type for fallible attitude operations.
pub type Result<T> = std::result::Result<T, AttitudeError>;

/// Errors surfaced by quaternion construction and estimation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AttitudeError {
    /// Input carries no usable orientation information: a zero-norm
    /// quaternion, an empty sample set, or rank-deficient Wahba observations.
    #[error("degenerate input: {reason}")]
    DegenerateInput { reason: String },

    /// Paired inputs have mismatched lengths.
    #[error("invalid shape for {what}: expected {expected}, got {actual}")]
    InvalidShape {
        what: &'static str,
        expected: usize,
        actual: usize,
    },

    /// rkyv failed to write, or to validate, an archived quaternion.
    #[error("quaternion serialization failed: {0}")]
    Serialization(String),
}

impl AttitudeError {
    pub(crate) fn degenerate(reason: impl Into<String>) -> Self {
        AttitudeError::DegenerateInput {
            reason: reason.into(),
        }
    }
}
