//! Error type definitions for signature operations

use thiserror::Error as ThisError;

/// Primary error type for ecsig operations
///
/// Every variant names the operation that failed in `context`. Validation
/// failures are always returned to the immediate caller; nothing is retried
/// or swallowed below this type.
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum Error {
    /// Key bytes of the wrong size
    #[error("{context}: invalid key length (expected {expected}, got {actual})")]
    InvalidKeyLength {
        context: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Scalar is zero or not below the group order
    #[error("{context}: scalar out of range [1, n-1]")]
    InvalidScalarRange { context: &'static str },

    /// Coordinates are not reduced, do not satisfy the curve equation, or
    /// describe the point at infinity
    #[error("{context}: point is not on the curve")]
    PointNotOnCurve { context: &'static str },

    /// Point lies on the curve but outside the prime-order subgroup
    #[error("{context}: point is not in the prime-order subgroup")]
    InvalidSubgroup { context: &'static str },

    /// Internal precondition violation, such as inverting zero
    #[error("{context}: invalid operand: {message}")]
    InvalidOperand {
        context: &'static str,
        message: String,
    },

    /// Signature components outside `[1, n-1]` or badly encoded
    #[error("{context}: malformed signature: {reason}")]
    MalformedSignature {
        context: &'static str,
        reason: &'static str,
    },

    /// The randomness source failed or could not produce a usable value
    #[error("{context}: entropy unavailable: {message}")]
    EntropyUnavailable {
        context: &'static str,
        message: String,
    },

    /// Fixed-size buffer of the wrong size
    #[error("{context}: invalid length (expected {expected}, got {actual})")]
    InvalidLength {
        context: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Private key used after `dispose`
    #[error("{context}: key has been disposed")]
    KeyDisposed { context: &'static str },
}

/// Result type for ecsig operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Replace the context of an existing error, keeping its kind and details
    pub fn with_context(self, context: &'static str) -> Self {
        match self {
            Self::InvalidKeyLength {
                expected, actual, ..
            } => Self::InvalidKeyLength {
                context,
                expected,
                actual,
            },
            Self::InvalidScalarRange { .. } => Self::InvalidScalarRange { context },
            Self::PointNotOnCurve { .. } => Self::PointNotOnCurve { context },
            Self::InvalidSubgroup { .. } => Self::InvalidSubgroup { context },
            Self::InvalidOperand { message, .. } => Self::InvalidOperand { context, message },
            Self::MalformedSignature { reason, .. } => Self::MalformedSignature { context, reason },
            Self::EntropyUnavailable { message, .. } => {
                Self::EntropyUnavailable { context, message }
            }
            Self::InvalidLength {
                expected, actual, ..
            } => Self::InvalidLength {
                context,
                expected,
                actual,
            },
            Self::KeyDisposed { .. } => Self::KeyDisposed { context },
        }
    }

    /// The operation that reported this error
    pub fn context(&self) -> &'static str {
        match self {
            Self::InvalidKeyLength { context, .. }
            | Self::InvalidScalarRange { context }
            | Self::PointNotOnCurve { context }
            | Self::InvalidSubgroup { context }
            | Self::InvalidOperand { context, .. }
            | Self::MalformedSignature { context, .. }
            | Self::EntropyUnavailable { context, .. }
            | Self::InvalidLength { context, .. }
            | Self::KeyDisposed { context } => context,
        }
    }

    /// True for errors caused by bytes supplied by the caller
    ///
    /// A rejected-but-well-formed signature is not an error at all (verify
    /// returns `Ok(false)`), so callers can use this to separate garbage input
    /// from everything else.
    pub fn is_malformed_input(&self) -> bool {
        matches!(
            self,
            Self::InvalidKeyLength { .. }
                | Self::InvalidScalarRange { .. }
                | Self::PointNotOnCurve { .. }
                | Self::InvalidSubgroup { .. }
                | Self::MalformedSignature { .. }
                | Self::InvalidLength { .. }
        )
    }
}
