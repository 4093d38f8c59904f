//! Error handling for the arithmetic primitives

use core::fmt;

use ecsig_api::Error as CoreError;

/// The error type for field, scalar and point arithmetic
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Parameter validation error
    Parameter {
        /// Name of the invalid parameter
        name: &'static str,
        /// Reason why the parameter is invalid
        reason: &'static str,
    },

    /// Length validation error
    Length {
        /// Context where the length error occurred
        context: &'static str,
        /// Expected length in bytes
        expected: usize,
        /// Actual length in bytes
        actual: usize,
    },

    /// Scalar is zero or not below the group order
    ScalarRange {
        /// Operation that rejected the scalar
        context: &'static str,
    },

    /// Encoding does not describe a finite point on the curve
    PointNotOnCurve {
        /// Operation that rejected the point
        context: &'static str,
    },

    /// Point is on the curve but `n·Q` is not the identity
    InvalidSubgroup {
        /// Operation that rejected the point
        context: &'static str,
    },

    /// Operand violates a precondition of the operation (e.g. inverting zero)
    InvalidOperand {
        /// Operation that failed
        operation: &'static str,
        /// Additional details about the failure
        details: &'static str,
    },
}

impl Error {
    /// Shorthand to create a Parameter error
    pub fn param(name: &'static str, reason: &'static str) -> Self {
        Error::Parameter { name, reason }
    }
}

/// Result type for arithmetic operations
pub type Result<T> = core::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Parameter { name, reason } => {
                write!(f, "Invalid parameter '{}': {}", name, reason)
            }
            Error::Length {
                context,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "Invalid length for {}: expected {}, got {}",
                    context, expected, actual
                )
            }
            Error::ScalarRange { context } => {
                write!(f, "Scalar out of range in {}", context)
            }
            Error::PointNotOnCurve { context } => {
                write!(f, "Point not on curve in {}", context)
            }
            Error::InvalidSubgroup { context } => {
                write!(f, "Point outside the prime-order subgroup in {}", context)
            }
            Error::InvalidOperand { operation, details } => {
                write!(f, "Invalid operand in {}: {}", operation, details)
            }
        }
    }
}

impl std::error::Error for Error {}

// Implement conversion to CoreError
impl From<Error> for CoreError {
    fn from(err: Error) -> Self {
        match err {
            Error::Parameter { name, reason } => CoreError::InvalidOperand {
                context: name,
                message: reason.to_string(),
            },
            Error::Length {
                context,
                expected,
                actual,
            } => CoreError::InvalidLength {
                context,
                expected,
                actual,
            },
            Error::ScalarRange { context } => CoreError::InvalidScalarRange { context },
            Error::PointNotOnCurve { context } => CoreError::PointNotOnCurve { context },
            Error::InvalidSubgroup { context } => CoreError::InvalidSubgroup { context },
            Error::InvalidOperand { operation, details } => CoreError::InvalidOperand {
                context: operation,
                message: details.to_string(),
            },
        }
    }
}

// Include the validation submodule
pub mod validate;

#[cfg(test)]
mod tests;
