//! Error handling for the arithmetic layers

use std::borrow::Cow;
use std::fmt;

use ecprime_api::Error as CoreError;

/// The error type for field and curve arithmetic
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Parameter validation error
    Parameter {
        /// Name of the invalid parameter
        name: &'static str,
        /// Reason why the parameter is invalid
        reason: Cow<'static, str>,
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

    /// Modulus unusable for the requested operation (even, or too small)
    Modulus {
        /// Operation that rejected the modulus
        context: &'static str,
        /// What is wrong with it
        reason: Cow<'static, str>,
    },

    /// Curve parameters that do not describe a usable group
    Curve {
        /// Operation that rejected the curve
        context: &'static str,
        /// What is wrong with it
        reason: Cow<'static, str>,
    },

    /// Point that is malformed, off the curve, or infinity where not allowed
    Point {
        /// Operation that rejected the point
        context: &'static str,
        /// What is wrong with it
        reason: Cow<'static, str>,
    },

    /// Element without a multiplicative inverse
    NotInvertible {
        /// Operation that needed the inverse
        context: &'static str,
    },

    /// Processing error during an operation
    Processing {
        /// Operation that failed
        operation: &'static str,
        /// Additional details about the failure
        details: &'static str,
    },
}

impl Error {
    /// Shorthand to create a Parameter error
    pub fn param<R: Into<Cow<'static, str>>>(name: &'static str, reason: R) -> Self {
        Error::Parameter {
            name,
            reason: reason.into(),
        }
    }

    /// Shorthand to create a Modulus error
    pub fn modulus<R: Into<Cow<'static, str>>>(context: &'static str, reason: R) -> Self {
        Error::Modulus {
            context,
            reason: reason.into(),
        }
    }

    /// Shorthand to create a Curve error
    pub fn curve<R: Into<Cow<'static, str>>>(context: &'static str, reason: R) -> Self {
        Error::Curve {
            context,
            reason: reason.into(),
        }
    }

    /// Shorthand to create a Point error
    pub fn point<R: Into<Cow<'static, str>>>(context: &'static str, reason: R) -> Self {
        Error::Point {
            context,
            reason: reason.into(),
        }
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
            Error::Modulus { context, reason } => {
                write!(f, "Invalid modulus in {}: {}", context, reason)
            }
            Error::Curve { context, reason } => write!(f, "Invalid curve in {}: {}", context, reason),
            Error::Point { context, reason } => write!(f, "Invalid point in {}: {}", context, reason),
            Error::NotInvertible { context } => {
                write!(f, "Element is not invertible in {}", context)
            }
            Error::Processing { operation, details } => {
                write!(f, "Processing error in {}: {}", operation, details)
            }
        }
    }
}

impl std::error::Error for Error {}

impl From<Error> for CoreError {
    fn from(err: Error) -> Self {
        match err {
            Error::Parameter { name, reason } => CoreError::InvalidParameter {
                context: name,
                message: reason.into_owned(),
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
            Error::Modulus { context, reason } => CoreError::InvalidModulus {
                context,
                message: reason.into_owned(),
            },
            Error::Curve { context, reason } => CoreError::InvalidCurve {
                context,
                message: reason.into_owned(),
            },
            Error::Point { context, reason } => CoreError::InvalidPoint {
                context,
                message: reason.into_owned(),
            },
            Error::NotInvertible { context } => CoreError::InvalidParameter {
                context,
                message: "element is not invertible".to_string(),
            },
            Error::Processing { operation, details } => CoreError::Other {
                context: operation,
                message: details.to_string(),
            },
        }
    }
}

// Re-export core error handling trait for convenience
pub use ecprime_api::error::ResultExt;

// Include the validation submodule
pub mod validate;
