//! Core error type for the ecprime library

use thiserror::Error as ThisError;

/// Result type used across the public API
pub type Result<T> = core::result::Result<T, Error>;

/// Error type for ecprime operations
///
/// Every variant carries the name of the operation that failed so that a
/// caller several layers up can still tell where a precondition broke.
#[derive(ThisError, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// An even or otherwise unusable modulus reached inversion or exponentiation
    #[error("Invalid modulus: {context}: {message}")]
    InvalidModulus {
        context: &'static str,
        message: String,
    },

    /// Unknown curve name, singular curve, or a generator that fails its checks
    #[error("Invalid curve: {context}: {message}")]
    InvalidCurve {
        context: &'static str,
        message: String,
    },

    /// Point at infinity where a finite point is required, or malformed coordinates
    #[error("Invalid point: {context}: {message}")]
    InvalidPoint {
        context: &'static str,
        message: String,
    },

    /// Signature component outside `[1, order-1]` or undecodable signature
    #[error("Invalid signature: {context}: {message}")]
    InvalidSignature {
        context: &'static str,
        message: String,
    },

    /// Key material that fails curve or subgroup validation
    #[error("Invalid key: {context}: {message}")]
    InvalidKey {
        context: &'static str,
        message: String,
    },

    /// Signing produced `s = 0` with a caller-fixed nonce
    #[error("{context}: a fresh nonce is required to complete signing")]
    NeedNewNonce {
        context: &'static str,
    },

    /// Generic parameter validation failure
    #[error("{context}: {message}")]
    InvalidParameter {
        context: &'static str,
        message: String,
    },

    /// Length validation failure
    #[error("{context}: invalid length (expected {expected}, got {actual})")]
    InvalidLength {
        context: &'static str,
        expected: usize,
        actual: usize,
    },

    /// The random source failed to deliver bytes
    #[error("Random generation error: {context}: {message}")]
    RandomGenerationError {
        context: &'static str,
        message: String,
    },

    /// Anything that does not fit the kinds above
    #[error("{context}: {message}")]
    Other {
        context: &'static str,
        message: String,
    },
}

impl Error {
    /// Replace the operation context of this error
    pub fn with_context(self, context: &'static str) -> Self {
        match self {
            Self::InvalidModulus { message, .. } => Self::InvalidModulus { context, message },
            Self::InvalidCurve { message, .. } => Self::InvalidCurve { context, message },
            Self::InvalidPoint { message, .. } => Self::InvalidPoint { context, message },
            Self::InvalidSignature { message, .. } => Self::InvalidSignature { context, message },
            Self::InvalidKey { message, .. } => Self::InvalidKey { context, message },
            Self::NeedNewNonce { .. } => Self::NeedNewNonce { context },
            Self::InvalidParameter { message, .. } => Self::InvalidParameter { context, message },
            Self::InvalidLength { expected, actual, .. } => Self::InvalidLength {
                context,
                expected,
                actual,
            },
            Self::RandomGenerationError { message, .. } => {
                Self::RandomGenerationError { context, message }
            }
            Self::Other { message, .. } => Self::Other { context, message },
        }
    }

    /// Replace the detail message of this error
    ///
    /// Variants without a message field are returned unchanged.
    pub fn with_message(self, message: impl Into<String>) -> Self {
        let message = message.into();
        match self {
            Self::InvalidModulus { context, .. } => Self::InvalidModulus { context, message },
            Self::InvalidCurve { context, .. } => Self::InvalidCurve { context, message },
            Self::InvalidPoint { context, .. } => Self::InvalidPoint { context, message },
            Self::InvalidSignature { context, .. } => Self::InvalidSignature { context, message },
            Self::InvalidKey { context, .. } => Self::InvalidKey { context, message },
            Self::InvalidParameter { context, .. } => Self::InvalidParameter { context, message },
            Self::RandomGenerationError { context, .. } => {
                Self::RandomGenerationError { context, message }
            }
            Self::Other { context, .. } => Self::Other { context, message },
            other @ (Self::NeedNewNonce { .. } | Self::InvalidLength { .. }) => other,
        }
    }

    /// The operation context recorded in this error
    pub fn context(&self) -> &'static str {
        match self {
            Self::InvalidModulus { context, .. }
            | Self::InvalidCurve { context, .. }
            | Self::InvalidPoint { context, .. }
            | Self::InvalidSignature { context, .. }
            | Self::InvalidKey { context, .. }
            | Self::NeedNewNonce { context }
            | Self::InvalidParameter { context, .. }
            | Self::InvalidLength { context, .. }
            | Self::RandomGenerationError { context, .. }
            | Self::Other { context, .. } => context,
        }
    }
}

impl From<rand::Error> for Error {
    fn from(e: rand::Error) -> Self {
        Self::RandomGenerationError {
            context: "random source",
            message: e.to_string(),
        }
    }
}
