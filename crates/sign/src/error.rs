//! Error types for the signature crate

use core::fmt;

use ecprime_algorithms::Error as AlgoError;

/// Errors that can occur during signature operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Field or curve arithmetic rejected its inputs
    Algorithm(AlgoError),

    /// Key material missing, out of range, or failing validation
    Key {
        /// Operation that rejected the key
        context: &'static str,
        /// What is wrong with it
        details: String,
    },

    /// The nonce cannot produce a signature; a fresh one is needed
    Nonce {
        /// Operation that ran into the unusable nonce
        context: &'static str,
    },

    /// Signature components out of range or undecodable
    Signature {
        /// Operation that rejected the signature
        context: &'static str,
        /// What is wrong with it
        details: String,
    },

    /// Digest empty, zero, or wider than the group order
    Digest {
        /// Operation that rejected the digest
        context: &'static str,
        /// What is wrong with it
        details: String,
    },

    /// Key and operation refer to different curves, or the curve is unknown
    Curve {
        /// Operation that found the mismatch
        context: &'static str,
        /// What is wrong
        details: String,
    },
}

impl Error {
    /// Shorthand to create a Key error
    pub fn key(context: &'static str, details: impl Into<String>) -> Self {
        Error::Key {
            context,
            details: details.into(),
        }
    }

    /// Shorthand to create a Signature error
    pub fn signature(context: &'static str, details: impl Into<String>) -> Self {
        Error::Signature {
            context,
            details: details.into(),
        }
    }

    /// Shorthand to create a Digest error
    pub fn digest(context: &'static str, details: impl Into<String>) -> Self {
        Error::Digest {
            context,
            details: details.into(),
        }
    }

    /// Shorthand to create a Curve error
    pub fn curve(context: &'static str, details: impl Into<String>) -> Self {
        Error::Curve {
            context,
            details: details.into(),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Algorithm(err) => write!(f, "Arithmetic error: {}", err),
            Error::Key { context, details } => write!(f, "Invalid key in {}: {}", context, details),
            Error::Nonce { context } => write!(f, "{}: a fresh nonce is required", context),
            Error::Signature { context, details } => {
                write!(f, "Invalid signature in {}: {}", context, details)
            }
            Error::Digest { context, details } => {
                write!(f, "Invalid digest in {}: {}", context, details)
            }
            Error::Curve { context, details } => {
                write!(f, "Curve mismatch in {}: {}", context, details)
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Algorithm(err) => Some(err),
            _ => None,
        }
    }
}

// Convert from the arithmetic layer's error
impl From<AlgoError> for Error {
    fn from(err: AlgoError) -> Self {
        Error::Algorithm(err)
    }
}

// Convert to api::Error
impl From<Error> for ecprime_api::Error {
    fn from(err: Error) -> Self {
        match err {
            Error::Algorithm(err) => ecprime_api::Error::from(err),
            Error::Key { context, details } => ecprime_api::Error::InvalidKey {
                context,
                message: details,
            },
            Error::Nonce { context } => ecprime_api::Error::NeedNewNonce { context },
            Error::Signature { context, details } => ecprime_api::Error::InvalidSignature {
                context,
                message: details,
            },
            Error::Digest { context, details } => ecprime_api::Error::InvalidParameter {
                context,
                message: details,
            },
            Error::Curve { context, details } => ecprime_api::Error::InvalidCurve {
                context,
                message: details,
            },
        }
    }
}

/// Result type for signature operations
pub type Result<T> = core::result::Result<T, Error>;
