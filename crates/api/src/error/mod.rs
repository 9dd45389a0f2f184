//! Error handling for the ecprime ecosystem

pub mod traits;
pub mod types;

pub use traits::ResultExt;
pub use types::{Error, Result};

impl From<core::num::ParseIntError> for Error {
    fn from(e: core::num::ParseIntError) -> Self {
        Self::InvalidParameter {
            context: "integer parsing",
            message: e.to_string(),
        }
    }
}

// Specialized result types for different layers
pub type KeyResult<T> = Result<T>;
pub type SignatureResult<T> = Result<T>;
