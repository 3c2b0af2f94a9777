//! Error types for the library layer.

use std::fmt;

use crate::reference::ReferenceError;

/// Errors produced by the library layer, wrapping upstream API errors
/// and adding reference data and input validation failures.
#[derive(Debug)]
pub enum AvQuotesError {
    /// An error from the underlying API client.
    Api(alphavantage_api::Error),
    /// Index reference data could not be loaded or failed validation.
    Reference(ReferenceError),
    /// User-provided input failed validation.
    InvalidInput(String),
}

impl fmt::Display for AvQuotesError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Api(e) => write!(f, "API error: {}", e),
            Self::Reference(e) => write!(f, "Reference data error: {}", e),
            Self::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
        }
    }
}

impl std::error::Error for AvQuotesError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Api(e) => Some(e),
            Self::Reference(e) => Some(e),
            _ => None,
        }
    }
}

impl From<alphavantage_api::Error> for AvQuotesError {
    fn from(e: alphavantage_api::Error) -> Self {
        Self::Api(e)
    }
}

impl From<ReferenceError> for AvQuotesError {
    fn from(e: ReferenceError) -> Self {
        Self::Reference(e)
    }
}
