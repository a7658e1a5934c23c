//! Custom error types for the point-of-sale core

use crate::core::types::FieldErrors;
use thiserror::Error;

/// Main error type for the crate
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid data or parameter
    #[error("Invalid data: {0}")]
    InvalidData(String),

    /// Operation not permitted in current state
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// A menu item or order with the given key does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// An order was requested from a cart with no entries
    #[error("Cannot place an order from an empty cart")]
    EmptyCart,

    /// Form input rejected, keyed by field name
    #[error("Validation failed: {0:?}")]
    Validation(FieldErrors),

    /// The external description provider failed
    #[error("Generation error: {0}")]
    Generation(String),

    /// HTTP transport failure
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Serialization or deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration file could not be parsed
    #[error("Config error: {0}")]
    Config(#[from] toml::de::Error),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Other error
    #[error("Other error: {0}")]
    Other(String),
}

impl From<String> for Error {
    fn from(s: String) -> Self {
        Error::Other(s)
    }
}

impl From<&str> for Error {
    fn from(s: &str) -> Self {
        Error::Other(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            Error::EmptyCart.to_string(),
            "Cannot place an order from an empty cart"
        );
        assert_eq!(
            Error::NotFound("item-9".into()).to_string(),
            "Not found: item-9"
        );
        assert!(matches!(Error::from("boom"), Error::Other(ref s) if s == "boom"));
    }
}
