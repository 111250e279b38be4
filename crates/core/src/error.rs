//! Error types shared by the request pipeline and the HTTP client.

use thiserror::Error;

/// Errors that can occur while building or sending a Flapjack API request.
#[derive(Debug, Error)]
pub enum Error {
    /// A required argument was not supplied.
    #[error("'{0}' is required")]
    MissingRequiredParameter(String),

    /// A supplied argument has the wrong type.
    #[error("'{name}' must be {expected}")]
    InvalidParameterType {
        /// Parameter name.
        name: String,
        /// Description of the expected type, e.g. "an integer".
        expected: &'static str,
    },

    /// The configured base endpoint could not be parsed.
    #[error("invalid endpoint: {0:?}")]
    InvalidEndpoint(String),

    /// Connection error (network failure, DNS resolution, etc.).
    #[error("connection error: {0}")]
    Connection(String),

    /// Response body could not be decoded as JSON.
    #[error("failed to deserialize response: {0}")]
    Deserialization(String),

    /// Client configuration error.
    #[error("configuration error: {0}")]
    Configuration(String),
}

impl Error {
    /// Returns `true` if the error was raised before any request was sent.
    pub fn is_validation_error(&self) -> bool {
        matches!(
            self,
            Self::MissingRequiredParameter(_) | Self::InvalidParameterType { .. }
        )
    }

    /// Returns `true` if the error came from the transport.
    pub fn is_transport_error(&self) -> bool {
        matches!(self, Self::Connection(_) | Self::Deserialization(_))
    }

    /// Returns the offending parameter name for validation errors.
    pub fn parameter(&self) -> Option<&str> {
        match self {
            Self::MissingRequiredParameter(name) | Self::InvalidParameterType { name, .. } => {
                Some(name.as_str())
            }
            _ => None,
        }
    }
}
