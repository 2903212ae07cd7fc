//! Error types for REST API operations

use bitasset_auth::AuthError;
use std::fmt;

/// What a failed name lookup was searching for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupKind {
    /// Trading pair in `symbols`
    Market,
    /// Currency in `currencies`
    Currency,
}

impl fmt::Display for LookupKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Market => write!(f, "trading pair"),
            Self::Currency => write!(f, "currency"),
        }
    }
}

/// Errors that can occur during REST API operations
#[derive(Debug, thiserror::Error)]
pub enum RestError {
    /// HTTP request failed (connect, timeout, reading the body)
    #[error("HTTP error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Response body was not valid JSON
    #[error("Failed to parse response (HTTP {status}): {message}")]
    ResponseParse {
        /// HTTP status code of the response
        status: u16,
        /// Parser error and a short excerpt of the body
        message: String,
    },

    /// Name lookup found no match
    #[error("{kind} does not exist: {name}")]
    NotFound {
        kind: LookupKind,
        /// The name as it was searched for (uppercased)
        name: String,
    },

    /// Missing API credentials for private endpoint
    #[error("Authentication required for this endpoint")]
    AuthRequired,

    /// Credential loading failed
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// Payload did not have the shape the client needed
    #[error("Unexpected response shape: {0}")]
    Decode(String),

    /// Invalid request parameters
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

impl RestError {
    /// Check if this error is a failed lookup
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this error is a transport timeout
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Transport(e) if e.is_timeout())
    }
}

/// Result type for REST operations
pub type RestResult<T> = Result<T, RestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_display() {
        let err = RestError::NotFound {
            kind: LookupKind::Market,
            name: "FOO-BAR".to_string(),
        };
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "trading pair does not exist: FOO-BAR");
    }

    #[test]
    fn test_auth_error_is_transparent() {
        let err: RestError = AuthError::EnvVarNotSet("BITASSET_SECRET_KEY".to_string()).into();
        assert_eq!(err.to_string(), "Environment variable not set: BITASSET_SECRET_KEY");
        assert!(!err.is_not_found());
        assert!(!err.is_timeout());
    }
}
