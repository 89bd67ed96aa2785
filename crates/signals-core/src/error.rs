//! Error types for the signals client.

use thiserror::Error;

/// Top-level client error.
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("API error: {0}")]
    Api(#[from] ApiError),

    #[error("Session error: {0}")]
    Session(#[from] SessionError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Errors raised by the backend API gateway.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Connection error: {0}")]
    Connection(String),

    /// The backend rejected the credentials or the bearer token (HTTP 401).
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("API error: {0}")]
    Api(String),

    #[error("Decode error: {0}")]
    Decode(String),
}

impl ApiError {
    /// Whether the error means the stored session is no longer accepted.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized(_))
    }
}

/// Session store errors.
#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Not logged in. Run `signals login <email>` first")]
    NotAuthenticated,

    #[error("Session file error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Session file is corrupt: {0}")]
    Corrupt(String),
}

/// Result type alias for client operations.
pub type ClientResult<T> = Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_errors_compose_into_client_error() {
        let err: ClientError = ApiError::Unauthorized("Invalid token".to_string()).into();
        assert_eq!(err.to_string(), "API error: Unauthorized: Invalid token");

        let err: ClientError = SessionError::NotAuthenticated.into();
        assert_eq!(
            err.to_string(),
            "Session error: Not logged in. Run `signals login <email>` first"
        );
    }

    #[test]
    fn test_unauthorized_detection() {
        assert!(ApiError::Unauthorized("expired".to_string()).is_unauthorized());
        assert!(!ApiError::Api("boom".to_string()).is_unauthorized());
        assert!(!ApiError::Connection("refused".to_string()).is_unauthorized());
    }
}
