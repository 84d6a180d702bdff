//! Client error types

use thiserror::Error;

/// Client error types
#[derive(Debug, Error)]
pub enum ApiError {
    /// Network or request error
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Server returned an error status
    #[error("Server error {status}: {message}")]
    ServerError { status: u16, message: String },

    /// Authentication failed
    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    /// Access token expired and the refresh token could not recover the session
    #[error("Session expired")]
    SessionExpired,

    /// Resource not found
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Bad request
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Forbidden
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    Configuration(String),
}

impl ApiError {
    /// Create error from HTTP status code
    pub fn from_status(status: reqwest::StatusCode, message: String) -> Self {
        match status.as_u16() {
            400 => Self::BadRequest(message),
            401 => Self::AuthenticationFailed(message),
            403 => Self::Forbidden(message),
            404 => Self::NotFound(message),
            _ => Self::ServerError {
                status: status.as_u16(),
                message,
            },
        }
    }

    /// Whether this error means the current credentials are no longer usable
    pub fn is_auth_expired(&self) -> bool {
        matches!(
            self,
            Self::AuthenticationFailed(_) | Self::SessionExpired
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    #[test]
    fn from_status_maps_the_client_errors() {
        assert!(matches!(
            ApiError::from_status(StatusCode::BAD_REQUEST, "x".into()),
            ApiError::BadRequest(_)
        ));
        assert!(matches!(
            ApiError::from_status(StatusCode::UNAUTHORIZED, "x".into()),
            ApiError::AuthenticationFailed(_)
        ));
        assert!(matches!(
            ApiError::from_status(StatusCode::FORBIDDEN, "x".into()),
            ApiError::Forbidden(_)
        ));
        assert!(matches!(
            ApiError::from_status(StatusCode::NOT_FOUND, "x".into()),
            ApiError::NotFound(_)
        ));
        assert!(matches!(
            ApiError::from_status(StatusCode::INTERNAL_SERVER_ERROR, "x".into()),
            ApiError::ServerError { status: 500, .. }
        ));
    }

    #[test]
    fn auth_expiry_covers_both_credential_failures() {
        assert!(ApiError::AuthenticationFailed("expired".into()).is_auth_expired());
        assert!(ApiError::SessionExpired.is_auth_expired());
        assert!(!ApiError::NotFound("missing".into()).is_auth_expired());
    }
}
