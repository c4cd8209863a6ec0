//! API error types.

use thiserror::Error;

use super::ValidationError;

/// Errors produced by the expense API client and its callers.
///
/// `SessionExpired` is the only kind that triggers automatic corrective
/// action (session teardown plus navigation back to the landing view);
/// every other kind leaves the user to retry manually. No retries are
/// attempted anywhere.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never completed at the transport level.
    #[error("network error: {message}")]
    Network {
        /// Human-readable transport failure description.
        message: String,
    },

    /// The server answered with a non-success status other than 401.
    #[error("HTTP error {status}: {message}")]
    Http {
        /// HTTP status code.
        status: u16,
        /// Server-provided error message, or a generic fallback.
        message: String,
    },

    /// The server answered 401; the stored session has been cleared.
    #[error("session expired")]
    SessionExpired,

    /// An authenticated request was attempted with no stored token.
    /// No network call is issued in this case.
    #[error("no session token available")]
    Unauthenticated,

    /// A successful login response carried no `token` field.
    #[error("login response did not contain a token")]
    MissingToken,

    /// The response body could not be parsed as JSON.
    #[error("malformed response: {message}")]
    MalformedResponse {
        /// Parse failure description.
        message: String,
    },

    /// The session store itself failed.
    #[error("session storage error: {message}")]
    SessionStorage {
        /// Storage failure description.
        message: String,
    },

    /// The submission was rejected locally before any request.
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl ApiError {
    /// Creates a network error.
    #[must_use]
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    /// Creates an HTTP status error.
    #[must_use]
    pub fn http(status: u16, message: impl Into<String>) -> Self {
        Self::Http {
            status,
            message: message.into(),
        }
    }

    /// Creates a malformed-response error.
    #[must_use]
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedResponse {
            message: message.into(),
        }
    }

    /// Creates a session storage error.
    #[must_use]
    pub fn storage(message: impl Into<String>) -> Self {
        Self::SessionStorage {
            message: message.into(),
        }
    }

    /// Returns whether this error invalidates the current session.
    #[must_use]
    pub const fn is_auth_failure(&self) -> bool {
        matches!(self, Self::SessionExpired | Self::Unauthenticated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_failures() {
        assert!(ApiError::SessionExpired.is_auth_failure());
        assert!(ApiError::Unauthenticated.is_auth_failure());
        assert!(!ApiError::http(500, "internal server error").is_auth_failure());
        assert!(!ApiError::MissingToken.is_auth_failure());
    }

    #[test]
    fn test_validation_error_converts() {
        let error: ApiError = ValidationError::EmptyDescription.into();
        assert!(matches!(error, ApiError::Validation(_)));
    }
}
