//! Error types for the remote API module.

use reqwest::StatusCode;
use thiserror::Error;

/// Errors returned by remote API operations.
///
/// Every failure is surfaced unchanged to the caller; nothing in the api
/// module retries or recovers.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Network failure, no response, server error or an unreadable body.
    #[error("Request to {path} failed: {reason}")]
    Transport {
        path: String,
        status: Option<u16>,
        reason: String,
    },

    /// The session is missing or not allowed to access the resource (401/403).
    #[error("Not authorized to access {path} (HTTP {status})")]
    Auth { path: String, status: u16 },

    /// The server rejected the request body (400), e.g. a malformed or duplicate key.
    #[error("Request to {path} rejected: {reason}")]
    Validation { path: String, reason: String },

    /// The resource does not exist (404).
    #[error("Not found: {path}")]
    NotFound { path: String },
}

impl ApiError {
    /// Map a non-success HTTP status to an error.
    ///
    /// `body` is the response text; it becomes the reason for validation and
    /// transport errors.
    pub fn from_status(status: StatusCode, path: &str, body: String) -> Self {
        let path = path.to_string();
        match status {
            StatusCode::BAD_REQUEST => ApiError::Validation {
                path,
                reason: non_empty_or(body, status),
            },
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => ApiError::Auth {
                path,
                status: status.as_u16(),
            },
            StatusCode::NOT_FOUND => ApiError::NotFound { path },
            _ => ApiError::Transport {
                path,
                status: Some(status.as_u16()),
                reason: non_empty_or(body, status),
            },
        }
    }

    /// Build a transport error from a failed `reqwest` call.
    pub(crate) fn transport(path: &str, err: &reqwest::Error) -> Self {
        ApiError::Transport {
            path: path.to_string(),
            status: err.status().map(|s| s.as_u16()),
            reason: err.to_string(),
        }
    }

    /// Check if this error indicates a resource was not found.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::NotFound { .. })
    }

    /// Check if this error is authentication-related.
    pub fn is_authentication_error(&self) -> bool {
        matches!(self, ApiError::Auth { .. })
    }

    /// Check if this error means the server rejected the request.
    pub fn is_validation_error(&self) -> bool {
        matches!(self, ApiError::Validation { .. })
    }

    /// Check if this is a network/server error.
    pub fn is_transport_error(&self) -> bool {
        matches!(self, ApiError::Transport { .. })
    }

    /// Get the request path this error relates to.
    pub fn path(&self) -> &str {
        match self {
            ApiError::Transport { path, .. }
            | ApiError::Auth { path, .. }
            | ApiError::Validation { path, .. }
            | ApiError::NotFound { path } => path,
        }
    }

    /// Get the HTTP status, if a response was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Transport { status, .. } => *status,
            ApiError::Auth { status, .. } => Some(*status),
            ApiError::Validation { .. } => Some(StatusCode::BAD_REQUEST.as_u16()),
            ApiError::NotFound { .. } => Some(StatusCode::NOT_FOUND.as_u16()),
        }
    }
}

fn non_empty_or(body: String, status: StatusCode) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        format!("server returned {status}")
    } else {
        trimmed.to_string()
    }
}

impl From<ApiError> for crate::Error {
    fn from(err: ApiError) -> Self {
        crate::Error::Api(err)
    }
}
