//! HTTP transport and status errors.

use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;

/// A field-level validation error from a Freshdesk error payload.
///
/// Rejected writes (HTTP 400) commonly answer with
/// `{"description": "Validation failed", "errors": [{"field": …,
/// "message": …, "code": …}]}`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FieldError {
    /// The request field the error applies to, when the error is per-field.
    pub field: Option<String>,
    /// Human-readable reason.
    pub message: Option<String>,
    /// Machine-readable error code (e.g. `invalid_value`, `missing_field`).
    pub code: Option<String>,
}

/// Shape of a Freshdesk error response body.
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    description: Option<String>,
    message: Option<String>,
    #[serde(default)]
    errors: Vec<FieldError>,
}

/// Errors from the HTTP client layer.
///
/// These errors represent network-level failures and non-2xx HTTP
/// responses observed during request execution.
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed before a response was obtained (connection
    /// refused, DNS failure, timeout, interrupted body read).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Server answered with a non-success HTTP status code.
    #[error("HTTP {status}: {message}")]
    HttpStatus {
        /// The HTTP status code returned.
        status: u16,
        /// Error message extracted from the response body, or the status's
        /// canonical reason phrase when the body carries none.
        message: String,
        /// Field-level validation errors, when the body carries them.
        errors: Vec<FieldError>,
    },
}

impl ClientError {
    /// Builds an [`ClientError::HttpStatus`] from a non-2xx response body.
    ///
    /// The message is taken from the body's `description` or `message`
    /// field when present; otherwise the canonical reason phrase for the
    /// status is used.
    pub(crate) fn from_response(status: u16, body: &[u8]) -> Self {
        let parsed = serde_json::from_slice::<ApiErrorBody>(body).ok();
        let (message, errors) = match parsed {
            Some(body) => (body.description.or(body.message), body.errors),
            None => (None, Vec::new()),
        };
        let message = message.unwrap_or_else(|| {
            StatusCode::from_u16(status)
                .ok()
                .and_then(|s| s.canonical_reason())
                .map(str::to_string)
                .unwrap_or_else(|| format!("HTTP status {status}"))
        });
        Self::HttpStatus {
            status,
            message,
            errors,
        }
    }

    /// Returns `true` if this error is retryable.
    ///
    /// Timeouts, connection failures, 5xx statuses and 429 (rate limit)
    /// are retryable. This layer never retries; the classification is for
    /// callers that do.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Request(e) => e.is_timeout() || e.is_connect(),
            Self::HttpStatus { status, .. } => *status >= 500 || *status == 429,
        }
    }

    /// Returns the HTTP status code if the server produced a response.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::HttpStatus { status, .. } => Some(*status),
            Self::Request(e) => e.status().map(|s| s.as_u16()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_from_description_field() {
        let err = ClientError::from_response(
            400,
            br#"{"description": "Validation failed", "errors": [{"field": "email", "message": "invalid", "code": "invalid_value"}]}"#,
        );
        if let ClientError::HttpStatus {
            status,
            message,
            errors,
        } = err
        {
            assert_eq!(status, 400);
            assert_eq!(message, "Validation failed");
            assert_eq!(errors.len(), 1);
            assert_eq!(errors[0].field.as_deref(), Some("email"));
            assert_eq!(errors[0].code.as_deref(), Some("invalid_value"));
        } else {
            panic!("expected HttpStatus");
        }
    }

    #[test]
    fn test_message_from_message_field() {
        let err = ClientError::from_response(404, br#"{"message": "not found"}"#);
        assert_eq!(err.to_string(), "HTTP 404: not found");
    }

    #[test]
    fn test_fallback_to_canonical_reason() {
        let err = ClientError::from_response(404, b"");
        assert_eq!(err.to_string(), "HTTP 404: Not Found");

        let err = ClientError::from_response(503, b"<html>gateway</html>");
        assert_eq!(err.to_string(), "HTTP 503: Service Unavailable");
    }

    #[test]
    fn test_exact_status_is_preserved() {
        let err = ClientError::from_response(418, b"");
        assert_eq!(err.status_code(), Some(418));
    }

    #[test]
    fn test_500_is_retryable() {
        let err = ClientError::from_response(500, b"");
        assert!(err.is_retryable());
    }

    #[test]
    fn test_429_is_retryable() {
        let err = ClientError::from_response(429, b"");
        assert!(err.is_retryable());
    }

    #[test]
    fn test_404_not_retryable() {
        let err = ClientError::from_response(404, b"");
        assert!(!err.is_retryable());
    }
}
