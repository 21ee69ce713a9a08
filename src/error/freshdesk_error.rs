//! Top-level client error type.

use thiserror::Error;

use super::{ClientError, ConfigError, ValidationError};

/// Top-level error type for all Freshdesk operations.
///
/// This enum aggregates all error categories, enabling unified error
/// handling while preserving the ability to match on specific error types
/// when needed.
///
/// Two kinds of call failure exist on the wire: the server answered with a
/// non-2xx status (an API error, carrying that status), or no usable
/// response was obtained at all (a transport or parse error, carrying no
/// status). [`FreshdeskError::status_code`] distinguishes the two.
///
/// ## Examples
///
/// ```rust,ignore
/// use freshdesk::FreshdeskError;
///
/// fn handle_error(err: FreshdeskError) {
///     match err.status_code() {
///         Some(404) => eprintln!("no such resource"),
///         Some(status) => eprintln!("API rejected the call: HTTP {status}"),
///         None => eprintln!("transport failure: {err}"),
///     }
/// }
/// ```
#[derive(Debug, Error)]
pub enum FreshdeskError {
    /// HTTP client errors (network failures, non-2xx statuses).
    #[error(transparent)]
    Client(#[from] ClientError),

    /// JSON encoding and decoding errors.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Client configuration errors.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl FreshdeskError {
    /// Returns the HTTP status code when the server rejected the call.
    ///
    /// `None` for transport-level failures (connection refused, DNS,
    /// timeout) and for malformed bodies on otherwise successful responses.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Client(e) => e.status_code(),
            Self::Validation(_) | Self::Config(_) => None,
        }
    }
}
