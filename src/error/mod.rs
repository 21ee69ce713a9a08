//! Layered error types for the Freshdesk client.
//!
//! The error hierarchy is structured for actionable diagnostics:
//! - [`FreshdeskError`] - Top-level error type for all API operations
//! - [`ClientError`] - HTTP transport and status errors
//! - [`ValidationError`] - Request/response JSON encoding errors
//! - [`ConfigError`] - Client construction errors

mod client_error;
mod config_error;
mod freshdesk_error;
mod validation_error;

pub use client_error::{ClientError, FieldError};
pub use config_error::ConfigError;
pub use freshdesk_error::FreshdeskError;
pub use validation_error::ValidationError;
