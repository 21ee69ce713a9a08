//! Request and response JSON encoding errors.

use thiserror::Error;

/// Errors during JSON encoding and decoding.
///
/// A `JsonParse` on a successful (2xx) response is reported without a
/// status code: the server accepted the call, the payload was unusable.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A 2xx response body could not be parsed as the expected type.
    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// A request payload could not be serialized to JSON.
    #[error("JSON serialize error: {0}")]
    Serialize(serde_json::Error),
}

impl ValidationError {
    /// Returns `true` if this is a response-side parsing error.
    pub fn is_parse_error(&self) -> bool {
        matches!(self, Self::JsonParse(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_parse_is_parse_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let err = ValidationError::JsonParse(json_err);
        assert!(err.is_parse_error());
        assert!(err.to_string().starts_with("JSON parse error"));
    }

    #[test]
    fn test_serialize_is_not_parse_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = ValidationError::Serialize(json_err);
        assert!(!err.is_parse_error());
    }
}
