//! Basic-auth credential handling.
//!
//! Freshdesk authenticates every request with HTTP Basic auth where the
//! API key is the username and the password is the fixed placeholder `X`.
//! The credential is derived once at client construction and shared
//! read-only across calls.

use std::fmt;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use reqwest::header::HeaderValue;

/// An immutable `Authorization` header value.
///
/// The encoded form is `Basic base64(api_key + ":X")`. The underlying
/// header value is marked sensitive so it is redacted from debug output
/// of the request machinery.
#[derive(Clone)]
pub struct Credential {
    value: HeaderValue,
}

impl Credential {
    /// Derives the Basic-auth credential from a Freshdesk API key.
    pub fn basic(api_key: &str) -> Self {
        let token = STANDARD.encode(format!("{api_key}:X"));
        let mut value = HeaderValue::from_str(&format!("Basic {token}"))
            .expect("base64 output is valid header ASCII");
        value.set_sensitive(true);
        Self { value }
    }

    /// Returns the precomputed `Authorization` header value.
    pub(crate) fn header_value(&self) -> &HeaderValue {
        &self.value
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(Basic ***)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encodes_key_with_placeholder_password() {
        let credential = Credential::basic("abc");
        // base64("abc:X")
        assert_eq!(
            credential.header_value().to_str().unwrap(),
            "Basic YWJjOlg="
        );
    }

    #[test]
    fn test_header_value_is_sensitive() {
        let credential = Credential::basic("test-key");
        assert!(credential.header_value().is_sensitive());
    }

    #[test]
    fn test_debug_redacts_key() {
        let credential = Credential::basic("super-secret");
        let debug = format!("{credential:?}");
        assert!(!debug.contains("super-secret"));
        assert!(!debug.contains("c3VwZXItc2VjcmV0"));
    }
}
