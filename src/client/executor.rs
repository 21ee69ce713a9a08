//! Request execution with tracing instrumentation.
//!
//! This module provides the [`Freshdesk`] struct for executing HTTP
//! requests against the Freshdesk v2 REST API with automatic Basic-auth
//! handling and tracing.

use std::time::Duration;

use bytes::Bytes;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION};
use serde::de::DeserializeOwned;
use tracing::{instrument, Span};
use url::Url;

use crate::auth::Credential;
use crate::error::{ClientError, ConfigError, FreshdeskError, ValidationError};
use crate::request::Request;

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Path prefix of the v2 REST API, appended to the account base URL.
const API_PREFIX: &str = "/api/v2";

/// Builder for configuring a [`Freshdesk`] client.
#[derive(Debug)]
pub struct FreshdeskBuilder {
    base_url: String,
    api_key: String,
    timeout: Duration,
    default_headers: HeaderMap,
}

impl FreshdeskBuilder {
    /// Creates a new builder with the account base URL and API key.
    fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            default_headers: HeaderMap::new(),
        }
    }

    /// Sets the request timeout.
    ///
    /// ## Examples
    ///
    /// ```rust,ignore
    /// use std::time::Duration;
    ///
    /// let client = Freshdesk::builder(base_url, api_key)
    ///     .timeout(Duration::from_secs(60))
    ///     .build()?;
    /// ```
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Adds a default header to all requests.
    ///
    /// ## Errors
    ///
    /// Returns an error if the header name or value is invalid.
    pub fn default_header(
        mut self,
        name: impl AsRef<str>,
        value: impl AsRef<str>,
    ) -> Result<Self, FreshdeskError> {
        let name = HeaderName::try_from(name.as_ref())
            .map_err(|e| ConfigError::InvalidHeader(format!("invalid header name: {e}")))?;
        let value = HeaderValue::try_from(value.as_ref())
            .map_err(|e| ConfigError::InvalidHeader(format!("invalid header value: {e}")))?;
        self.default_headers.insert(name, value);
        Ok(self)
    }

    /// Builds the [`Freshdesk`] client.
    ///
    /// ## Errors
    ///
    /// Returns an error if the base URL is invalid, the API key is empty,
    /// or the HTTP client cannot be constructed.
    pub fn build(self) -> Result<Freshdesk, FreshdeskError> {
        if self.api_key.is_empty() {
            return Err(ConfigError::missing_field("api_key").into());
        }
        let base_url = Url::parse(&self.base_url).map_err(ConfigError::InvalidUrl)?;
        let api_root = format!("{}{}", self.base_url.trim_end_matches('/'), API_PREFIX);

        let client = reqwest::Client::builder()
            .timeout(self.timeout)
            .default_headers(self.default_headers)
            .pool_max_idle_per_host(10)
            .build()
            .map_err(ClientError::Request)?;

        Ok(Freshdesk {
            client,
            base_url,
            api_root,
            credential: Credential::basic(&self.api_key),
        })
    }
}

/// Async client for the Freshdesk v2 REST API.
///
/// The client wraps `reqwest::Client` with connection pooling, a
/// precomputed Basic-auth credential, and a single shared request path
/// ([`Freshdesk::execute`]) that every endpoint method funnels through.
/// It is cheap to clone and safe to share across tasks; calls hold no
/// state between requests.
///
/// ## Examples
///
/// ```rust,ignore
/// use freshdesk::Freshdesk;
///
/// let client = Freshdesk::new("https://yourcompany.freshdesk.com", "api-key")?;
/// let ticket = client.get_ticket(42).await?;
/// println!("subject: {:?}", ticket.subject);
/// ```
#[derive(Debug, Clone)]
pub struct Freshdesk {
    client: reqwest::Client,
    base_url: Url,
    api_root: String,
    credential: Credential,
}

impl Freshdesk {
    /// Creates a new builder for configuring a client.
    ///
    /// ## Arguments
    ///
    /// * `base_url` - The account root, e.g. `https://yourcompany.freshdesk.com`.
    /// * `api_key` - The agent's API key; sent as the Basic-auth username
    ///   with the fixed placeholder password `X`.
    pub fn builder(base_url: impl Into<String>, api_key: impl Into<String>) -> FreshdeskBuilder {
        FreshdeskBuilder::new(base_url, api_key)
    }

    /// Creates a new client with default settings.
    ///
    /// ## Errors
    ///
    /// Returns an error if the base URL is invalid, the API key is empty,
    /// or the HTTP client cannot be constructed.
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Result<Self, FreshdeskError> {
        Self::builder(base_url, api_key).build()
    }

    /// Returns the account base URL for this client.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Executes an API request and parses the response.
    ///
    /// This is the shared request path: it builds the URL from the API
    /// root and the descriptor's path, serializes query parameters
    /// (dropping unset keys), attaches the JSON body and the
    /// `Authorization` header, sends the request, and normalizes the
    /// outcome.
    ///
    /// Exactly one of `Ok`/`Err` is produced per call; nothing is retried
    /// or cached.
    ///
    /// ## Errors
    ///
    /// - [`ClientError::Request`] if no response was obtained (network,
    ///   timeout, DNS); carries no status code.
    /// - [`ClientError::HttpStatus`] if the server answered with a non-2xx
    ///   status; carries the exact status and a best-effort message from
    ///   the body.
    /// - [`ValidationError::JsonParse`] if a 2xx body cannot be parsed as
    ///   `T`. An empty 2xx body parses as JSON `null`, so `T = ()` and
    ///   `T = Option<_>` succeed with no value.
    #[instrument(
        name = "freshdesk_request",
        skip(self, request),
        fields(
            http.method = tracing::field::Empty,
            http.url = tracing::field::Empty,
            http.status_code = tracing::field::Empty,
            otel.kind = "client",
            otel.status_code = tracing::field::Empty,
        )
    )]
    pub async fn execute<T>(&self, request: Request) -> Result<T, FreshdeskError>
    where
        T: DeserializeOwned,
    {
        Span::current().record("http.method", request.method().to_string().as_str());
        let url = format!("{}{}", self.api_root, request.path());
        Span::current().record("http.url", url.as_str());

        let mut builder = self
            .client
            .request(request.method().to_reqwest(), &url)
            .header(AUTHORIZATION, self.credential.header_value().clone());

        let pairs = request.query_pairs();
        if !pairs.is_empty() {
            builder = builder.query(&pairs);
        }
        if let Some(body) = request.body_value() {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(ClientError::Request)?;

        let status = response.status();
        let status_code = status.as_u16();
        Span::current().record("http.status_code", status_code);

        if !status.is_success() {
            let otel_status = if status.is_server_error() {
                "ERROR"
            } else {
                "UNSET"
            };
            Span::current().record("otel.status_code", otel_status);

            let body = response.bytes().await.unwrap_or_default();
            return Err(ClientError::from_response(status_code, &body).into());
        }

        Span::current().record("otel.status_code", "OK");

        let body = response.bytes().await.map_err(ClientError::Request)?;
        parse_success(body)
    }
}

/// Parses a 2xx response body.
///
/// Empty bodies (204, DELETE responses) are treated as JSON `null` so unit
/// and `Option` targets succeed without a value.
fn parse_success<T: DeserializeOwned>(body: Bytes) -> Result<T, FreshdeskError> {
    let bytes: &[u8] = if body.is_empty() { b"null" } else { body.as_ref() };
    serde_json::from_slice(bytes)
        .map_err(ValidationError::JsonParse)
        .map_err(FreshdeskError::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};
    use wiremock::matchers::{body_json, header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client(server: &MockServer) -> Freshdesk {
        Freshdesk::new(server.uri(), "test-key").unwrap()
    }

    #[test]
    fn test_build_rejects_empty_api_key() {
        let result = Freshdesk::new("https://example.freshdesk.com", "");
        assert!(matches!(
            result,
            Err(FreshdeskError::Config(ConfigError::MissingField { .. }))
        ));
    }

    #[test]
    fn test_build_rejects_invalid_url() {
        let result = Freshdesk::new("not a url", "key");
        assert!(matches!(
            result,
            Err(FreshdeskError::Config(ConfigError::InvalidUrl(_)))
        ));
    }

    #[test]
    fn test_trailing_slash_is_stripped_from_api_root() {
        let client = Freshdesk::new("https://example.freshdesk.com/", "key").unwrap();
        assert_eq!(client.api_root, "https://example.freshdesk.com/api/v2");
    }

    #[test]
    fn test_custom_timeout() {
        let client = Freshdesk::builder("https://example.freshdesk.com", "key")
            .timeout(Duration::from_secs(60))
            .build()
            .unwrap();
        assert_eq!(client.base_url().as_str(), "https://example.freshdesk.com/");
    }

    #[tokio::test]
    async fn test_execute_get_json() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/v2/tickets/1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 1})))
            .mount(&server)
            .await;

        let client = client(&server);
        let value: Value = client.execute(Request::get("/tickets/1")).await.unwrap();
        assert_eq!(value, json!({"id": 1}));
    }

    #[tokio::test]
    async fn test_basic_auth_header_attached() {
        let server = MockServer::start().await;

        // base64("test-key:X")
        Mock::given(method("GET"))
            .and(path("/api/v2/agents/me"))
            .and(header("Authorization", "Basic dGVzdC1rZXk6WA=="))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 9})))
            .expect(1)
            .mount(&server)
            .await;

        let client = client(&server);
        let value: Value = client.execute(Request::get("/agents/me")).await.unwrap();
        assert_eq!(value["id"], 9);
    }

    #[tokio::test]
    async fn test_query_pairs_serialized() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/v2/tickets"))
            .and(query_param("company_id", "7"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"id": 1}])))
            .mount(&server)
            .await;

        let client = client(&server);
        let request = Request::get("/tickets")
            .query(&json!({"company_id": "7", "requester_id": null}))
            .unwrap();
        let value: Value = client.execute(request).await.unwrap();
        assert_eq!(value, json!([{"id": 1}]));
    }

    #[tokio::test]
    async fn test_body_sent_as_json() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/v2/tickets"))
            .and(body_json(json!({"subject": "help", "priority": 1})))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": 5})))
            .mount(&server)
            .await;

        let client = client(&server);
        let request = Request::post("/tickets")
            .body(&json!({"subject": "help", "priority": 1}))
            .unwrap();
        let value: Value = client.execute(request).await.unwrap();
        assert_eq!(value["id"], 5);
    }

    #[tokio::test]
    async fn test_empty_body_is_success() {
        let server = MockServer::start().await;

        Mock::given(method("DELETE"))
            .and(path("/api/v2/contacts/3"))
            .respond_with(ResponseTemplate::new(204))
            .mount(&server)
            .await;

        let client = client(&server);
        client
            .execute::<()>(Request::delete("/contacts/3"))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_non_success_carries_exact_status_and_message() {
        let server = MockServer::start().await;

        Mock::given(method("PUT"))
            .and(path("/api/v2/tickets/42"))
            .respond_with(ResponseTemplate::new(404).set_body_json(json!({"message": "not found"})))
            .mount(&server)
            .await;

        let client = client(&server);
        let request = Request::put("/tickets/42").body(&json!({"status": 5})).unwrap();
        let err = client.execute::<Value>(request).await.unwrap_err();

        assert_eq!(err.status_code(), Some(404));
        assert_eq!(err.to_string(), "HTTP 404: not found");
    }

    #[tokio::test]
    async fn test_parse_failure_on_success_status_has_no_status_code() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/v2/tickets/1"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not valid json"))
            .mount(&server)
            .await;

        let client = client(&server);
        let err = client
            .execute::<Value>(Request::get("/tickets/1"))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            FreshdeskError::Validation(ValidationError::JsonParse(_))
        ));
        assert_eq!(err.status_code(), None);
    }

    #[tokio::test]
    async fn test_transport_failure_has_no_status_code() {
        // Nothing listens on this port.
        let client = Freshdesk::builder("http://127.0.0.1:9", "key")
            .timeout(Duration::from_millis(500))
            .build()
            .unwrap();

        let err = client
            .execute::<Value>(Request::get("/tickets"))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            FreshdeskError::Client(ClientError::Request(_))
        ));
        assert_eq!(err.status_code(), None);
    }
}
