//! Request descriptors.
//!
//! A [`Request`] captures everything needed for one HTTP exchange: verb,
//! path relative to the API root, optional query parameters, and an
//! optional JSON body. Endpoint methods build descriptors and hand them to
//! [`Freshdesk::execute`](crate::Freshdesk::execute); the descriptor is
//! public so callers can reach endpoints that have no dedicated method.

use serde::Serialize;
use serde_json::Value;

use crate::error::{FreshdeskError, ValidationError};
use crate::method::RestMethod;

/// Description of a single API call.
///
/// ## Examples
///
/// ```rust,ignore
/// use freshdesk::{Request, RestMethod};
///
/// let request = Request::put("/tickets/42")
///     .body(&serde_json::json!({"status": 5}))?;
/// let ticket: serde_json::Value = client.execute(request).await?;
/// ```
#[derive(Debug, Clone)]
pub struct Request {
    method: RestMethod,
    path: String,
    query: Option<Value>,
    body: Option<Value>,
}

impl Request {
    /// Creates a request with the given method and API-relative path.
    pub fn new(method: RestMethod, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: None,
            body: None,
        }
    }

    /// Creates a GET request.
    pub fn get(path: impl Into<String>) -> Self {
        Self::new(RestMethod::Get, path)
    }

    /// Creates a POST request.
    pub fn post(path: impl Into<String>) -> Self {
        Self::new(RestMethod::Post, path)
    }

    /// Creates a PUT request.
    pub fn put(path: impl Into<String>) -> Self {
        Self::new(RestMethod::Put, path)
    }

    /// Creates a DELETE request.
    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(RestMethod::Delete, path)
    }

    /// Attaches query parameters.
    ///
    /// The value is serialized to a JSON object; entries that serialize to
    /// `null` (unset `Option` fields) are dropped when the query string is
    /// built, never rendered as the literal `"null"`.
    pub fn query<Q: Serialize + ?Sized>(mut self, query: &Q) -> Result<Self, FreshdeskError> {
        self.query = Some(serde_json::to_value(query).map_err(ValidationError::Serialize)?);
        Ok(self)
    }

    /// Attaches a JSON request body.
    pub fn body<B: Serialize + ?Sized>(mut self, body: &B) -> Result<Self, FreshdeskError> {
        self.body = Some(serde_json::to_value(body).map_err(ValidationError::Serialize)?);
        Ok(self)
    }

    /// The HTTP method for this request.
    pub fn method(&self) -> RestMethod {
        self.method
    }

    /// The API-relative path (e.g. `/tickets/42`).
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The JSON body, if one was attached.
    pub(crate) fn body_value(&self) -> Option<&Value> {
        self.body.as_ref()
    }

    /// Flattens the query object into string pairs for the URL.
    ///
    /// `null` entries are skipped; strings are used verbatim; numbers and
    /// booleans are rendered in their JSON text form.
    pub(crate) fn query_pairs(&self) -> Vec<(String, String)> {
        let Some(Value::Object(map)) = self.query.as_ref() else {
            return Vec::new();
        };
        map.iter()
            .filter_map(|(key, value)| {
                let rendered = match value {
                    Value::Null => return None,
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                };
                Some((key.clone(), rendered))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Serialize)]
    struct Filter {
        company_id: Option<u64>,
        requester_id: Option<u64>,
        email: Option<String>,
    }

    #[test]
    fn test_unset_options_are_omitted_from_query() {
        let filter = Filter {
            company_id: Some(7),
            requester_id: None,
            email: None,
        };
        let request = Request::get("/tickets").query(&filter).unwrap();

        let pairs = request.query_pairs();
        assert_eq!(pairs, vec![("company_id".to_string(), "7".to_string())]);
    }

    #[test]
    fn test_scalar_rendering() {
        let request = Request::get("/tickets")
            .query(&json!({
                "page": 2,
                "billable": true,
                "filter": "deleted",
            }))
            .unwrap();

        let mut pairs = request.query_pairs();
        pairs.sort();
        assert_eq!(
            pairs,
            vec![
                ("billable".to_string(), "true".to_string()),
                ("filter".to_string(), "deleted".to_string()),
                ("page".to_string(), "2".to_string()),
            ]
        );
    }

    #[test]
    fn test_no_query_yields_no_pairs() {
        let request = Request::delete("/contacts/3");
        assert!(request.query_pairs().is_empty());
    }

    #[test]
    fn test_body_round_trips_through_value() {
        let body = json!({"status": 5, "tags": ["vip"], "nested": {"a": 1}});
        let request = Request::put("/tickets/42").body(&body).unwrap();
        assert_eq!(request.body_value(), Some(&body));
    }

    #[test]
    fn test_builders_set_method_and_path() {
        assert_eq!(Request::get("/tickets").method(), RestMethod::Get);
        assert_eq!(Request::post("/tickets").method(), RestMethod::Post);
        assert_eq!(Request::put("/tickets/1").method(), RestMethod::Put);
        assert_eq!(Request::delete("/tickets/1").method(), RestMethod::Delete);
        assert_eq!(Request::get("/tickets").path(), "/tickets");
    }
}
