//! Survey operations. Read-only through the API.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::Value;

use crate::client::Freshdesk;
use crate::error::FreshdeskError;
use crate::request::Request;

/// A customer satisfaction survey.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Survey {
    pub id: u64,
    pub title: Option<String>,
    /// Question definitions; the shape varies with the survey version.
    pub questions: Option<Value>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Freshdesk {
    /// Lists surveys. `GET /surveys`
    pub async fn list_surveys(&self) -> Result<Vec<Survey>, FreshdeskError> {
        self.execute(Request::get("/surveys")).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_survey_parses() {
        let survey: Survey = serde_json::from_value(json!({
            "id": 1,
            "title": "How did we do?",
            "questions": [{"id": 1, "label": "Overall"}]
        }))
        .unwrap();
        assert_eq!(survey.title.as_deref(), Some("How did we do?"));
    }
}
