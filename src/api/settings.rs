//! Helpdesk settings. Read-only through the API.

use serde::Deserialize;

use crate::client::Freshdesk;
use crate::error::FreshdeskError;
use crate::request::Request;

/// Global helpdesk settings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HelpdeskSettings {
    pub primary_language: Option<String>,
    #[serde(default)]
    pub supported_languages: Vec<String>,
    pub portal_languages: Option<Vec<String>>,
}

impl Freshdesk {
    /// Fetches the helpdesk settings. `GET /settings/helpdesk`
    pub async fn helpdesk_settings(&self) -> Result<HelpdeskSettings, FreshdeskError> {
        self.execute(Request::get("/settings/helpdesk")).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_settings_parse() {
        let settings: HelpdeskSettings = serde_json::from_value(json!({
            "primary_language": "en",
            "supported_languages": ["de", "fr"]
        }))
        .unwrap();
        assert_eq!(settings.primary_language.as_deref(), Some("en"));
        assert_eq!(settings.supported_languages, vec!["de", "fr"]);
    }
}
