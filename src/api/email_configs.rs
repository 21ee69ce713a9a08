//! Email config operations. Read-only through the API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::client::Freshdesk;
use crate::error::FreshdeskError;
use crate::request::Request;

/// A support mailbox configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct EmailConfig {
    pub id: u64,
    pub name: Option<String>,
    pub product_id: Option<u64>,
    pub to_email: Option<String>,
    pub reply_email: Option<String>,
    pub group_id: Option<u64>,
    #[serde(default)]
    pub active: bool,
    /// Whether agent replies go out from this address by default.
    #[serde(default)]
    pub primary_role: bool,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Pagination for `GET /email_configs`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ListEmailConfigsQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_page: Option<u32>,
}

impl Freshdesk {
    /// Lists email configs. `GET /email_configs`
    pub async fn list_email_configs(
        &self,
        query: &ListEmailConfigsQuery,
    ) -> Result<Vec<EmailConfig>, FreshdeskError> {
        self.execute(Request::get("/email_configs").query(query)?)
            .await
    }

    /// Fetches a single email config. `GET /email_configs/{id}`
    pub async fn get_email_config(&self, id: u64) -> Result<EmailConfig, FreshdeskError> {
        self.execute(Request::get(format!("/email_configs/{id}")))
            .await
    }
}
