//! Business hours operations. Read-only through the API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::client::Freshdesk;
use crate::error::FreshdeskError;
use crate::request::Request;

/// A business hours configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BusinessHour {
    pub id: u64,
    pub name: Option<String>,
    pub description: Option<String>,
    #[serde(default)]
    pub is_default: bool,
    pub time_zone: Option<String>,
    /// Per-weekday start/end times; the shape varies with the account's
    /// schedule type, so it stays untyped.
    pub business_hours: Option<Value>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Pagination for `GET /business_hours`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ListBusinessHoursQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_page: Option<u32>,
}

impl Freshdesk {
    /// Lists business hours configurations. `GET /business_hours`
    pub async fn list_business_hours(
        &self,
        query: &ListBusinessHoursQuery,
    ) -> Result<Vec<BusinessHour>, FreshdeskError> {
        self.execute(Request::get("/business_hours").query(query)?)
            .await
    }

    /// Fetches a single business hours configuration.
    /// `GET /business_hours/{id}`
    pub async fn get_business_hour(&self, id: u64) -> Result<BusinessHour, FreshdeskError> {
        self.execute(Request::get(format!("/business_hours/{id}")))
            .await
    }
}
