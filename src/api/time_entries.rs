//! Time entry operations, including the running-timer toggle.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::client::Freshdesk;
use crate::error::FreshdeskError;
use crate::request::Request;

/// Time tracked against a ticket.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TimeEntry {
    pub id: u64,
    pub ticket_id: Option<u64>,
    pub agent_id: Option<u64>,
    #[serde(default)]
    pub billable: bool,
    #[serde(default)]
    pub timer_running: bool,
    pub note: Option<String>,
    /// Duration in `hh:mm` form, as the API reports it.
    pub time_spent: Option<String>,
    pub executed_at: Option<DateTime<Utc>>,
    pub start_time: Option<DateTime<Utc>>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Payload for `POST /tickets/{id}/time_entries`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CreateTimeEntry {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agent_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billable: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    /// Duration in `hh:mm` form. Omitting it starts a running timer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_spent: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub executed_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timer_running: Option<bool>,
}

/// Payload for `PUT /time_entries/{id}`. Unset fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UpdateTimeEntry {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agent_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billable: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_spent: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub executed_at: Option<DateTime<Utc>>,
}

/// Filters for `GET /time_entries`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ListTimeEntriesQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agent_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub executed_after: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub executed_before: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billable: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_page: Option<u32>,
}

impl Freshdesk {
    /// Lists time entries across tickets. `GET /time_entries`
    pub async fn list_time_entries(
        &self,
        query: &ListTimeEntriesQuery,
    ) -> Result<Vec<TimeEntry>, FreshdeskError> {
        self.execute(Request::get("/time_entries").query(query)?)
            .await
    }

    /// Lists the time entries of one ticket. `GET /tickets/{id}/time_entries`
    pub async fn list_ticket_time_entries(
        &self,
        ticket_id: u64,
    ) -> Result<Vec<TimeEntry>, FreshdeskError> {
        self.execute(Request::get(format!("/tickets/{ticket_id}/time_entries")))
            .await
    }

    /// Creates a time entry on a ticket. `POST /tickets/{id}/time_entries`
    pub async fn create_time_entry(
        &self,
        ticket_id: u64,
        entry: &CreateTimeEntry,
    ) -> Result<TimeEntry, FreshdeskError> {
        self.execute(Request::post(format!("/tickets/{ticket_id}/time_entries")).body(entry)?)
            .await
    }

    /// Updates a time entry. `PUT /time_entries/{id}`
    pub async fn update_time_entry(
        &self,
        id: u64,
        entry: &UpdateTimeEntry,
    ) -> Result<TimeEntry, FreshdeskError> {
        self.execute(Request::put(format!("/time_entries/{id}")).body(entry)?)
            .await
    }

    /// Deletes a time entry. `DELETE /time_entries/{id}`
    pub async fn delete_time_entry(&self, id: u64) -> Result<(), FreshdeskError> {
        self.execute(Request::delete(format!("/time_entries/{id}")))
            .await
    }

    /// Starts or stops the timer of a time entry.
    /// `PUT /time_entries/{id}/toggle_timer`
    pub async fn toggle_timer(&self, id: u64) -> Result<TimeEntry, FreshdeskError> {
        self.execute(Request::put(format!("/time_entries/{id}/toggle_timer")))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_time_entry_parses() {
        let entry: TimeEntry = serde_json::from_value(json!({
            "id": 11,
            "ticket_id": 42,
            "billable": true,
            "timer_running": false,
            "time_spent": "01:30"
        }))
        .unwrap();
        assert!(entry.billable);
        assert_eq!(entry.time_spent.as_deref(), Some("01:30"));
    }

    #[test]
    fn test_create_without_time_spent_serializes_empty_object() {
        let entry = CreateTimeEntry::default();
        let value = serde_json::to_value(&entry).unwrap();
        assert_eq!(value, json!({}));
    }

    #[test]
    fn test_query_renders_billable_flag() {
        let query = ListTimeEntriesQuery {
            billable: Some(true),
            agent_id: Some(9),
            ..Default::default()
        };
        let value = serde_json::to_value(&query).unwrap();
        assert_eq!(value, json!({"billable": true, "agent_id": 9}));
    }
}
