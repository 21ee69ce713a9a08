//! Agent group operations.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::client::Freshdesk;
use crate::error::FreshdeskError;
use crate::request::Request;

/// A group of agents.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Group {
    pub id: u64,
    pub name: Option<String>,
    pub description: Option<String>,
    /// Agent to notify when a ticket in this group goes unassigned.
    pub escalate_to: Option<u64>,
    /// Escalation window, e.g. `30m`, `1h`, `8h`, `12h`, `1d`, `2d`, `3d`.
    pub unassigned_for: Option<String>,
    pub business_hour_id: Option<u64>,
    #[serde(default)]
    pub agent_ids: Vec<u64>,
    #[serde(default)]
    pub auto_ticket_assign: bool,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Payload for `POST /groups`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CreateGroup {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub escalate_to: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unassigned_for: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agent_ids: Option<Vec<u64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_ticket_assign: Option<bool>,
}

/// Payload for `PUT /groups/{id}`. Unset fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UpdateGroup {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub escalate_to: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unassigned_for: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agent_ids: Option<Vec<u64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_ticket_assign: Option<bool>,
}

/// Pagination for `GET /groups`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ListGroupsQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_page: Option<u32>,
}

impl Freshdesk {
    /// Lists groups. `GET /groups`
    pub async fn list_groups(&self, query: &ListGroupsQuery) -> Result<Vec<Group>, FreshdeskError> {
        self.execute(Request::get("/groups").query(query)?).await
    }

    /// Fetches a single group. `GET /groups/{id}`
    pub async fn get_group(&self, id: u64) -> Result<Group, FreshdeskError> {
        self.execute(Request::get(format!("/groups/{id}"))).await
    }

    /// Creates a group. `POST /groups`
    pub async fn create_group(&self, group: &CreateGroup) -> Result<Group, FreshdeskError> {
        self.execute(Request::post("/groups").body(group)?).await
    }

    /// Updates a group. `PUT /groups/{id}`
    pub async fn update_group(&self, id: u64, group: &UpdateGroup) -> Result<Group, FreshdeskError> {
        self.execute(Request::put(format!("/groups/{id}")).body(group)?)
            .await
    }

    /// Deletes a group. `DELETE /groups/{id}`
    pub async fn delete_group(&self, id: u64) -> Result<(), FreshdeskError> {
        self.execute(Request::delete(format!("/groups/{id}"))).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_group_parses() {
        let group: Group = serde_json::from_value(json!({
            "id": 4,
            "name": "Escalations",
            "agent_ids": [9],
            "auto_ticket_assign": true
        }))
        .unwrap();
        assert_eq!(group.name.as_deref(), Some("Escalations"));
        assert!(group.auto_ticket_assign);
    }

    #[test]
    fn test_create_group_skips_unset_fields() {
        let group = CreateGroup {
            name: "Tier 2".to_string(),
            unassigned_for: Some("30m".to_string()),
            ..Default::default()
        };
        let value = serde_json::to_value(&group).unwrap();
        assert_eq!(value, json!({"name": "Tier 2", "unassigned_for": "30m"}));
    }
}
