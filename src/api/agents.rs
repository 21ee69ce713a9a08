//! Agent operations.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::client::Freshdesk;
use crate::error::FreshdeskError;
use crate::request::Request;

/// Contact details embedded in an agent record.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AgentContact {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub mobile: Option<String>,
    pub job_title: Option<String>,
    pub language: Option<String>,
    pub time_zone: Option<String>,
    #[serde(default)]
    pub active: bool,
    pub last_login_at: Option<DateTime<Utc>>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// A support agent.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Agent {
    pub id: u64,
    #[serde(default)]
    pub available: bool,
    #[serde(default)]
    pub occasional: bool,
    pub available_since: Option<DateTime<Utc>>,
    /// Ticket visibility scope: 1 = global, 2 = group, 3 = restricted.
    pub ticket_scope: Option<u32>,
    pub signature: Option<String>,
    #[serde(rename = "type")]
    pub agent_type: Option<String>,
    #[serde(default)]
    pub group_ids: Vec<u64>,
    #[serde(default)]
    pub role_ids: Vec<u64>,
    pub contact: Option<AgentContact>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Payload for `PUT /agents/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UpdateAgent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub occasional: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signature: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ticket_scope: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_ids: Option<Vec<u64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role_ids: Option<Vec<u64>>,
}

/// Filters for `GET /agents`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ListAgentsQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mobile: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// `fulltime` or `occasional`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_page: Option<u32>,
}

impl Freshdesk {
    /// Lists agents matching the given filters. `GET /agents`
    pub async fn list_agents(&self, query: &ListAgentsQuery) -> Result<Vec<Agent>, FreshdeskError> {
        self.execute(Request::get("/agents").query(query)?).await
    }

    /// Fetches a single agent. `GET /agents/{id}`
    pub async fn get_agent(&self, id: u64) -> Result<Agent, FreshdeskError> {
        self.execute(Request::get(format!("/agents/{id}"))).await
    }

    /// Fetches the agent owning the API key. `GET /agents/me`
    pub async fn current_agent(&self) -> Result<Agent, FreshdeskError> {
        self.execute(Request::get("/agents/me")).await
    }

    /// Updates an agent. `PUT /agents/{id}`
    pub async fn update_agent(&self, id: u64, agent: &UpdateAgent) -> Result<Agent, FreshdeskError> {
        self.execute(Request::put(format!("/agents/{id}")).body(agent)?)
            .await
    }

    /// Downgrades an agent to a contact. `DELETE /agents/{id}`
    pub async fn delete_agent(&self, id: u64) -> Result<(), FreshdeskError> {
        self.execute(Request::delete(format!("/agents/{id}"))).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_agent_parses_with_embedded_contact() {
        let agent: Agent = serde_json::from_value(json!({
            "id": 9,
            "available": true,
            "ticket_scope": 1,
            "contact": {"name": "Sam", "email": "sam@example.com", "active": true},
            "group_ids": [1, 2]
        }))
        .unwrap();
        assert!(agent.available);
        assert_eq!(agent.group_ids, vec![1, 2]);
        assert_eq!(
            agent.contact.and_then(|c| c.email).as_deref(),
            Some("sam@example.com")
        );
    }

    #[test]
    fn test_update_agent_skips_unset_fields() {
        let update = UpdateAgent {
            occasional: Some(true),
            ..Default::default()
        };
        let value = serde_json::to_value(&update).unwrap();
        assert_eq!(value, json!({"occasional": true}));
    }
}
