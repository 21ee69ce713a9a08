//! Ticket operations.
//!
//! Tickets are the central Freshdesk object. This module covers the CRUD
//! surface plus the soft-delete/restore pair and the ticket-scoped listing
//! endpoints (fields, conversations).

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::conversations::Conversation;
use super::Attachment;
use crate::client::Freshdesk;
use crate::error::FreshdeskError;
use crate::request::Request;

/// A helpdesk ticket.
///
/// `status`, `priority` and `source` are the raw integer codes the API
/// uses (e.g. status 2 = open, 5 = closed; priority 1 = low, 4 = urgent).
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Ticket {
    pub id: u64,
    pub subject: Option<String>,
    pub description: Option<String>,
    pub description_text: Option<String>,
    #[serde(rename = "type")]
    pub ticket_type: Option<String>,
    pub status: Option<u32>,
    pub priority: Option<u32>,
    pub source: Option<u32>,
    pub requester_id: Option<u64>,
    pub responder_id: Option<u64>,
    pub group_id: Option<u64>,
    pub company_id: Option<u64>,
    pub product_id: Option<u64>,
    pub email_config_id: Option<u64>,
    #[serde(default)]
    pub to_emails: Option<Vec<String>>,
    #[serde(default)]
    pub cc_emails: Vec<String>,
    #[serde(default)]
    pub fwd_emails: Vec<String>,
    #[serde(default)]
    pub reply_cc_emails: Vec<String>,
    #[serde(default)]
    pub spam: bool,
    #[serde(default)]
    pub deleted: bool,
    #[serde(default)]
    pub is_escalated: bool,
    #[serde(default)]
    pub fr_escalated: bool,
    pub due_by: Option<DateTime<Utc>>,
    pub fr_due_by: Option<DateTime<Utc>>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub custom_fields: HashMap<String, Value>,
    #[serde(default)]
    pub attachments: Vec<Attachment>,
}

/// Payload for `POST /tickets`.
///
/// The requester is identified by whichever of `requester_id`, `email`,
/// `phone`, `twitter_id` or `unique_external_id` is set.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CreateTicket {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requester_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub twitter_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unique_external_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub ticket_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub responder_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cc_emails: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_by: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fr_due_by: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_config_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_fields: Option<HashMap<String, Value>>,
}

/// Payload for `PUT /tickets/{id}`. Unset fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UpdateTicket {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub ticket_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requester_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub responder_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_by: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fr_due_by: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_fields: Option<HashMap<String, Value>>,
}

/// Filters for `GET /tickets`.
///
/// Unset fields are omitted from the query string entirely.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ListTicketsQuery {
    /// Predefined filter name: `new_and_my_open`, `watching`, `spam` or
    /// `deleted`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requester_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_since: Option<DateTime<Utc>>,
    /// Embed extra data: `stats`, `requester`, `description`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include: Option<String>,
    /// Sort key: `created_at`, `due_by`, `updated_at` or `status`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_by: Option<String>,
    /// `asc` or `desc`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_page: Option<u32>,
}

/// Filters for `GET /ticket_fields`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TicketFieldsQuery {
    /// Restrict to one field type, e.g. `default_status`.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub field_type: Option<String>,
}

/// A ticket field definition, including custom fields.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TicketField {
    pub id: u64,
    pub name: Option<String>,
    pub label: Option<String>,
    #[serde(rename = "type")]
    pub field_type: Option<String>,
    pub description: Option<String>,
    pub position: Option<u32>,
    #[serde(default)]
    pub required_for_closure: bool,
    #[serde(default)]
    pub required_for_agents: bool,
    #[serde(default)]
    pub required_for_customers: bool,
    #[serde(default)]
    pub default: bool,
    #[serde(default)]
    pub customers_can_edit: bool,
    #[serde(default)]
    pub displayed_to_customers: bool,
    pub label_for_customers: Option<String>,
    /// Choice lists vary in shape per field type, so they stay untyped.
    pub choices: Option<Value>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Freshdesk {
    /// Lists tickets matching the given filters. `GET /tickets`
    pub async fn list_tickets(&self, query: &ListTicketsQuery) -> Result<Vec<Ticket>, FreshdeskError> {
        self.execute(Request::get("/tickets").query(query)?).await
    }

    /// Fetches a single ticket. `GET /tickets/{id}`
    pub async fn get_ticket(&self, id: u64) -> Result<Ticket, FreshdeskError> {
        self.execute(Request::get(format!("/tickets/{id}"))).await
    }

    /// Creates a ticket. `POST /tickets`
    pub async fn create_ticket(&self, ticket: &CreateTicket) -> Result<Ticket, FreshdeskError> {
        self.execute(Request::post("/tickets").body(ticket)?).await
    }

    /// Updates a ticket. `PUT /tickets/{id}`
    pub async fn update_ticket(
        &self,
        id: u64,
        ticket: &UpdateTicket,
    ) -> Result<Ticket, FreshdeskError> {
        self.execute(Request::put(format!("/tickets/{id}")).body(ticket)?)
            .await
    }

    /// Soft-deletes a ticket. `DELETE /tickets/{id}`
    pub async fn delete_ticket(&self, id: u64) -> Result<(), FreshdeskError> {
        self.execute(Request::delete(format!("/tickets/{id}"))).await
    }

    /// Restores a soft-deleted ticket. `PUT /tickets/{id}/restore`
    pub async fn restore_ticket(&self, id: u64) -> Result<(), FreshdeskError> {
        self.execute(Request::put(format!("/tickets/{id}/restore")))
            .await
    }

    /// Lists ticket field definitions. `GET /ticket_fields`
    pub async fn list_ticket_fields(
        &self,
        query: &TicketFieldsQuery,
    ) -> Result<Vec<TicketField>, FreshdeskError> {
        self.execute(Request::get("/ticket_fields").query(query)?)
            .await
    }

    /// Lists all conversations of a ticket. `GET /tickets/{id}/conversations`
    pub async fn list_ticket_conversations(
        &self,
        id: u64,
    ) -> Result<Vec<Conversation>, FreshdeskError> {
        self.execute(Request::get(format!("/tickets/{id}/conversations")))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_minimal_payload_parses() {
        let ticket: Ticket = serde_json::from_value(json!({"id": 1})).unwrap();
        assert_eq!(ticket.id, 1);
        assert_eq!(ticket.subject, None);
        assert!(ticket.tags.is_empty());
        assert!(!ticket.deleted);
    }

    #[test]
    fn test_full_payload_parses() {
        let ticket: Ticket = serde_json::from_value(json!({
            "id": 42,
            "subject": "Printer on fire",
            "type": "Incident",
            "status": 2,
            "priority": 4,
            "requester_id": 7,
            "cc_emails": ["ops@example.com"],
            "tags": ["hardware"],
            "custom_fields": {"severity": "high"},
            "created_at": "2015-07-09T13:08:06Z",
            "due_by": "2015-07-12T13:08:06Z"
        }))
        .unwrap();
        assert_eq!(ticket.subject.as_deref(), Some("Printer on fire"));
        assert_eq!(ticket.ticket_type.as_deref(), Some("Incident"));
        assert_eq!(ticket.priority, Some(4));
        assert_eq!(ticket.cc_emails, vec!["ops@example.com"]);
        assert_eq!(ticket.custom_fields["severity"], json!("high"));
        assert!(ticket.created_at.is_some());
    }

    #[test]
    fn test_create_ticket_skips_unset_fields() {
        let payload = CreateTicket {
            email: Some("user@example.com".to_string()),
            subject: Some("help".to_string()),
            status: Some(2),
            priority: Some(1),
            description: Some("details".to_string()),
            ..Default::default()
        };
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(
            value,
            json!({
                "email": "user@example.com",
                "subject": "help",
                "status": 2,
                "priority": 1,
                "description": "details"
            })
        );
    }

    #[test]
    fn test_update_ticket_renames_type() {
        let payload = UpdateTicket {
            ticket_type: Some("Problem".to_string()),
            ..Default::default()
        };
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value, json!({"type": "Problem"}));
    }

    #[test]
    fn test_list_query_skips_unset_filters() {
        let query = ListTicketsQuery {
            company_id: Some(7),
            ..Default::default()
        };
        let value = serde_json::to_value(&query).unwrap();
        assert_eq!(value, json!({"company_id": 7}));
    }
}
