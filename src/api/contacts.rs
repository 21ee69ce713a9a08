//! Contact operations.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::agents::Agent;
use crate::client::Freshdesk;
use crate::error::FreshdeskError;
use crate::request::Request;

/// A customer contact.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Contact {
    pub id: u64,
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub mobile: Option<String>,
    pub twitter_id: Option<String>,
    pub unique_external_id: Option<String>,
    #[serde(default)]
    pub active: bool,
    pub address: Option<String>,
    pub company_id: Option<u64>,
    #[serde(default)]
    pub view_all_tickets: bool,
    #[serde(default)]
    pub deleted: bool,
    pub description: Option<String>,
    pub job_title: Option<String>,
    pub language: Option<String>,
    pub time_zone: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub other_emails: Vec<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub custom_fields: HashMap<String, Value>,
}

/// Payload for `POST /contacts`.
///
/// A contact needs a name plus at least one channel: `email`, `phone`,
/// `mobile`, `twitter_id` or `unique_external_id`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CreateContact {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mobile: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub twitter_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unique_external_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub view_all_tickets: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_zone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub other_emails: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_fields: Option<HashMap<String, Value>>,
}

/// Payload for `PUT /contacts/{id}`. Unset fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UpdateContact {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mobile: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub twitter_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unique_external_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub view_all_tickets: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_zone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_fields: Option<HashMap<String, Value>>,
}

/// Filters for `GET /contacts`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ListContactsQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mobile: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_id: Option<u64>,
    /// `verified`, `unverified`, `blocked` or `deleted`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_since: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_page: Option<u32>,
}

/// A contact field definition, including custom fields.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ContactField {
    pub id: u64,
    pub name: Option<String>,
    pub label: Option<String>,
    #[serde(rename = "type")]
    pub field_type: Option<String>,
    pub position: Option<u32>,
    #[serde(default)]
    pub default: bool,
    #[serde(default)]
    pub required_for_agents: bool,
    #[serde(default)]
    pub required_for_customers: bool,
    #[serde(default)]
    pub editable_in_signup: bool,
    #[serde(default)]
    pub customers_can_edit: bool,
    #[serde(default)]
    pub displayed_for_customers: bool,
    pub label_for_customers: Option<String>,
    pub choices: Option<Value>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Freshdesk {
    /// Lists contacts matching the given filters. `GET /contacts`
    pub async fn list_contacts(
        &self,
        query: &ListContactsQuery,
    ) -> Result<Vec<Contact>, FreshdeskError> {
        self.execute(Request::get("/contacts").query(query)?).await
    }

    /// Fetches a single contact. `GET /contacts/{id}`
    pub async fn get_contact(&self, id: u64) -> Result<Contact, FreshdeskError> {
        self.execute(Request::get(format!("/contacts/{id}"))).await
    }

    /// Creates a contact. `POST /contacts`
    pub async fn create_contact(&self, contact: &CreateContact) -> Result<Contact, FreshdeskError> {
        self.execute(Request::post("/contacts").body(contact)?).await
    }

    /// Updates a contact. `PUT /contacts/{id}`
    pub async fn update_contact(
        &self,
        id: u64,
        contact: &UpdateContact,
    ) -> Result<Contact, FreshdeskError> {
        self.execute(Request::put(format!("/contacts/{id}")).body(contact)?)
            .await
    }

    /// Soft-deletes a contact. `DELETE /contacts/{id}`
    pub async fn delete_contact(&self, id: u64) -> Result<(), FreshdeskError> {
        self.execute(Request::delete(format!("/contacts/{id}")))
            .await
    }

    /// Restores a soft-deleted contact. `PUT /contacts/{id}/restore`
    pub async fn restore_contact(&self, id: u64) -> Result<(), FreshdeskError> {
        self.execute(Request::put(format!("/contacts/{id}/restore")))
            .await
    }

    /// Converts a contact into an agent. `PUT /contacts/{id}/make_agent`
    pub async fn make_agent(&self, id: u64) -> Result<Agent, FreshdeskError> {
        self.execute(Request::put(format!("/contacts/{id}/make_agent")))
            .await
    }

    /// Lists contact field definitions. `GET /contact_fields`
    pub async fn list_contact_fields(&self) -> Result<Vec<ContactField>, FreshdeskError> {
        self.execute(Request::get("/contact_fields")).await
    }
}
