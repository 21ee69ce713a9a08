//! Endpoint surface of the Freshdesk v2 API.
//!
//! One module per resource group; each module defines the serde types for
//! that resource and implements the corresponding methods on
//! [`Freshdesk`](crate::Freshdesk). Every method builds a
//! [`Request`](crate::Request) descriptor and forwards it to the shared
//! executor unchanged; there is no per-endpoint request logic.
//!
//! Response models are deliberately lenient: almost every field is
//! `Option` or defaulted, so partial payloads from older or trimmed
//! accounts still parse.

pub mod agents;
pub mod business_hours;
pub mod companies;
pub mod contacts;
pub mod conversations;
pub mod email_configs;
pub mod groups;
pub mod products;
pub mod roles;
pub mod satisfaction_ratings;
pub mod settings;
pub mod solutions;
pub mod surveys;
pub mod tickets;
pub mod time_entries;

use serde::Deserialize;

/// A file attached to a ticket or conversation.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Attachment {
    pub id: u64,
    pub name: Option<String>,
    pub content_type: Option<String>,
    pub size: Option<u64>,
    pub attachment_url: Option<String>,
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
}
