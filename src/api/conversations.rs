//! Conversation operations: replies and private notes on tickets.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Attachment;
use crate::client::Freshdesk;
use crate::error::FreshdeskError;
use crate::request::Request;

/// One entry in a ticket's conversation thread.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Conversation {
    pub id: u64,
    pub ticket_id: Option<u64>,
    pub user_id: Option<u64>,
    pub body: Option<String>,
    pub body_text: Option<String>,
    #[serde(default)]
    pub incoming: bool,
    #[serde(default)]
    pub private: bool,
    pub source: Option<u32>,
    pub support_email: Option<String>,
    pub from_email: Option<String>,
    #[serde(default)]
    pub to_emails: Vec<String>,
    #[serde(default)]
    pub cc_emails: Vec<String>,
    #[serde(default)]
    pub bcc_emails: Option<Vec<String>>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub attachments: Vec<Attachment>,
}

/// Payload for `POST /tickets/{id}/reply`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CreateReply {
    /// HTML body of the reply.
    pub body: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_email: Option<String>,
    /// Agent replying on behalf of someone else.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cc_emails: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bcc_emails: Option<Vec<String>>,
}

/// Payload for `POST /tickets/{id}/notes`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CreateNote {
    /// HTML body of the note.
    pub body: String,
    /// Private notes are visible to agents only. The API defaults to
    /// private when omitted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub private: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub incoming: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notify_emails: Option<Vec<String>>,
}

/// Payload for `PUT /conversations/{id}`. Only the body can be edited.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UpdateConversation {
    pub body: String,
}

impl Freshdesk {
    /// Replies to a ticket. `POST /tickets/{ticket_id}/reply`
    pub async fn create_reply(
        &self,
        ticket_id: u64,
        reply: &CreateReply,
    ) -> Result<Conversation, FreshdeskError> {
        self.execute(Request::post(format!("/tickets/{ticket_id}/reply")).body(reply)?)
            .await
    }

    /// Adds a note to a ticket. `POST /tickets/{ticket_id}/notes`
    pub async fn create_note(
        &self,
        ticket_id: u64,
        note: &CreateNote,
    ) -> Result<Conversation, FreshdeskError> {
        self.execute(Request::post(format!("/tickets/{ticket_id}/notes")).body(note)?)
            .await
    }

    /// Edits the body of a note or reply. `PUT /conversations/{id}`
    pub async fn update_conversation(
        &self,
        id: u64,
        update: &UpdateConversation,
    ) -> Result<Conversation, FreshdeskError> {
        self.execute(Request::put(format!("/conversations/{id}")).body(update)?)
            .await
    }

    /// Deletes a note or reply. `DELETE /conversations/{id}`
    pub async fn delete_conversation(&self, id: u64) -> Result<(), FreshdeskError> {
        self.execute(Request::delete(format!("/conversations/{id}")))
            .await
    }
}
