//! Satisfaction rating operations.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::client::Freshdesk;
use crate::error::FreshdeskError;
use crate::request::Request;

/// A survey response attached to a ticket.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SatisfactionRating {
    pub id: u64,
    pub survey_id: Option<u64>,
    pub ticket_id: Option<u64>,
    /// The contact who answered.
    pub user_id: Option<u64>,
    pub agent_id: Option<u64>,
    pub group_id: Option<u64>,
    pub feedback: Option<String>,
    /// Answers keyed by question name, e.g. `{"default_question": 103}`.
    #[serde(default)]
    pub ratings: HashMap<String, Value>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Payload for `POST /tickets/{id}/satisfaction_ratings`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CreateSatisfactionRating {
    /// Answers keyed by question name.
    pub ratings: HashMap<String, Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feedback: Option<String>,
}

/// Filters for `GET /surveys/satisfaction_ratings`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ListSatisfactionRatingsQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_since: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_page: Option<u32>,
}

impl Freshdesk {
    /// Lists satisfaction ratings across tickets.
    /// `GET /surveys/satisfaction_ratings`
    pub async fn list_satisfaction_ratings(
        &self,
        query: &ListSatisfactionRatingsQuery,
    ) -> Result<Vec<SatisfactionRating>, FreshdeskError> {
        self.execute(Request::get("/surveys/satisfaction_ratings").query(query)?)
            .await
    }

    /// Lists the satisfaction ratings of one ticket.
    /// `GET /tickets/{id}/satisfaction_ratings`
    pub async fn list_ticket_satisfaction_ratings(
        &self,
        ticket_id: u64,
    ) -> Result<Vec<SatisfactionRating>, FreshdeskError> {
        self.execute(Request::get(format!(
            "/tickets/{ticket_id}/satisfaction_ratings"
        )))
        .await
    }

    /// Records a satisfaction rating on a ticket.
    /// `POST /tickets/{id}/satisfaction_ratings`
    pub async fn create_satisfaction_rating(
        &self,
        ticket_id: u64,
        rating: &CreateSatisfactionRating,
    ) -> Result<SatisfactionRating, FreshdeskError> {
        self.execute(
            Request::post(format!("/tickets/{ticket_id}/satisfaction_ratings")).body(rating)?,
        )
        .await
    }
}
