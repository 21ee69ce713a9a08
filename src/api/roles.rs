//! Role operations. Roles are read-only through the API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::client::Freshdesk;
use crate::error::FreshdeskError;
use crate::request::Request;

/// An agent role.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Role {
    pub id: u64,
    pub name: Option<String>,
    pub description: Option<String>,
    /// Whether this is one of the built-in roles.
    #[serde(default)]
    pub default: bool,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Pagination for `GET /roles`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ListRolesQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_page: Option<u32>,
}

impl Freshdesk {
    /// Lists roles. `GET /roles`
    pub async fn list_roles(&self, query: &ListRolesQuery) -> Result<Vec<Role>, FreshdeskError> {
        self.execute(Request::get("/roles").query(query)?).await
    }

    /// Fetches a single role. `GET /roles/{id}`
    pub async fn get_role(&self, id: u64) -> Result<Role, FreshdeskError> {
        self.execute(Request::get(format!("/roles/{id}"))).await
    }
}
