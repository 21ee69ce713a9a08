//! Company operations.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::client::Freshdesk;
use crate::error::FreshdeskError;
use crate::request::Request;

/// A customer company.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Company {
    pub id: u64,
    pub name: Option<String>,
    pub description: Option<String>,
    pub note: Option<String>,
    #[serde(default)]
    pub domains: Vec<String>,
    pub health_score: Option<String>,
    pub account_tier: Option<String>,
    pub renewal_date: Option<DateTime<Utc>>,
    pub industry: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub custom_fields: HashMap<String, Value>,
}

/// Payload for `POST /companies`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CreateCompany {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domains: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub health_score: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_tier: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub renewal_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub industry: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_fields: Option<HashMap<String, Value>>,
}

/// Payload for `PUT /companies/{id}`. Unset fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UpdateCompany {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domains: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub health_score: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_tier: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub renewal_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub industry: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_fields: Option<HashMap<String, Value>>,
}

/// Pagination for `GET /companies`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ListCompaniesQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_page: Option<u32>,
}

/// A company field definition, including custom fields.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CompanyField {
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
    pub choices: Option<Value>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Freshdesk {
    /// Lists companies. `GET /companies`
    pub async fn list_companies(
        &self,
        query: &ListCompaniesQuery,
    ) -> Result<Vec<Company>, FreshdeskError> {
        self.execute(Request::get("/companies").query(query)?).await
    }

    /// Fetches a single company. `GET /companies/{id}`
    pub async fn get_company(&self, id: u64) -> Result<Company, FreshdeskError> {
        self.execute(Request::get(format!("/companies/{id}"))).await
    }

    /// Creates a company. `POST /companies`
    pub async fn create_company(&self, company: &CreateCompany) -> Result<Company, FreshdeskError> {
        self.execute(Request::post("/companies").body(company)?)
            .await
    }

    /// Updates a company. `PUT /companies/{id}`
    pub async fn update_company(
        &self,
        id: u64,
        company: &UpdateCompany,
    ) -> Result<Company, FreshdeskError> {
        self.execute(Request::put(format!("/companies/{id}")).body(company)?)
            .await
    }

    /// Deletes a company. `DELETE /companies/{id}`
    pub async fn delete_company(&self, id: u64) -> Result<(), FreshdeskError> {
        self.execute(Request::delete(format!("/companies/{id}")))
            .await
    }

    /// Lists company field definitions. `GET /company_fields`
    pub async fn list_company_fields(&self) -> Result<Vec<CompanyField>, FreshdeskError> {
        self.execute(Request::get("/company_fields")).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_company_parses_with_domains() {
        let company: Company = serde_json::from_value(json!({
            "id": 8,
            "name": "Acme",
            "domains": ["acme.com", "acme.io"]
        }))
        .unwrap();
        assert_eq!(company.domains, vec!["acme.com", "acme.io"]);
    }

    #[test]
    fn test_create_company_serializes_name_only() {
        let company = CreateCompany {
            name: "Acme".to_string(),
            ..Default::default()
        };
        let value = serde_json::to_value(&company).unwrap();
        assert_eq!(value, json!({"name": "Acme"}));
    }
}
