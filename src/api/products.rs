//! Product operations. Read-only through the API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::client::Freshdesk;
use crate::error::FreshdeskError;
use crate::request::Request;

/// A product in a multi-product helpdesk.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Product {
    pub id: u64,
    pub name: Option<String>,
    pub description: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Pagination for `GET /products`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ListProductsQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_page: Option<u32>,
}

impl Freshdesk {
    /// Lists products. `GET /products`
    pub async fn list_products(
        &self,
        query: &ListProductsQuery,
    ) -> Result<Vec<Product>, FreshdeskError> {
        self.execute(Request::get("/products").query(query)?).await
    }

    /// Fetches a single product. `GET /products/{id}`
    pub async fn get_product(&self, id: u64) -> Result<Product, FreshdeskError> {
        self.execute(Request::get(format!("/products/{id}"))).await
    }
}
