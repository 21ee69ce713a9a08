//! Knowledge base operations: solution categories, folders and articles.
//!
//! The hierarchy is category → folder → article; creation always happens
//! under a parent (`POST /solutions/folders/{folder_id}/articles` etc.)
//! while reads, updates and deletes address the object directly.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::client::Freshdesk;
use crate::error::FreshdeskError;
use crate::request::Request;

/// A solution category.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SolutionCategory {
    pub id: u64,
    pub name: Option<String>,
    pub description: Option<String>,
    /// Portal IDs the category is visible in.
    #[serde(default)]
    pub visible_in_portals: Vec<u64>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Payload for creating or updating a solution category.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SolutionCategoryPayload {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visible_in_portals: Option<Vec<u64>>,
}

/// A solution folder.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SolutionFolder {
    pub id: u64,
    pub name: Option<String>,
    pub description: Option<String>,
    /// Visibility: 1 = all, 2 = logged-in users, 3 = agents,
    /// 4 = selected companies.
    pub visibility: Option<u32>,
    #[serde(default)]
    pub company_ids: Vec<u64>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Payload for creating or updating a solution folder.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SolutionFolderPayload {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visibility: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_ids: Option<Vec<u64>>,
}

/// A solution article.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SolutionArticle {
    pub id: u64,
    pub title: Option<String>,
    pub description: Option<String>,
    pub description_text: Option<String>,
    /// 1 = draft, 2 = published.
    pub status: Option<u32>,
    pub agent_id: Option<u64>,
    pub folder_id: Option<u64>,
    pub category_id: Option<u64>,
    #[serde(default)]
    pub thumbs_up: u64,
    #[serde(default)]
    pub thumbs_down: u64,
    #[serde(default)]
    pub hits: u64,
    #[serde(default)]
    pub tags: Vec<String>,
    pub seo_data: Option<Value>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Payload for creating or updating a solution article.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SolutionArticlePayload {
    pub title: String,
    pub description: String,
    /// 1 = draft, 2 = published.
    pub status: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seo_data: Option<Value>,
}

impl Freshdesk {
    /// Creates a solution category. `POST /solutions/categories`
    pub async fn create_solution_category(
        &self,
        category: &SolutionCategoryPayload,
    ) -> Result<SolutionCategory, FreshdeskError> {
        self.execute(Request::post("/solutions/categories").body(category)?)
            .await
    }

    /// Fetches a solution category. `GET /solutions/categories/{id}`
    pub async fn get_solution_category(
        &self,
        id: u64,
    ) -> Result<SolutionCategory, FreshdeskError> {
        self.execute(Request::get(format!("/solutions/categories/{id}")))
            .await
    }

    /// Lists all solution categories. `GET /solutions/categories`
    pub async fn list_solution_categories(
        &self,
    ) -> Result<Vec<SolutionCategory>, FreshdeskError> {
        self.execute(Request::get("/solutions/categories")).await
    }

    /// Updates a solution category. `PUT /solutions/categories/{id}`
    pub async fn update_solution_category(
        &self,
        id: u64,
        category: &SolutionCategoryPayload,
    ) -> Result<SolutionCategory, FreshdeskError> {
        self.execute(Request::put(format!("/solutions/categories/{id}")).body(category)?)
            .await
    }

    /// Deletes a solution category and everything under it.
    /// `DELETE /solutions/categories/{id}`
    pub async fn delete_solution_category(&self, id: u64) -> Result<(), FreshdeskError> {
        self.execute(Request::delete(format!("/solutions/categories/{id}")))
            .await
    }

    /// Creates a folder under a category.
    /// `POST /solutions/categories/{category_id}/folders`
    pub async fn create_solution_folder(
        &self,
        category_id: u64,
        folder: &SolutionFolderPayload,
    ) -> Result<SolutionFolder, FreshdeskError> {
        self.execute(
            Request::post(format!("/solutions/categories/{category_id}/folders")).body(folder)?,
        )
        .await
    }

    /// Fetches a solution folder. `GET /solutions/folders/{id}`
    pub async fn get_solution_folder(&self, id: u64) -> Result<SolutionFolder, FreshdeskError> {
        self.execute(Request::get(format!("/solutions/folders/{id}")))
            .await
    }

    /// Lists the folders of a category.
    /// `GET /solutions/categories/{category_id}/folders`
    pub async fn list_solution_folders(
        &self,
        category_id: u64,
    ) -> Result<Vec<SolutionFolder>, FreshdeskError> {
        self.execute(Request::get(format!(
            "/solutions/categories/{category_id}/folders"
        )))
        .await
    }

    /// Updates a solution folder. `PUT /solutions/folders/{id}`
    pub async fn update_solution_folder(
        &self,
        id: u64,
        folder: &SolutionFolderPayload,
    ) -> Result<SolutionFolder, FreshdeskError> {
        self.execute(Request::put(format!("/solutions/folders/{id}")).body(folder)?)
            .await
    }

    /// Deletes a solution folder and its articles.
    /// `DELETE /solutions/folders/{id}`
    pub async fn delete_solution_folder(&self, id: u64) -> Result<(), FreshdeskError> {
        self.execute(Request::delete(format!("/solutions/folders/{id}")))
            .await
    }

    /// Creates an article under a folder.
    /// `POST /solutions/folders/{folder_id}/articles`
    pub async fn create_solution_article(
        &self,
        folder_id: u64,
        article: &SolutionArticlePayload,
    ) -> Result<SolutionArticle, FreshdeskError> {
        self.execute(
            Request::post(format!("/solutions/folders/{folder_id}/articles")).body(article)?,
        )
        .await
    }

    /// Fetches a solution article. `GET /solutions/articles/{id}`
    pub async fn get_solution_article(&self, id: u64) -> Result<SolutionArticle, FreshdeskError> {
        self.execute(Request::get(format!("/solutions/articles/{id}")))
            .await
    }

    /// Lists the articles of a folder.
    /// `GET /solutions/folders/{folder_id}/articles`
    pub async fn list_solution_articles(
        &self,
        folder_id: u64,
    ) -> Result<Vec<SolutionArticle>, FreshdeskError> {
        self.execute(Request::get(format!(
            "/solutions/folders/{folder_id}/articles"
        )))
        .await
    }

    /// Updates a solution article. `PUT /solutions/articles/{id}`
    pub async fn update_solution_article(
        &self,
        id: u64,
        article: &SolutionArticlePayload,
    ) -> Result<SolutionArticle, FreshdeskError> {
        self.execute(Request::put(format!("/solutions/articles/{id}")).body(article)?)
            .await
    }

    /// Deletes a solution article. `DELETE /solutions/articles/{id}`
    pub async fn delete_solution_article(&self, id: u64) -> Result<(), FreshdeskError> {
        self.execute(Request::delete(format!("/solutions/articles/{id}")))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_category_payload_skips_unset_fields() {
        let payload = SolutionCategoryPayload {
            name: "Getting Started".to_string(),
            ..Default::default()
        };
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value, json!({"name": "Getting Started"}));
    }

    #[test]
    fn test_article_parses_with_counters() {
        let article: SolutionArticle = serde_json::from_value(json!({
            "id": 100,
            "title": "Resetting your password",
            "status": 2,
            "thumbs_up": 12,
            "hits": 340,
            "folder_id": 7
        }))
        .unwrap();
        assert_eq!(article.status, Some(2));
        assert_eq!(article.thumbs_up, 12);
        assert_eq!(article.hits, 340);
    }

    #[test]
    fn test_article_payload_requires_status() {
        let payload = SolutionArticlePayload {
            title: "FAQ".to_string(),
            description: "<p>answers</p>".to_string(),
            status: 1,
            ..Default::default()
        };
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(
            value,
            json!({"title": "FAQ", "description": "<p>answers</p>", "status": 1})
        );
    }
}
