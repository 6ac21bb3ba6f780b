//! Yearly tax declarations.

use serde::Serialize;

use crate::error::ApiError;
use crate::http::{ApiClient, Transport};
use crate::models::{Declaration, DeclarationStats, DeclarationStatus, RecentActivity};
use crate::pagination::{PageQuery, Paginated};
use crate::token::TokenStore;

use super::list_path;

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateDeclaration {
    pub user_id: String,
    pub taxable_year: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub status: DeclarationStatus,
}

impl CreateDeclaration {
    /// New declarations always start out pending.
    pub fn new(user_id: impl Into<String>, taxable_year: i32, description: Option<String>) -> Self {
        Self {
            user_id: user_id.into(),
            taxable_year,
            description,
            status: DeclarationStatus::Pending,
        }
    }
}

/// Mutable subset of a declaration: the status transition and the
/// accountant's notes. Owner and year are fixed at creation.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDeclaration {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<DeclarationStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

pub struct DeclarationsService<'a, T: Transport, S: TokenStore> {
    client: &'a ApiClient<T, S>,
}

impl<'a, T: Transport, S: TokenStore> DeclarationsService<'a, T, S> {
    pub fn new(client: &'a ApiClient<T, S>) -> Self {
        Self { client }
    }

    /// One page of declarations, optionally restricted to one customer.
    pub async fn find_all_paginated(
        &self,
        page: Option<PageQuery>,
        user_id: Option<&str>,
    ) -> Result<Paginated<Declaration>, ApiError> {
        let filter = user_id.map(|id| ("userId", id));
        self.client
            .get(&list_path("/declarations", page, filter))
            .await
    }

    pub async fn find_all(
        &self,
        page: Option<PageQuery>,
        user_id: Option<&str>,
    ) -> Result<Vec<Declaration>, ApiError> {
        Ok(self.find_all_paginated(page, user_id).await?.data)
    }

    pub async fn find_one(&self, id: &str) -> Result<Declaration, ApiError> {
        self.client.get(&format!("/declarations/{id}")).await
    }

    pub async fn create(&self, data: &CreateDeclaration) -> Result<Declaration, ApiError> {
        self.client.post("/declarations", data).await
    }

    pub async fn update(
        &self,
        id: &str,
        update: &UpdateDeclaration,
    ) -> Result<Declaration, ApiError> {
        self.client.put(&format!("/declarations/{id}"), update).await
    }

    pub async fn remove(&self, id: &str) -> Result<(), ApiError> {
        self.client.delete(&format!("/declarations/{id}")).await
    }

    pub async fn stats(&self) -> Result<DeclarationStats, ApiError> {
        self.client.get("/declarations/stats").await
    }

    pub async fn recent_activity(&self) -> Result<Vec<RecentActivity>, ApiError> {
        self.client.get("/declarations/recent-activity").await
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::config::ApiConfig;
    use crate::http::{Method, MockTransport};
    use crate::token::MemoryTokenStore;

    fn client(transport: &MockTransport) -> ApiClient<MockTransport, MemoryTokenStore> {
        ApiClient::new(
            ApiConfig::default(),
            transport.clone(),
            MemoryTokenStore::with_token("t"),
        )
    }

    #[tokio::test]
    async fn list_filters_by_owner() {
        let transport = MockTransport::new();
        transport.push_json(json!({"data": [], "total": 0, "limit": 5, "offset": 0}));
        let client = client(&transport);

        DeclarationsService::new(&client)
            .find_all_paginated(Some(PageQuery::first(5)), Some("u7"))
            .await
            .unwrap();

        assert_eq!(
            transport.requests()[0].url,
            "http://localhost:3001/declarations?limit=5&offset=0&userId=u7"
        );
    }

    #[tokio::test]
    async fn create_posts_pending_status() {
        let transport = MockTransport::new();
        transport.push_status(
            201,
            json!({
                "id": "d1",
                "userId": "u7",
                "taxableYear": 2024,
                "status": "PENDING",
                "description": ""
            }),
        );
        let client = client(&transport);

        let created = DeclarationsService::new(&client)
            .create(&CreateDeclaration::new("u7", 2024, None))
            .await
            .unwrap();

        assert_eq!(created.status, DeclarationStatus::Pending);
        let body = transport.requests()[0].body_json().unwrap();
        assert_eq!(body["status"], json!("PENDING"));
        assert_eq!(body["taxableYear"], json!(2024));
        assert!(body.get("description").is_none());
    }

    #[tokio::test]
    async fn update_uses_put_with_narrowed_body() {
        let transport = MockTransport::new();
        transport.push_json(json!({
            "id": "d1",
            "userId": "u7",
            "taxableYear": 2024,
            "status": "COMPLETED",
            "description": "done"
        }));
        let client = client(&transport);

        DeclarationsService::new(&client)
            .update(
                "d1",
                &UpdateDeclaration {
                    status: Some(DeclarationStatus::Completed),
                    description: None,
                },
            )
            .await
            .unwrap();

        let sent = &transport.requests()[0];
        assert_eq!(sent.method, Method::Put);
        assert_eq!(sent.body_json(), Some(json!({"status": "COMPLETED"})));
    }
}
