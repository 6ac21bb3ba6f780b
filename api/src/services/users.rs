//! Customer records.

use serde::Serialize;

use crate::error::ApiError;
use crate::http::{ApiClient, Transport};
use crate::models::{User, UserStats};
use crate::pagination::{PageQuery, Paginated};
use crate::token::TokenStore;

use super::list_path;

/// Mutable subset of a user record. The role and the document number are
/// fixed for the lifetime of the account and never cross this boundary.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUser {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

pub struct UsersService<'a, T: Transport, S: TokenStore> {
    client: &'a ApiClient<T, S>,
}

impl<'a, T: Transport, S: TokenStore> UsersService<'a, T, S> {
    pub fn new(client: &'a ApiClient<T, S>) -> Self {
        Self { client }
    }

    /// One page of users with the full envelope, for page-count math.
    pub async fn find_all_paginated(
        &self,
        page: Option<PageQuery>,
    ) -> Result<Paginated<User>, ApiError> {
        self.client.get(&list_path("/users", page, None)).await
    }

    /// Bare list for call sites that don't need paging metadata. Issues
    /// the same network call.
    pub async fn find_all(&self, page: Option<PageQuery>) -> Result<Vec<User>, ApiError> {
        Ok(self.find_all_paginated(page).await?.data)
    }

    pub async fn find_one(&self, id: &str) -> Result<User, ApiError> {
        self.client.get(&format!("/users/{id}")).await
    }

    pub async fn update(&self, id: &str, update: &UpdateUser) -> Result<User, ApiError> {
        self.client.put(&format!("/users/{id}"), update).await
    }

    pub async fn remove(&self, id: &str) -> Result<(), ApiError> {
        self.client.delete(&format!("/users/{id}")).await
    }

    pub async fn stats(&self) -> Result<UserStats, ApiError> {
        self.client.get("/users/stats").await
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

    fn user_json(id: u32) -> serde_json::Value {
        json!({
            "id": id.to_string(),
            "documentNumber": format!("10000{id}"),
            "fullName": format!("Customer {id}"),
            "email": format!("c{id}@example.com"),
            "phoneNumber": "3000000000",
            "role": "user",
            "isActive": true
        })
    }

    #[tokio::test]
    async fn paginated_list_carries_window() {
        let transport = MockTransport::new();
        transport.push_json(json!({
            "data": [user_json(21), user_json(22)],
            "total": 25,
            "limit": 10,
            "offset": 20
        }));
        let client = client(&transport);

        let page = UsersService::new(&client)
            .find_all_paginated(Some(PageQuery::new(10, 20)))
            .await
            .unwrap();

        assert_eq!(
            transport.requests()[0].url,
            "http://localhost:3001/users?limit=10&offset=20"
        );
        assert_eq!(page.total, 25);
        assert_eq!(page.data.len(), 2);
    }

    #[tokio::test]
    async fn update_narrows_to_mutable_fields() {
        let transport = MockTransport::new();
        transport.push_json(user_json(3));
        let client = client(&transport);

        let update = UpdateUser {
            full_name: Some("New Name".to_string()),
            is_active: Some(false),
            ..Default::default()
        };
        UsersService::new(&client).update("3", &update).await.unwrap();

        let sent = &transport.requests()[0];
        assert_eq!(sent.method, Method::Put);
        assert_eq!(sent.url, "http://localhost:3001/users/3");
        let body = sent.body_json().unwrap();
        let keys: Vec<&String> = body.as_object().unwrap().keys().collect();
        assert_eq!(keys, ["fullName", "isActive"]);
    }

    #[tokio::test]
    async fn remove_hits_the_resource() {
        let transport = MockTransport::new();
        transport.push_status(204, json!({}));
        let client = client(&transport);

        UsersService::new(&client).remove("9").await.unwrap();
        assert_eq!(transport.requests()[0].method, Method::Delete);
        assert_eq!(transport.requests()[0].url, "http://localhost:3001/users/9");
    }
}
