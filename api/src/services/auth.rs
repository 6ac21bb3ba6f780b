//! Authentication: login, registration, logout, session restore.

use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::http::{ApiClient, Transport, LOGIN_ENDPOINT};
use crate::models::User;
use crate::token::TokenStore;

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Credentials {
    pub document_number: String,
    pub password: String,
}

/// What the login endpoint answers with. The backend sends a partial user
/// alongside the token, but only the token matters here: the full record
/// comes from the follow-up current-user fetch.
#[derive(Debug, Deserialize)]
struct LoginPayload {
    token: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LoginResponse {
    pub user: User,
    pub token: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterUser {
    pub full_name: String,
    pub document_number: String,
    pub email: String,
    pub phone_number: String,
    pub password: String,
}

pub struct AuthService<'a, T: Transport, S: TokenStore> {
    client: &'a ApiClient<T, S>,
}

impl<'a, T: Transport, S: TokenStore> AuthService<'a, T, S> {
    pub fn new(client: &'a ApiClient<T, S>) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &ApiClient<T, S> {
        self.client
    }

    /// Exchange credentials for a token, then fetch the full user record.
    ///
    /// The token is stored *before* the follow-up call, since that call is
    /// itself authenticated. A 401 here surfaces as a credentials error on
    /// the form; the client never tears the session down for the login
    /// endpoint.
    pub async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, ApiError> {
        let payload: LoginPayload = self.client.post(LOGIN_ENDPOINT, credentials).await?;
        self.client.set_auth_token(&payload.token);
        let user = self.get_current_user().await?;
        Ok(LoginResponse {
            user,
            token: payload.token,
        })
    }

    /// The user the stored token belongs to.
    pub async fn get_current_user(&self) -> Result<User, ApiError> {
        self.client.get("/auth/check-auth-status").await
    }

    /// Create an account. The registration response carries a token for
    /// the new user; it is deliberately discarded so that an admin creating a
    /// customer stays logged in as themselves.
    pub async fn register(&self, data: &RegisterUser) -> Result<User, ApiError> {
        self.client.post("/auth/register", data).await
    }

    /// Best-effort server logout; the local token goes away regardless.
    pub async fn logout(&self) {
        if let Err(err) = self
            .client
            .post::<_, serde_json::Value>("/auth/logout", &serde_json::json!({}))
            .await
        {
            tracing::debug!(error = %err, "logout endpoint failed");
        }
        self.client.clear_auth_token();
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::config::ApiConfig;
    use crate::http::MockTransport;
    use crate::token::MemoryTokenStore;

    fn user_json() -> serde_json::Value {
        json!({
            "id": "u1",
            "documentNumber": "10203040",
            "fullName": "Ana Rojas",
            "email": "ana@example.com",
            "phoneNumber": "3001234567",
            "role": "admin",
            "isActive": true
        })
    }

    #[tokio::test]
    async fn login_stores_token_before_user_fetch() {
        let transport = MockTransport::new();
        transport.push_json(json!({
            "id": "u1",
            "documentNumber": "10203040",
            "fullName": "Ana Rojas",
            "token": "fresh-token"
        }));
        transport.push_json(user_json());
        let tokens = MemoryTokenStore::new();
        let client = ApiClient::new(ApiConfig::default(), transport.clone(), tokens.clone());

        let response = AuthService::new(&client)
            .login(&Credentials {
                document_number: "10203040".to_string(),
                password: "secret1".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(response.token, "fresh-token");
        assert_eq!(response.user.full_name, "Ana Rojas");

        let sent = transport.requests();
        assert_eq!(sent.len(), 2);
        // The login call goes out unauthenticated...
        assert_eq!(sent[0].header("Authorization"), None);
        // ...and the current-user follow-up carries the fresh token.
        assert_eq!(sent[1].url, "http://localhost:3001/auth/check-auth-status");
        assert_eq!(sent[1].header("Authorization"), Some("Bearer fresh-token"));
        assert_eq!(tokens.get(), Some("fresh-token".to_string()));
    }

    #[tokio::test]
    async fn failed_login_stores_nothing() {
        let transport = MockTransport::new();
        transport.push_status(401, json!({"message": "Invalid credentials"}));
        let tokens = MemoryTokenStore::new();
        let client = ApiClient::new(ApiConfig::default(), transport.clone(), tokens.clone());

        let err = AuthService::new(&client)
            .login(&Credentials {
                document_number: "10203040".to_string(),
                password: "wrong".to_string(),
            })
            .await
            .unwrap_err();

        assert!(err.is_unauthorized());
        assert_eq!(tokens.get(), None);
    }

    #[tokio::test]
    async fn register_does_not_touch_the_stored_token() {
        let transport = MockTransport::new();
        let mut registered = user_json();
        registered["role"] = json!("user");
        registered["token"] = json!("customer-token");
        transport.push_status(201, registered);
        let tokens = MemoryTokenStore::with_token("admin-token");
        let client = ApiClient::new(ApiConfig::default(), transport.clone(), tokens.clone());

        let user = AuthService::new(&client)
            .register(&RegisterUser {
                full_name: "Ana Rojas".to_string(),
                document_number: "10203040".to_string(),
                email: "ana@example.com".to_string(),
                phone_number: "3001234567".to_string(),
                password: "longenough".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(user.id, "u1");
        assert_eq!(tokens.get(), Some("admin-token".to_string()));
    }

    #[tokio::test]
    async fn logout_clears_token_even_when_the_wire_fails() {
        let transport = MockTransport::new(); // nothing queued: transport error
        let tokens = MemoryTokenStore::with_token("t");
        let client = ApiClient::new(ApiConfig::default(), transport, tokens.clone());

        AuthService::new(&client).logout().await;
        assert_eq!(tokens.get(), None);
    }
}
