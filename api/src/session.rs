//! Client session state and the startup restore path.
//!
//! The session is an explicit value handed around through context, not a
//! global. `hydrated` starts out `false` and flips once restoration from
//! durable storage has finished. Route guards wait for it, otherwise a
//! page refresh would flash-redirect authenticated users to the login
//! page while the token is still being read back.

use crate::http::Transport;
use crate::models::User;
use crate::services::auth::AuthService;
use crate::token::TokenStore;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Session {
    pub user: Option<User>,
    pub token: Option<String>,
    pub is_authenticated: bool,
    /// True once restoration from durable storage has finished.
    pub hydrated: bool,
}

impl Session {
    /// A finished, signed-out session.
    pub fn logged_out() -> Self {
        Self {
            hydrated: true,
            ..Self::default()
        }
    }

    pub fn authenticated(user: User, token: String) -> Self {
        Self {
            user: Some(user),
            token: Some(token),
            is_authenticated: true,
            hydrated: true,
        }
    }

    pub fn is_admin(&self) -> bool {
        self.user.as_ref().is_some_and(|u| u.role.is_admin())
    }

    pub fn login(&mut self, user: User, token: String) {
        *self = Self::authenticated(user, token);
    }

    pub fn logout(&mut self) {
        *self = Self::logged_out();
    }
}

/// Restore a session from durable storage on startup.
///
/// Decision table:
/// - no stored token → logged out, whatever user object may be cached (a
///   cached user without a token is stale);
/// - token and a cached user → authenticated without a round-trip;
/// - token only → verified against the backend; an invalid or expired
///   token clears everything.
pub async fn initialize<T: Transport, S: TokenStore>(
    cached_user: Option<User>,
    auth: &AuthService<'_, T, S>,
) -> Session {
    let Some(token) = auth.client().auth_token() else {
        return Session::logged_out();
    };

    if let Some(user) = cached_user {
        return Session::authenticated(user, token);
    }

    match auth.get_current_user().await {
        Ok(user) => Session::authenticated(user, token),
        Err(err) => {
            tracing::warn!(error = %err, "session restore failed");
            auth.client().clear_auth_token();
            Session::logged_out()
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::config::ApiConfig;
    use crate::http::{ApiClient, MockTransport};
    use crate::models::UserRole;
    use crate::token::MemoryTokenStore;

    fn user() -> User {
        serde_json::from_value(json!({
            "id": "u1",
            "documentNumber": "10203040",
            "fullName": "Ana Rojas",
            "email": "ana@example.com",
            "phoneNumber": "3001234567",
            "role": "admin"
        }))
        .unwrap()
    }

    #[tokio::test]
    async fn no_token_means_logged_out_even_with_cached_user() {
        let client = ApiClient::new(
            ApiConfig::default(),
            MockTransport::new(),
            MemoryTokenStore::new(),
        );

        let session = initialize(Some(user()), &AuthService::new(&client)).await;
        assert!(session.hydrated);
        assert!(!session.is_authenticated);
        assert!(session.user.is_none());
    }

    #[tokio::test]
    async fn cached_user_restores_without_a_round_trip() {
        let transport = MockTransport::new();
        let client = ApiClient::new(
            ApiConfig::default(),
            transport.clone(),
            MemoryTokenStore::with_token("tok"),
        );

        let session = initialize(Some(user()), &AuthService::new(&client)).await;
        assert!(session.is_authenticated);
        assert!(session.is_admin());
        assert_eq!(session.token.as_deref(), Some("tok"));
        assert!(transport.requests().is_empty());
    }

    #[tokio::test]
    async fn bare_token_is_verified() {
        let transport = MockTransport::new();
        transport.push_json(json!({
            "id": "u1",
            "documentNumber": "10203040",
            "fullName": "Ana Rojas",
            "email": "ana@example.com",
            "phoneNumber": "3001234567",
            "role": "user"
        }));
        let client = ApiClient::new(
            ApiConfig::default(),
            transport.clone(),
            MemoryTokenStore::with_token("tok"),
        );

        let session = initialize(None, &AuthService::new(&client)).await;
        assert!(session.is_authenticated);
        assert_eq!(session.user.unwrap().role, UserRole::User);
        assert_eq!(
            transport.requests()[0].url,
            "http://localhost:3001/auth/check-auth-status"
        );
    }

    #[tokio::test]
    async fn invalid_token_clears_everything() {
        let transport = MockTransport::new();
        transport.push_status(401, json!({"message": "token expired"}));
        let tokens = MemoryTokenStore::with_token("stale");
        let client = ApiClient::new(ApiConfig::default(), transport, tokens.clone());

        let session = initialize(None, &AuthService::new(&client)).await;
        assert!(session.hydrated);
        assert!(!session.is_authenticated);
        assert_eq!(tokens.get(), None);
    }
}
