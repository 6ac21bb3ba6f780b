//! # HTTP client: the single chokepoint for backend traffic
//!
//! Every network call the application makes goes through
//! [`ApiClient::request`], which owns the cross-cutting concerns: resolving
//! the full URL, attaching the bearer token, parsing JSON bodies, error
//! normalization, and the global 401 session teardown.
//!
//! The wire itself sits behind the [`Transport`] trait so the same client
//! runs against browser `fetch` in production ([`FetchTransport`]) and a
//! scripted queue in the test suite ([`MockTransport`]).

use std::fmt;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::token::TokenStore;

/// The login endpoint is excluded from the global 401 handling: a failed
/// credential attempt must not tear down an existing session or bounce the
/// user off the login form.
pub const LOGIN_ENDPOINT: &str = "/auth/login";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An outgoing request as handed to the transport.
#[derive(Clone, Debug, PartialEq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl HttpRequest {
    /// Case-insensitive header lookup, mostly for test assertions.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// The request body parsed as JSON, for test assertions.
    pub fn body_json(&self) -> Option<Value> {
        serde_json::from_str(self.body.as_deref()?).ok()
    }
}

/// A raw response as produced by the transport.
#[derive(Clone, Debug, PartialEq)]
pub struct HttpResponse {
    pub status: u16,
    pub status_text: String,
    pub content_type: Option<String>,
    pub body: String,
}

impl HttpResponse {
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// A JSON response with the given status.
    pub fn json(status: u16, body: Value) -> Self {
        Self {
            status,
            status_text: status_text(status).to_string(),
            content_type: Some("application/json; charset=utf-8".to_string()),
            body: body.to_string(),
        }
    }

    /// A bodyless response (no content type).
    pub fn empty(status: u16) -> Self {
        Self {
            status,
            status_text: status_text(status).to_string(),
            content_type: None,
            body: String::new(),
        }
    }
}

fn status_text(status: u16) -> &'static str {
    match status {
        200 => "OK",
        201 => "Created",
        204 => "No Content",
        400 => "Bad Request",
        401 => "Unauthorized",
        403 => "Forbidden",
        404 => "Not Found",
        409 => "Conflict",
        422 => "Unprocessable Entity",
        500 => "Internal Server Error",
        _ => "",
    }
}

#[derive(Clone, Debug, PartialEq, Error)]
pub enum TransportError {
    /// The request never reached the server, or the connection dropped
    /// before a response existed.
    #[error("{0}")]
    Network(String),
    /// The configured request timeout elapsed.
    #[error("request timed out")]
    Timeout,
}

/// The wire. One implementation per platform, plus the scripted one for
/// tests.
pub trait Transport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError>;
}

/// Browser transport: `fetch` via gloo, raced against the configured
/// timeout.
#[cfg(target_arch = "wasm32")]
#[derive(Clone, Debug)]
pub struct FetchTransport {
    timeout_ms: u32,
}

#[cfg(target_arch = "wasm32")]
impl FetchTransport {
    pub fn new(timeout_ms: u32) -> Self {
        Self { timeout_ms }
    }
}

#[cfg(target_arch = "wasm32")]
impl Transport for FetchTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        use futures::future::{select, Either};
        use gloo_net::http::Request;

        let mut builder = match request.method {
            Method::Get => Request::get(&request.url),
            Method::Post => Request::post(&request.url),
            Method::Put => Request::put(&request.url),
            Method::Patch => Request::patch(&request.url),
            Method::Delete => Request::delete(&request.url),
        };
        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }
        let ready = match request.body {
            Some(body) => builder
                .body(body)
                .map_err(|e| TransportError::Network(e.to_string()))?,
            None => builder
                .build()
                .map_err(|e| TransportError::Network(e.to_string()))?,
        };

        let timeout = gloo_timers::future::sleep(std::time::Duration::from_millis(
            u64::from(self.timeout_ms),
        ));
        let response = match select(Box::pin(ready.send()), Box::pin(timeout)).await {
            Either::Left((result, _)) => {
                result.map_err(|e| TransportError::Network(e.to_string()))?
            }
            Either::Right(_) => return Err(TransportError::Timeout),
        };

        let body = response.text().await.unwrap_or_default();
        Ok(HttpResponse {
            status: response.status(),
            status_text: response.status_text(),
            content_type: response.headers().get("content-type"),
            body,
        })
    }
}

/// Scripted transport for tests and non-browser builds.
///
/// Responses are served in FIFO order and every outgoing request is
/// recorded, so tests can assert on the traffic the client produced.
#[derive(Clone, Debug, Default)]
pub struct MockTransport {
    responses: std::sync::Arc<std::sync::Mutex<std::collections::VecDeque<HttpResponse>>>,
    requests: std::sync::Arc<std::sync::Mutex<Vec<HttpRequest>>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_response(&self, response: HttpResponse) {
        self.responses.lock().unwrap().push_back(response);
    }

    /// Queue a 200 response with a JSON body.
    pub fn push_json(&self, body: Value) {
        self.push_response(HttpResponse::json(200, body));
    }

    /// Queue a JSON response with an explicit status.
    pub fn push_status(&self, status: u16, body: Value) {
        self.push_response(HttpResponse::json(status, body));
    }

    /// Snapshot of every request sent so far.
    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl Transport for MockTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        self.requests.lock().unwrap().push(request);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| TransportError::Network("no scripted response".to_string()))
    }
}

/// Token-aware HTTP client wrapping a [`Transport`].
pub struct ApiClient<T: Transport, S: TokenStore> {
    config: ApiConfig,
    transport: T,
    tokens: S,
}

impl<T: Transport, S: TokenStore> ApiClient<T, S> {
    pub fn new(config: ApiConfig, transport: T, tokens: S) -> Self {
        Self {
            config,
            transport,
            tokens,
        }
    }

    pub fn auth_token(&self) -> Option<String> {
        self.tokens.get()
    }

    /// Store the session token. The auth flow calls this explicitly,
    /// independent of the automatic teardown on 401.
    pub fn set_auth_token(&self, token: &str) {
        self.tokens.set(token);
    }

    pub fn clear_auth_token(&self) {
        self.tokens.clear();
    }

    /// Issue a request and normalize the outcome.
    ///
    /// Successful JSON responses yield their parsed body; successful
    /// non-JSON responses yield an empty object (they carry no usable
    /// payload in this system). Everything else becomes an [`ApiError`].
    pub async fn request(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<Value>,
    ) -> Result<Value, ApiError> {
        let url = format!("{}{}", self.config.base_url, endpoint);
        let mut headers = vec![(
            "Content-Type".to_string(),
            "application/json".to_string(),
        )];
        if let Some(token) = self.tokens.get() {
            headers.push(("Authorization".to_string(), format!("Bearer {token}")));
        }
        let request = HttpRequest {
            method,
            url,
            headers,
            body: body.map(|v| v.to_string()),
        };

        tracing::debug!(%endpoint, method = %method, "api request");
        let response = match self.transport.send(request).await {
            Ok(response) => response,
            Err(err) => {
                tracing::error!(%endpoint, error = %err, "transport failure");
                return Err(ApiError::network(err.to_string()));
            }
        };

        if !response.ok() {
            if response.status == 401 && !endpoint.starts_with(LOGIN_ENDPOINT) {
                // Expired or revoked token: tear the session down globally.
                self.tokens.clear();
                redirect_to_login();
            }
            let err = ApiError::from_response(response.status, &response.body, &response.status_text);
            tracing::warn!(%endpoint, status = response.status, message = %err.message, "api error");
            return Err(err);
        }

        let is_json = response
            .content_type
            .as_deref()
            .is_some_and(|ct| ct.contains("application/json"));
        if !is_json {
            return Ok(Value::Object(serde_json::Map::new()));
        }
        serde_json::from_str(&response.body)
            .map_err(|e| ApiError::network(format!("invalid JSON response: {e}")))
    }

    pub async fn get<R: DeserializeOwned>(&self, endpoint: &str) -> Result<R, ApiError> {
        decode(self.request(Method::Get, endpoint, None).await?)
    }

    pub async fn post<B: Serialize, R: DeserializeOwned>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> Result<R, ApiError> {
        decode(
            self.request(Method::Post, endpoint, Some(encode(body)?))
                .await?,
        )
    }

    pub async fn put<B: Serialize, R: DeserializeOwned>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> Result<R, ApiError> {
        decode(
            self.request(Method::Put, endpoint, Some(encode(body)?))
                .await?,
        )
    }

    pub async fn patch<B: Serialize, R: DeserializeOwned>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> Result<R, ApiError> {
        decode(
            self.request(Method::Patch, endpoint, Some(encode(body)?))
                .await?,
        )
    }

    /// DELETE discards the response body.
    pub async fn delete(&self, endpoint: &str) -> Result<(), ApiError> {
        self.request(Method::Delete, endpoint, None).await.map(|_| ())
    }
}

fn encode<B: Serialize>(body: &B) -> Result<Value, ApiError> {
    serde_json::to_value(body).map_err(|e| ApiError::network(format!("unencodable request: {e}")))
}

fn decode<R: DeserializeOwned>(value: Value) -> Result<R, ApiError> {
    serde_json::from_value(value)
        .map_err(|e| ApiError::network(format!("unexpected response shape: {e}")))
}

/// Hard navigation to the login page after a global session teardown.
fn redirect_to_login() {
    #[cfg(target_arch = "wasm32")]
    if let Some(window) = web_sys::window() {
        let _ = window.location().set_href("/login");
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::token::MemoryTokenStore;

    fn client_with(
        transport: &MockTransport,
        tokens: &MemoryTokenStore,
    ) -> ApiClient<MockTransport, MemoryTokenStore> {
        ApiClient::new(ApiConfig::default(), transport.clone(), tokens.clone())
    }

    #[tokio::test]
    async fn attaches_bearer_token_when_present() {
        let transport = MockTransport::new();
        transport.push_json(json!({"ok": true}));
        let tokens = MemoryTokenStore::with_token("tok-1");
        let client = client_with(&transport, &tokens);

        let _: Value = client.get("/users").await.unwrap();

        let sent = transport.requests();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].header("Authorization"), Some("Bearer tok-1"));
        assert_eq!(sent[0].url, "http://localhost:3001/users");
    }

    #[tokio::test]
    async fn no_auth_header_without_token() {
        let transport = MockTransport::new();
        transport.push_json(json!({}));
        let client = client_with(&transport, &MemoryTokenStore::new());

        let _: Value = client.get("/users").await.unwrap();

        assert_eq!(transport.requests()[0].header("Authorization"), None);
    }

    #[tokio::test]
    async fn unauthorized_clears_token_except_for_login() {
        // Expired token on an authenticated call: token must go away.
        let transport = MockTransport::new();
        transport.push_status(401, json!({"message": "token expired"}));
        let tokens = MemoryTokenStore::with_token("stale");
        let client = client_with(&transport, &tokens);

        let err = client.get::<Value>("/users").await.unwrap_err();
        assert!(err.is_unauthorized());
        assert_eq!(tokens.get(), None);

        // Bad credentials on the login endpoint: existing token survives.
        let transport = MockTransport::new();
        transport.push_status(401, json!({"message": "bad credentials"}));
        let tokens = MemoryTokenStore::with_token("still-valid");
        let client = client_with(&transport, &tokens);

        let err = client
            .post::<_, Value>(LOGIN_ENDPOINT, &json!({"documentNumber": "1", "password": "x"}))
            .await
            .unwrap_err();
        assert!(err.is_unauthorized());
        assert_eq!(tokens.get(), Some("still-valid".to_string()));
    }

    #[tokio::test]
    async fn transport_failure_is_status_zero() {
        let transport = MockTransport::new(); // nothing queued
        let client = client_with(&transport, &MemoryTokenStore::new());

        let err = client.get::<Value>("/users").await.unwrap_err();
        assert!(err.is_network());
        assert_eq!(err.status, 0);
    }

    #[tokio::test]
    async fn non_json_success_yields_empty_object() {
        let transport = MockTransport::new();
        transport.push_response(HttpResponse::empty(204));
        let client = client_with(&transport, &MemoryTokenStore::new());

        let value = client.request(Method::Delete, "/users/9", None).await.unwrap();
        assert_eq!(value, json!({}));
    }

    #[tokio::test]
    async fn error_body_is_normalized() {
        let transport = MockTransport::new();
        transport.push_status(400, json!({"message": ["first problem", "second"]}));
        let client = client_with(&transport, &MemoryTokenStore::new());

        let err = client.get::<Value>("/declarations").await.unwrap_err();
        assert_eq!(err.status, 400);
        assert_eq!(err.message, "first problem");
    }

    #[tokio::test]
    async fn serializes_body_and_content_type() {
        let transport = MockTransport::new();
        transport.push_json(json!({"id": "1"}));
        let client = client_with(&transport, &MemoryTokenStore::new());

        let _: Value = client
            .post("/declarations", &json!({"taxableYear": 2024}))
            .await
            .unwrap();

        let sent = transport.requests();
        assert_eq!(sent[0].header("Content-Type"), Some("application/json"));
        assert_eq!(sent[0].body_json(), Some(json!({"taxableYear": 2024})));
    }
}
