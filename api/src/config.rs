//! Client configuration: where the backend lives and how long we wait for it.

/// Backend base URL used when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3001";

const DEFAULT_TIMEOUT_MS: u32 = 10_000;

/// Configuration for [`crate::http::ApiClient`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    /// Base URL every endpoint path is appended to. No trailing slash.
    pub base_url: String,
    /// Per-request timeout. A request that exceeds it surfaces as a
    /// network error (status 0), never as an indefinite hang.
    pub timeout_ms: u32,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}

impl ApiConfig {
    /// Create a config pointing at the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Builder method to override the request timeout.
    pub fn with_timeout(mut self, timeout_ms: u32) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }
}
