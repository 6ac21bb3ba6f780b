//! Concrete API client wiring for the running platform.

use api::http::Transport;
use api::token::TokenStore;
use api::{ApiClient, ApiConfig};

/// Backend base URL, resolvable at build time (`EXOTRACK_API_URL`).
fn config() -> ApiConfig {
    match option_env!("EXOTRACK_API_URL") {
        Some(url) => ApiConfig::new(url),
        None => ApiConfig::default(),
    }
}

/// Build the platform client: browser fetch plus `localStorage` in the web
/// bundle. Non-wasm builds only run tests and tooling, so they get inert
/// mock wiring.
pub fn make_client() -> ApiClient<impl Transport, impl TokenStore> {
    #[cfg(target_arch = "wasm32")]
    {
        let config = config();
        let transport = api::FetchTransport::new(config.timeout_ms);
        ApiClient::new(config, transport, api::WebTokenStore::new())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        ApiClient::new(config(), api::MockTransport::new(), api::MemoryTokenStore::new())
    }
}
