//! # ExoTrack API crate: data access and state synchronization
//!
//! Everything between the UI and the ExoTrack REST backend lives here: the
//! HTTP client, the per-resource services, session state, and the
//! list-page controller every paginated view drives.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`config`] | Base URL and request timeout |
//! | [`http`] | `Transport` seam, `ApiClient` (bearer token, error normalization, 401 teardown) |
//! | [`token`] | Durable bearer-token storage (`localStorage` on web, in-memory elsewhere) |
//! | [`models`] | Wire DTOs with enum and amount normalization |
//! | [`pagination`] | The `{data, total, limit, offset}` envelope and the fetch-all-pages sweep |
//! | [`services`] | Users, declarations, line items, auth |
//! | [`session`] | Session value + storage-restore decision path |
//! | [`pager`] | The paginate/search/reload state machine |
//!
//! The crate compiles for `wasm32` (browser `fetch` via [`http::FetchTransport`])
//! and natively (the test suite runs against [`http::MockTransport`]).

pub mod config;
pub mod error;
pub mod http;
pub mod models;
pub mod pager;
pub mod pagination;
pub mod services;
pub mod session;
pub mod token;

pub use config::ApiConfig;
pub use error::ApiError;
#[cfg(target_arch = "wasm32")]
pub use http::FetchTransport;
pub use http::{ApiClient, MockTransport, Transport};
pub use models::{
    Declaration, DeclarationStats, DeclarationStatus, ItemSource, LineItem, RecentActivity, User,
    UserRole, UserStats,
};
pub use pager::ListPager;
pub use pagination::{sweep_pages, PageQuery, Paginated};
pub use session::Session;
pub use token::{MemoryTokenStore, TokenStore};
#[cfg(target_arch = "wasm32")]
pub use token::WebTokenStore;
