//! Shared UI for the ExoTrack workspace: session context, components, and
//! the admin/customer views. Data access goes through the `api` crate;
//! navigation is injected by the entry crate through callbacks.

pub mod components;
pub mod views;

mod client;
pub use client::make_client;

mod session;
pub use session::{complete_login, complete_logout, use_session, SessionProvider};

mod format;
pub use format::{format_amount, format_date, format_date_opt};

pub mod validate;
