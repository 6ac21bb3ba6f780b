//! Shared presentational components. No data access happens in here.

mod badge;
mod card;
mod controls;
mod dialog;
mod feedback;
mod pagination;

pub use badge::{SourceBadge, StatusBadge};
pub use card::{Card, StatCard};
pub use controls::{Button, ButtonVariant, Field, SearchBox};
pub use dialog::{ConfirmDialog, ModalOverlay};
pub use feedback::{EmptyState, ErrorNotice, Loader, NotFoundNotice};
pub use pagination::{page_links, Pagination};
