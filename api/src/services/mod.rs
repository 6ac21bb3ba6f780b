//! # Resource services
//!
//! One module per backend resource, each a thin typed wrapper around
//! [`crate::http::ApiClient`]:
//!
//! | Module | Resource |
//! |--------|----------|
//! | [`auth`] | Login, registration, logout, session restore |
//! | [`users`] | Customer records (`/users`) |
//! | [`declarations`] | Yearly tax declarations (`/declarations`) |
//! | [`line_items`] | Assets, incomes and liabilities (one service over three endpoints) |
//!
//! Services own the request/response shapes: pagination parameters, update
//! payload narrowing (request DTOs carry only the fields the backend
//! mutates), and they inherit the model layer's enum/amount normalization.
//! They never swallow errors.

pub mod auth;
pub mod declarations;
pub mod line_items;
pub mod users;

use std::fmt::Write;

use crate::pagination::PageQuery;

/// Build a list path with optional `limit`/`offset` and one optional
/// parent filter, e.g. `/assets?limit=10&offset=20&declarationId=d1`.
pub(crate) fn list_path(base: &str, page: Option<PageQuery>, filter: Option<(&str, &str)>) -> String {
    let mut path = base.to_string();
    let mut separator = '?';
    if let Some(query) = page {
        let _ = write!(
            path,
            "{separator}limit={}&offset={}",
            query.limit, query.offset
        );
        separator = '&';
    }
    if let Some((key, value)) = filter {
        let _ = write!(path, "{separator}{key}={value}");
    }
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_path_variants() {
        assert_eq!(list_path("/users", None, None), "/users");
        assert_eq!(
            list_path("/users", Some(PageQuery::new(10, 20)), None),
            "/users?limit=10&offset=20"
        );
        assert_eq!(
            list_path("/incomes", None, Some(("declarationId", "d1"))),
            "/incomes?declarationId=d1"
        );
        assert_eq!(
            list_path("/incomes", Some(PageQuery::first(5)), Some(("declarationId", "d1"))),
            "/incomes?limit=5&offset=0&declarationId=d1"
        );
    }
}
