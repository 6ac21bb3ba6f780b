//! # Normalized API errors
//!
//! Every failure that leaves this crate is an [`ApiError`], whatever went
//! wrong underneath:
//!
//! | Status | Meaning |
//! |--------|---------|
//! | `0` | Transport failure: the request never produced a response (connection refused, timeout). Retryable. |
//! | `401` | Authentication failure. The client tears the session down globally unless the failing call was the login attempt itself. |
//! | other 4xx | Validation or business error; the backend's message is surfaced inline on the originating form. |
//! | `404` | Not found; detail pages render an explicit empty state. |
//!
//! Services never swallow errors; they propagate the normalized value to
//! the UI layer, which owns presentation and retry decisions.

use std::collections::HashMap;

use serde_json::Value;
use thiserror::Error;

/// Normalized error value produced by [`crate::http::ApiClient`].
#[derive(Clone, Debug, PartialEq, Error)]
#[error("{message} (status {status})")]
pub struct ApiError {
    /// Human-readable message, already reduced to a single string: when the
    /// backend sends an array of messages, the first one wins.
    pub message: String,
    /// HTTP status code, or 0 when no response exists.
    pub status: u16,
    /// Per-field validation messages, when the backend supplies them.
    pub field_errors: Option<HashMap<String, Vec<String>>>,
}

impl ApiError {
    /// A transport-level failure: the server was never heard from.
    pub fn network(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status: 0,
            field_errors: None,
        }
    }

    pub fn is_network(&self) -> bool {
        self.status == 0
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status == 401
    }

    pub fn is_not_found(&self) -> bool {
        self.status == 404
    }

    /// Build an error from a non-2xx response body.
    ///
    /// The body is expected to be JSON shaped like `{ message, errors? }`
    /// (with `error` as an accepted spelling, and `message` possibly an
    /// array of strings). Anything unparseable falls back to the HTTP
    /// status text.
    pub(crate) fn from_response(status: u16, body: &str, status_text: &str) -> Self {
        let parsed: Option<Value> = serde_json::from_str(body).ok();
        let message = parsed
            .as_ref()
            .and_then(|v| first_message(v.get("message")).or_else(|| first_message(v.get("error"))))
            .unwrap_or_else(|| {
                if status_text.is_empty() {
                    "An error occurred".to_string()
                } else {
                    status_text.to_string()
                }
            });
        let field_errors = parsed.as_ref().and_then(|v| field_errors(v.get("errors")?));
        Self {
            message,
            status,
            field_errors,
        }
    }
}

/// Reduce a `message` value to one string: plain strings pass through,
/// arrays contribute their first string element.
fn first_message(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(s) => Some(s.clone()),
        Value::Array(items) => items.iter().find_map(|i| i.as_str().map(str::to_string)),
        _ => None,
    }
}

fn field_errors(value: &Value) -> Option<HashMap<String, Vec<String>>> {
    let object = value.as_object()?;
    let mut out = HashMap::new();
    for (field, messages) in object {
        let list = match messages {
            Value::String(s) => vec![s.clone()],
            Value::Array(items) => items
                .iter()
                .filter_map(|i| i.as_str().map(str::to_string))
                .collect(),
            _ => continue,
        };
        out.insert(field.clone(), list);
    }
    Some(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_taken_from_body() {
        let err = ApiError::from_response(400, r#"{"message":"Invalid year"}"#, "Bad Request");
        assert_eq!(err.message, "Invalid year");
        assert_eq!(err.status, 400);
        assert!(err.field_errors.is_none());
    }

    #[test]
    fn array_message_takes_first_element() {
        let body = r#"{"message":["concept must be longer than 3 characters","amount must be positive"]}"#;
        let err = ApiError::from_response(400, body, "Bad Request");
        assert_eq!(err.message, "concept must be longer than 3 characters");
    }

    #[test]
    fn falls_back_to_status_text() {
        let err = ApiError::from_response(502, "<html>bad gateway</html>", "Bad Gateway");
        assert_eq!(err.message, "Bad Gateway");

        let err = ApiError::from_response(500, "", "");
        assert_eq!(err.message, "An error occurred");
    }

    #[test]
    fn error_spelling_accepted() {
        let err = ApiError::from_response(409, r#"{"error":"duplicate document number"}"#, "Conflict");
        assert_eq!(err.message, "duplicate document number");
    }

    #[test]
    fn field_errors_parsed() {
        let body = r#"{"message":"Validation failed","errors":{"email":["invalid email"],"phoneNumber":"too short"}}"#;
        let err = ApiError::from_response(422, body, "Unprocessable Entity");
        let fields = err.field_errors.expect("field errors");
        assert_eq!(fields["email"], vec!["invalid email"]);
        assert_eq!(fields["phoneNumber"], vec!["too short"]);
    }

    #[test]
    fn taxonomy_predicates() {
        assert!(ApiError::network("boom").is_network());
        assert!(ApiError::from_response(401, "{}", "Unauthorized").is_unauthorized());
        assert!(ApiError::from_response(404, "{}", "Not Found").is_not_found());
    }
}
