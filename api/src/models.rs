//! # Wire models
//!
//! Typed shapes for everything the backend sends or accepts. Two
//! normalizations happen here, exactly once, so nothing downstream ever
//! sees raw wire values:
//!
//! - **Enums**: the backend has historically used more than one spelling
//!   for roles (`"user"` / `"cliente"`), declaration statuses
//!   (`"PENDING"` / `"borrador"`) and item sources. Each enum accepts the
//!   legacy spellings as serde aliases and serializes one canonical form.
//!   Literal string comparison against these values anywhere else is a
//!   bug.
//! - **Amounts**: monetary values arrive as either a JSON number or a
//!   decimal string. [`LineItem::amount`] is always an `f64` by the time a
//!   value leaves this module, so totals never see a string.
//!
//! Ids and timestamps stay `String`s: these models cross into WASM and
//! are display-only on the client.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserRole {
    #[serde(rename = "admin")]
    Admin,
    #[serde(rename = "user", alias = "cliente")]
    User,
}

impl UserRole {
    pub fn is_admin(self) -> bool {
        matches!(self, Self::Admin)
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Admin => "admin",
            Self::User => "user",
        })
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    /// Unique numeric identity document; immutable once registered.
    pub document_number: String,
    pub full_name: String,
    pub email: String,
    #[serde(default)]
    pub phone_number: String,
    pub role: UserRole,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

fn default_true() -> bool {
    true
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeclarationStatus {
    #[serde(rename = "PENDING", alias = "borrador")]
    Pending,
    #[serde(rename = "COMPLETED", alias = "finalizada")]
    Completed,
}

impl DeclarationStatus {
    /// Display label for badges.
    pub fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Completed => "Completed",
        }
    }
}

impl fmt::Display for DeclarationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Pending => "PENDING",
            Self::Completed => "COMPLETED",
        })
    }
}

/// A yearly tax filing for one customer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Declaration {
    pub id: String,
    pub user_id: String,
    /// Denormalized owner name; not every endpoint includes it.
    #[serde(default)]
    pub user_full_name: Option<String>,
    pub taxable_year: i32,
    pub status: DeclarationStatus,
    /// Accountant's free-text notes.
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Where a line item came from: typed in by the accountant, or imported
/// from an exogenous reconciliation file.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemSource {
    #[serde(rename = "manual", alias = "MANUAL")]
    Manual,
    #[serde(rename = "exogeno", alias = "EXOGENO")]
    Exogeno,
}

impl ItemSource {
    pub fn label(self) -> &'static str {
        match self {
            Self::Manual => "Manual",
            Self::Exogeno => "Exogenous",
        }
    }
}

/// One asset, income or liability row on a declaration. The three
/// collections share this shape; only the endpoint differs.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    pub id: String,
    pub declaration_id: String,
    pub concept: String,
    /// Monetary value. Coerced from number-or-string on the way in.
    #[serde(deserialize_with = "amount::deserialize")]
    pub amount: f64,
    pub source: ItemSource,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

pub(crate) mod amount {
    use serde::{Deserialize, Deserializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(f64),
        Text(String),
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<f64, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Raw::deserialize(deserializer)? {
            Raw::Number(n) => Ok(n),
            Raw::Text(s) => s
                .trim()
                .parse::<f64>()
                .map_err(|_| serde::de::Error::custom(format!("invalid amount: {s:?}"))),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserStats {
    #[serde(default)]
    pub total: usize,
    #[serde(default)]
    pub active: usize,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeclarationStats {
    #[serde(default)]
    pub total: usize,
    #[serde(default)]
    pub pending: usize,
    #[serde(default)]
    pub completed: usize,
}

/// One entry of the dashboard's recent-activity feed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentActivity {
    pub id: String,
    pub user_id: String,
    #[serde(default)]
    pub user_full_name: Option<String>,
    pub taxable_year: i32,
    pub status: DeclarationStatus,
    #[serde(default)]
    pub updated_at: Option<String>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn amount_coerces_decimal_strings() {
        let item: LineItem = serde_json::from_value(json!({
            "id": "a1",
            "declarationId": "d1",
            "concept": "Apartment",
            "amount": "350000000",
            "source": "manual"
        }))
        .unwrap();
        assert_eq!(item.amount, "350000000".parse::<f64>().unwrap());
        assert_eq!(item.amount, 350_000_000.0);
    }

    #[test]
    fn amount_accepts_numbers_and_fractions() {
        let item: LineItem = serde_json::from_value(json!({
            "id": "a1",
            "declarationId": "d1",
            "concept": "Savings",
            "amount": 1250.75,
            "source": "exogeno"
        }))
        .unwrap();
        assert_eq!(item.amount, 1250.75);

        let item: LineItem = serde_json::from_value(json!({
            "id": "a2",
            "declarationId": "d1",
            "concept": "Savings",
            "amount": " 1250.75 ",
            "source": "exogeno"
        }))
        .unwrap();
        assert_eq!(item.amount, 1250.75);
    }

    #[test]
    fn amount_rejects_garbage() {
        let result: Result<LineItem, _> = serde_json::from_value(json!({
            "id": "a1",
            "declarationId": "d1",
            "concept": "Apartment",
            "amount": "lots",
            "source": "manual"
        }));
        assert!(result.is_err());
    }

    #[test]
    fn role_normalizes_legacy_spelling() {
        let user: User = serde_json::from_value(json!({
            "id": "u1",
            "documentNumber": "10203040",
            "fullName": "Ana Rojas",
            "email": "ana@example.com",
            "phoneNumber": "3001234567",
            "role": "cliente"
        }))
        .unwrap();
        assert_eq!(user.role, UserRole::User);
        assert!(user.is_active);

        // Canonical spelling goes back out.
        let value = serde_json::to_value(&user).unwrap();
        assert_eq!(value["role"], json!("user"));
    }

    #[test]
    fn status_normalizes_legacy_spelling() {
        let declaration: Declaration = serde_json::from_value(json!({
            "id": "d1",
            "userId": "u1",
            "taxableYear": 2024,
            "status": "borrador"
        }))
        .unwrap();
        assert_eq!(declaration.status, DeclarationStatus::Pending);

        let value = serde_json::to_value(&declaration).unwrap();
        assert_eq!(value["status"], json!("PENDING"));
    }

    #[test]
    fn source_accepts_both_cases() {
        let manual: ItemSource = serde_json::from_value(json!("MANUAL")).unwrap();
        assert_eq!(manual, ItemSource::Manual);
        let exogeno: ItemSource = serde_json::from_value(json!("exogeno")).unwrap();
        assert_eq!(exogeno, ItemSource::Exogeno);
    }
}
