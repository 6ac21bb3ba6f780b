//! Assets, incomes and liabilities.
//!
//! The three collections share one record shape and one service; an
//! [`ItemKind`] picks the endpoint. Amount coercion already happened in
//! the model layer by the time values come out of here.

use serde::Serialize;

use crate::error::ApiError;
use crate::http::{ApiClient, Transport};
use crate::models::{ItemSource, LineItem};
use crate::pagination::{sweep_pages, PageQuery, Paginated};
use crate::token::TokenStore;

use super::list_path;

/// Window size for full-collection sweeps (totals, search mode).
const SWEEP_PAGE_SIZE: usize = 50;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ItemKind {
    Asset,
    Income,
    Liability,
}

impl ItemKind {
    pub fn endpoint(self) -> &'static str {
        match self {
            Self::Asset => "/assets",
            Self::Income => "/incomes",
            Self::Liability => "/liabilities",
        }
    }

    /// Section heading for the declaration detail tabs.
    pub fn plural_label(self) -> &'static str {
        match self {
            Self::Asset => "Assets",
            Self::Income => "Income",
            Self::Liability => "Liabilities",
        }
    }

    /// Noun used in dialog titles and confirmation prompts.
    pub fn singular_label(self) -> &'static str {
        match self {
            Self::Asset => "asset",
            Self::Income => "income item",
            Self::Liability => "liability",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateLineItem {
    pub declaration_id: String,
    pub concept: String,
    pub amount: f64,
    pub source: ItemSource,
}

/// Mutable subset of a line item. The owning declaration and the data
/// source are fixed at creation; building an update from a full record
/// strips them, so a caller can never smuggle them into the request body.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateLineItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub concept: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
}

impl From<&LineItem> for UpdateLineItem {
    fn from(item: &LineItem) -> Self {
        Self {
            concept: Some(item.concept.clone()),
            amount: Some(item.amount),
        }
    }
}

pub struct LineItemsService<'a, T: Transport, S: TokenStore> {
    client: &'a ApiClient<T, S>,
    kind: ItemKind,
}

impl<'a, T: Transport, S: TokenStore> LineItemsService<'a, T, S> {
    pub fn new(client: &'a ApiClient<T, S>, kind: ItemKind) -> Self {
        Self { client, kind }
    }

    pub fn kind(&self) -> ItemKind {
        self.kind
    }

    /// One page of items, optionally restricted to one declaration.
    pub async fn find_all_paginated(
        &self,
        page: Option<PageQuery>,
        declaration_id: Option<&str>,
    ) -> Result<Paginated<LineItem>, ApiError> {
        let filter = declaration_id.map(|id| ("declarationId", id));
        self.client
            .get(&list_path(self.kind.endpoint(), page, filter))
            .await
    }

    pub async fn find_all(
        &self,
        page: Option<PageQuery>,
        declaration_id: Option<&str>,
    ) -> Result<Vec<LineItem>, ApiError> {
        Ok(self.find_all_paginated(page, declaration_id).await?.data)
    }

    pub async fn find_one(&self, id: &str) -> Result<LineItem, ApiError> {
        self.client
            .get(&format!("{}/{id}", self.kind.endpoint()))
            .await
    }

    pub async fn create(&self, data: &CreateLineItem) -> Result<LineItem, ApiError> {
        self.client.post(self.kind.endpoint(), data).await
    }

    pub async fn update(&self, id: &str, update: &UpdateLineItem) -> Result<LineItem, ApiError> {
        self.client
            .put(&format!("{}/{id}", self.kind.endpoint()), update)
            .await
    }

    pub async fn remove(&self, id: &str) -> Result<(), ApiError> {
        self.client
            .delete(&format!("{}/{id}", self.kind.endpoint()))
            .await
    }

    /// Every item of one declaration, across all pages.
    pub async fn fetch_all(&self, declaration_id: &str) -> Result<Vec<LineItem>, ApiError> {
        let service = &*self;
        sweep_pages(SWEEP_PAGE_SIZE, move |query| {
            service.find_all_paginated(Some(query), Some(declaration_id))
        })
        .await
    }

    /// Sum of `amount` over the whole collection for one declaration.
    pub async fn total_amount(&self, declaration_id: &str) -> Result<f64, ApiError> {
        let items = self.fetch_all(declaration_id).await?;
        Ok(items.iter().map(|item| item.amount).sum())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::config::ApiConfig;
    use crate::http::{Method, MockTransport};
    use crate::token::MemoryTokenStore;

    fn client(transport: &MockTransport) -> ApiClient<MockTransport, MemoryTokenStore> {
        ApiClient::new(
            ApiConfig::default(),
            transport.clone(),
            MemoryTokenStore::with_token("t"),
        )
    }

    fn item_json(id: &str, amount: serde_json::Value) -> serde_json::Value {
        json!({
            "id": id,
            "declarationId": "d1",
            "concept": "Apartment",
            "amount": amount,
            "source": "manual"
        })
    }

    #[tokio::test]
    async fn each_kind_owns_its_endpoint() {
        for (kind, expected) in [
            (ItemKind::Asset, "/assets"),
            (ItemKind::Income, "/incomes"),
            (ItemKind::Liability, "/liabilities"),
        ] {
            let transport = MockTransport::new();
            transport.push_json(json!({"data": [], "total": 0, "limit": 5, "offset": 0}));
            let client = client(&transport);

            LineItemsService::new(&client, kind)
                .find_all_paginated(Some(PageQuery::first(5)), Some("d1"))
                .await
                .unwrap();

            assert_eq!(
                transport.requests()[0].url,
                format!("http://localhost:3001{expected}?limit=5&offset=0&declarationId=d1")
            );
        }
    }

    #[tokio::test]
    async fn update_body_contains_only_mutable_fields() {
        let transport = MockTransport::new();
        transport.push_json(item_json("a1", json!(120.0)));
        let client = client(&transport);

        // Start from a full record, declarationId and source present, and
        // verify neither reaches the wire.
        let full: LineItem = serde_json::from_value(item_json("a1", json!("120"))).unwrap();
        let update = UpdateLineItem::from(&full);

        LineItemsService::new(&client, ItemKind::Asset)
            .update("a1", &update)
            .await
            .unwrap();

        let sent = &transport.requests()[0];
        assert_eq!(sent.method, Method::Put);
        let body = sent.body_json().unwrap();
        let keys: Vec<&String> = body.as_object().unwrap().keys().collect();
        assert_eq!(keys, ["amount", "concept"]);
        assert_eq!(body["concept"], json!("Apartment"));
        assert_eq!(body["amount"], json!(120.0));
    }

    #[tokio::test]
    async fn string_amounts_are_numbers_by_the_time_they_leave() {
        let transport = MockTransport::new();
        transport.push_json(json!({
            "data": [item_json("a1", json!("350000000"))],
            "total": 1,
            "limit": 50,
            "offset": 0
        }));
        let client = client(&transport);

        let items = LineItemsService::new(&client, ItemKind::Asset)
            .find_all(None, Some("d1"))
            .await
            .unwrap();
        assert_eq!(items[0].amount, 350_000_000.0);
    }

    #[tokio::test]
    async fn total_sums_across_pages_and_coerces() {
        let transport = MockTransport::new();
        // Two pages of 50; amounts mix strings and numbers.
        let first: Vec<_> = (0..50).map(|i| item_json(&format!("a{i}"), json!("10"))).collect();
        let second = vec![item_json("a50", json!(5.5)), item_json("a51", json!("4.5"))];
        transport.push_json(json!({"data": first, "total": 52, "limit": 50, "offset": 0}));
        transport.push_json(json!({"data": second, "total": 52, "limit": 50, "offset": 50}));
        let client = client(&transport);

        let total = LineItemsService::new(&client, ItemKind::Liability)
            .total_amount("d1")
            .await
            .unwrap();
        assert_eq!(total, 510.0);
        assert_eq!(transport.requests().len(), 2);
    }

    #[tokio::test]
    async fn declaration_flow_totals_a_string_amount_asset() {
        // Create a declaration, add an asset whose amount arrives as a
        // string, list the assets back, and total them.
        let transport = MockTransport::new();
        transport.push_status(
            201,
            json!({"id": "d9", "userId": "u1", "taxableYear": 2024, "status": "PENDING"}),
        );
        transport.push_status(201, item_json("a1", json!("350000000")));
        transport.push_json(json!({
            "data": [item_json("a1", json!("350000000"))],
            "total": 1,
            "limit": 50,
            "offset": 0
        }));
        let client = client(&transport);

        let declaration = crate::services::declarations::DeclarationsService::new(&client)
            .create(&crate::services::declarations::CreateDeclaration::new(
                "u1", 2024, None,
            ))
            .await
            .unwrap();
        assert_eq!(declaration.taxable_year, 2024);

        let assets = LineItemsService::new(&client, ItemKind::Asset);
        let created = assets
            .create(&CreateLineItem {
                declaration_id: declaration.id.clone(),
                concept: "Apartment".to_string(),
                amount: 350_000_000.0,
                source: ItemSource::Manual,
            })
            .await
            .unwrap();
        assert_eq!(created.amount, 350_000_000.0);

        let total = assets.total_amount(&declaration.id).await.unwrap();
        assert_eq!(total, 350_000_000.0);
    }
}
