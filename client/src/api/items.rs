//! Item catalog endpoints

use rust_decimal::Decimal;
use serde::Serialize;

use shared::models::{Item, ItemInput};
use shared::types::TransactionType;

use super::ApiClient;
use crate::error::ClientResult;

/// Query filters for the item list
#[derive(Debug, Clone, Copy, Default)]
pub struct ItemQuery {
    pub active_only: bool,
    pub item_type: Option<TransactionType>,
}

impl ItemQuery {
    pub fn active() -> Self {
        Self {
            active_only: true,
            item_type: None,
        }
    }

    pub fn active_of_type(item_type: TransactionType) -> Self {
        Self {
            active_only: true,
            item_type: Some(item_type),
        }
    }

    fn params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if self.active_only {
            params.push(("activeOnly", "true".to_string()));
        }
        if let Some(item_type) = self.item_type {
            params.push(("type", item_type.as_str().to_string()));
        }
        params
    }
}

#[derive(Debug, Serialize)]
struct CostUpdate {
    #[serde(rename = "costPerUnit")]
    cost_per_unit: Decimal,
}

pub async fn list(api: &ApiClient, query: &ItemQuery) -> ClientResult<Vec<Item>> {
    api.get_with("/items", &query.params()).await
}

pub async fn create(api: &ApiClient, input: &ItemInput) -> ClientResult<()> {
    api.post("/items", input).await
}

pub async fn update(api: &ApiClient, id: &str, input: &ItemInput) -> ClientResult<()> {
    api.put(&format!("/items/{}", id), input).await
}

pub async fn soft_delete(api: &ApiClient, id: &str) -> ClientResult<()> {
    api.put_empty(&format!("/items/{}/soft-delete", id)).await
}

pub async fn restore(api: &ApiClient, id: &str) -> ClientResult<()> {
    api.put_empty(&format!("/items/{}/restore", id)).await
}

pub async fn update_cost(api: &ApiClient, id: &str, cost_per_unit: Decimal) -> ClientResult<()> {
    api.patch(&format!("/items/{}/cost", id), &CostUpdate { cost_per_unit })
        .await
}
