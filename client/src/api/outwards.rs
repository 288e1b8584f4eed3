//! Outward record endpoints (own-scope and admin-scope)

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use shared::models::{OutwardDraft, OutwardRecord};
use shared::types::{TransactionType, Unit};

use super::ApiClient;
use crate::error::ClientResult;

/// Payload for creating an outward record
#[derive(Debug, Clone, Serialize)]
pub struct NewOutward {
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    pub item: String,
    pub vendor: String,
    pub unit: Unit,
    pub quantity: Decimal,
    #[serde(rename = "outwardDate")]
    pub outward_date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remarks: Option<String>,
}

impl NewOutward {
    pub fn from_draft(draft: &OutwardDraft) -> Option<Self> {
        Some(Self {
            transaction_type: draft.transaction_type?,
            item: draft.item_id.clone(),
            vendor: draft.vendor_id.clone(),
            unit: draft.unit?,
            quantity: draft.quantity,
            outward_date: draft.outward_date?,
            remarks: if draft.remarks.trim().is_empty() {
                None
            } else {
                Some(draft.remarks.clone())
            },
        })
    }
}

/// Admin correction of an outward record
#[derive(Debug, Clone, Default, Serialize)]
pub struct AdminOutwardUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remarks: Option<String>,
}

pub async fn my(api: &ApiClient) -> ClientResult<Vec<OutwardRecord>> {
    api.get("/outwards/my").await
}

pub async fn my_by_id(api: &ApiClient, id: &str) -> ClientResult<OutwardRecord> {
    api.get(&format!("/outwards/my/{}", id)).await
}

pub async fn admin(api: &ApiClient) -> ClientResult<Vec<OutwardRecord>> {
    api.get("/outwards/admin").await
}

pub async fn admin_by_id(api: &ApiClient, id: &str) -> ClientResult<OutwardRecord> {
    api.get(&format!("/outwards/admin/{}", id)).await
}

pub async fn create(api: &ApiClient, payload: &NewOutward) -> ClientResult<()> {
    api.post("/outwards", payload).await
}

pub async fn admin_update(
    api: &ApiClient,
    id: &str,
    update: &AdminOutwardUpdate,
) -> ClientResult<()> {
    api.patch(&format!("/outwards/admin/{}", id), update).await
}
