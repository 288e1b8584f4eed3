//! Inward record endpoints (own-scope and admin-scope)

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use shared::models::{InwardDraft, InwardRecord};
use shared::types::{TransactionType, Unit};
use shared::validation::quantity_discrepancy;

use super::ApiClient;
use crate::error::ClientResult;

/// Payload for creating an inward record
#[derive(Debug, Clone, Serialize)]
pub struct NewInward {
    #[serde(rename = "billDate")]
    pub bill_date: NaiveDate,
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    pub item: String,
    pub vendor: String,
    pub unit: Unit,
    pub color: String,
    #[serde(rename = "quantityOnBill")]
    pub quantity_on_bill: Decimal,
    #[serde(rename = "quantityReceived")]
    pub quantity_received: Decimal,
    #[serde(rename = "quantityRejected")]
    pub quantity_rejected: Decimal,
    #[serde(rename = "quantityDiscrepancy")]
    pub quantity_discrepancy: Decimal,
    #[serde(rename = "discrepancyRemarks")]
    pub discrepancy_remarks: String,
    #[serde(rename = "rejectionRemarks")]
    pub rejection_remarks: String,
    pub remarks: String,
    #[serde(rename = "isCounted")]
    pub counted: bool,
}

impl NewInward {
    /// Build the wire payload from a validated draft. Returns `None` when a
    /// required field is still missing, which validation rules out upstream.
    pub fn from_draft(draft: &InwardDraft) -> Option<Self> {
        Some(Self {
            bill_date: draft.bill_date?,
            transaction_type: draft.transaction_type?,
            item: draft.item_id.clone(),
            vendor: draft.vendor_id.clone(),
            unit: draft.unit?,
            color: draft.color.clone(),
            quantity_on_bill: draft.quantity_on_bill,
            quantity_received: draft.quantity_received,
            quantity_rejected: draft.quantity_rejected,
            quantity_discrepancy: quantity_discrepancy(
                draft.quantity_on_bill,
                draft.quantity_received,
            ),
            discrepancy_remarks: draft.discrepancy_remarks.clone(),
            rejection_remarks: draft.rejection_remarks.clone(),
            remarks: draft.remarks.clone(),
            counted: draft.counted,
        })
    }
}

/// Admin correction of an inward record
#[derive(Debug, Clone, Default, Serialize)]
pub struct AdminInwardUpdate {
    #[serde(rename = "quantityReceived", skip_serializing_if = "Option::is_none")]
    pub quantity_received: Option<Decimal>,
    #[serde(rename = "quantityRejected", skip_serializing_if = "Option::is_none")]
    pub quantity_rejected: Option<Decimal>,
    #[serde(
        rename = "discrepancyRemarks",
        skip_serializing_if = "Option::is_none"
    )]
    pub discrepancy_remarks: Option<String>,
    #[serde(rename = "rejectionRemarks", skip_serializing_if = "Option::is_none")]
    pub rejection_remarks: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remarks: Option<String>,
}

pub async fn my(api: &ApiClient) -> ClientResult<Vec<InwardRecord>> {
    api.get("/inwards/my").await
}

pub async fn my_by_id(api: &ApiClient, id: &str) -> ClientResult<InwardRecord> {
    api.get(&format!("/inwards/my/{}", id)).await
}

pub async fn admin(api: &ApiClient) -> ClientResult<Vec<InwardRecord>> {
    api.get("/inwards/admin").await
}

pub async fn admin_by_id(api: &ApiClient, id: &str) -> ClientResult<InwardRecord> {
    api.get(&format!("/inwards/admin/{}", id)).await
}

pub async fn create(api: &ApiClient, payload: &NewInward) -> ClientResult<()> {
    api.post("/inwards", payload).await
}

pub async fn admin_update(
    api: &ApiClient,
    id: &str,
    update: &AdminInwardUpdate,
) -> ClientResult<()> {
    api.patch(&format!("/inwards/admin/{}", id), update).await
}
