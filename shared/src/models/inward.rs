//! Inward (goods receipt) models

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{CreatorRef, DiscrepancyStatus, RecordRef};
use crate::types::{TransactionType, Unit};

/// An inward record as fetched from the API
///
/// `quantity_discrepancy` and `quantity_actual` are derived server-side from
/// the same rules as [`crate::validation::derive_quantities`]; the client
/// never recomputes them for fetched rows.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InwardRecord {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "billDate", default)]
    pub bill_date: Option<DateTime<Utc>>,
    #[serde(rename = "isCounted", default)]
    pub counted: bool,
    #[serde(rename = "type", default)]
    pub transaction_type: Option<TransactionType>,
    #[serde(default)]
    pub item: Option<RecordRef>,
    #[serde(default)]
    pub vendor: Option<RecordRef>,
    #[serde(default)]
    pub unit: Option<Unit>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(rename = "quantityOnBill", default)]
    pub quantity_on_bill: Decimal,
    #[serde(rename = "quantityReceived", default)]
    pub quantity_received: Decimal,
    #[serde(rename = "quantityRejected", default)]
    pub quantity_rejected: Decimal,
    #[serde(rename = "quantityDiscrepancy", default)]
    pub quantity_discrepancy: Decimal,
    #[serde(rename = "quantityActual", default)]
    pub quantity_actual: Decimal,
    #[serde(default)]
    pub remarks: Option<String>,
    #[serde(rename = "discrepancyRemarks", default)]
    pub discrepancy_remarks: Option<String>,
    #[serde(rename = "rejectionRemarks", default)]
    pub rejection_remarks: Option<String>,
    #[serde(rename = "discrepancyStatus", default)]
    pub discrepancy_status: Option<DiscrepancyStatus>,
    #[serde(rename = "resolutionRemarks", default)]
    pub resolution_remarks: Option<String>,
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(rename = "createdBy", default)]
    pub created_by: Option<CreatorRef>,
}

impl InwardRecord {
    pub fn item_name(&self) -> &str {
        self.item.as_ref().and_then(RecordRef::name).unwrap_or("")
    }

    pub fn vendor_name(&self) -> &str {
        self.vendor.as_ref().and_then(RecordRef::name).unwrap_or("")
    }

    pub fn entered_by(&self) -> &str {
        self.created_by
            .as_ref()
            .map(|c| c.username.as_str())
            .unwrap_or("")
    }

    /// Creation instant in epoch milliseconds, 0 when absent
    pub fn created_millis(&self) -> i64 {
        self.created_at.map(|t| t.timestamp_millis()).unwrap_or(0)
    }
}

/// Form state for a new inward entry
///
/// Quantities stay untouched until the material has been counted; the
/// `counted` gate is part of validation, not just presentation.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct InwardDraft {
    pub bill_date: Option<NaiveDate>,
    pub counted: bool,
    pub transaction_type: Option<TransactionType>,
    pub item_id: String,
    pub vendor_id: String,
    pub unit: Option<Unit>,
    pub color: String,
    pub quantity_on_bill: Decimal,
    pub quantity_received: Decimal,
    pub quantity_rejected: Decimal,
    pub discrepancy_remarks: String,
    pub rejection_remarks: String,
    pub remarks: String,
}
