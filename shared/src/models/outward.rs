//! Outward (goods dispatch) models

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{CreatorRef, RecordRef};
use crate::types::{TransactionType, Unit};

/// Synthetic vendor id offered in the outward vendor dropdown for direct
/// buyer dispatches
pub const BUYER_VENDOR_ID: &str = "buyer";

/// Display name shown for the synthetic buyer option
pub const BUYER_VENDOR_NAME: &str = "Buyer";

/// An outward record as fetched from the API
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OutwardRecord {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub item: Option<RecordRef>,
    #[serde(default)]
    pub vendor: Option<RecordRef>,
    #[serde(default)]
    pub quantity: Decimal,
    #[serde(default)]
    pub unit: Option<Unit>,
    #[serde(rename = "type", default)]
    pub transaction_type: Option<TransactionType>,
    #[serde(rename = "costPerUnitAtTime", default)]
    pub cost_per_unit_at_time: Option<Decimal>,
    #[serde(rename = "totalCost", default)]
    pub total_cost: Option<Decimal>,
    #[serde(default)]
    pub remarks: Option<String>,
    #[serde(rename = "outwardDate", default)]
    pub outward_date: Option<DateTime<Utc>>,
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(rename = "createdBy", default)]
    pub created_by: Option<CreatorRef>,
}

impl OutwardRecord {
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

    pub fn created_millis(&self) -> i64 {
        self.created_at.map(|t| t.timestamp_millis()).unwrap_or(0)
    }
}

/// Form state for a new outward entry
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct OutwardDraft {
    pub outward_date: Option<NaiveDate>,
    pub transaction_type: Option<TransactionType>,
    pub vendor_id: String,
    pub item_id: String,
    pub unit: Option<Unit>,
    pub quantity: Decimal,
    pub remarks: String,
}
