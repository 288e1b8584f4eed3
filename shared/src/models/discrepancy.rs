//! Discrepancy review models
//!
//! A discrepancy is derived from an inward record whose received quantity
//! fell short of the billed quantity. Review moves strictly forward:
//! Pending -> (Reviewed) -> Resolved, and resolution is terminal.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::RecordRef;
use crate::types::TransactionType;

/// Review state of a discrepancy
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum DiscrepancyStatus {
    Pending,
    Reviewed,
    Resolved,
}

impl DiscrepancyStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(self, DiscrepancyStatus::Resolved)
    }

    /// Whether the one-directional review flow permits moving to `next`
    pub fn can_transition_to(&self, next: DiscrepancyStatus) -> bool {
        use DiscrepancyStatus::*;
        matches!(
            (self, next),
            (Pending, Reviewed) | (Pending, Resolved) | (Reviewed, Resolved)
        )
    }
}

/// A discrepancy row as shown in the admin review list
///
/// The API serves pending and resolved discrepancies from separate
/// endpoints; the `resolved` flag is stamped client-side when the two lists
/// are merged.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DiscrepancyEntry {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub item: Option<RecordRef>,
    #[serde(default)]
    pub vendor: Option<RecordRef>,
    #[serde(rename = "type", default)]
    pub transaction_type: Option<TransactionType>,
    #[serde(rename = "quantityOnBill", default)]
    pub quantity_on_bill: Decimal,
    #[serde(rename = "quantityReceived", default)]
    pub quantity_received: Decimal,
    #[serde(rename = "quantityDiscrepancy", default)]
    pub quantity_discrepancy: Decimal,
    #[serde(rename = "quantityRejected", default)]
    pub quantity_rejected: Decimal,
    #[serde(rename = "resolutionRemarks", default)]
    pub resolution_remarks: Option<String>,
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub resolved: bool,
}

impl DiscrepancyEntry {
    pub fn item_name(&self) -> &str {
        self.item.as_ref().and_then(RecordRef::name).unwrap_or("")
    }

    pub fn vendor_name(&self) -> &str {
        self.vendor.as_ref().and_then(RecordRef::name).unwrap_or("")
    }

    pub fn created_millis(&self) -> i64 {
        self.created_at.map(|t| t.timestamp_millis()).unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_review_flow_is_one_directional() {
        use DiscrepancyStatus::*;

        assert!(Pending.can_transition_to(Reviewed));
        assert!(Pending.can_transition_to(Resolved));
        assert!(Reviewed.can_transition_to(Resolved));

        assert!(!Reviewed.can_transition_to(Pending));
        assert!(!Resolved.can_transition_to(Pending));
        assert!(!Resolved.can_transition_to(Reviewed));
        assert!(!Resolved.can_transition_to(Resolved));
    }

    #[test]
    fn test_resolved_is_terminal() {
        assert!(DiscrepancyStatus::Resolved.is_terminal());
        assert!(!DiscrepancyStatus::Pending.is_terminal());
        assert!(!DiscrepancyStatus::Reviewed.is_terminal());
    }

    #[test]
    fn test_status_wire_names_are_uppercase() {
        let json = serde_json::to_string(&DiscrepancyStatus::Pending).unwrap();
        assert_eq!(json, "\"PENDING\"");
        let parsed: DiscrepancyStatus = serde_json::from_str("\"RESOLVED\"").unwrap();
        assert_eq!(parsed, DiscrepancyStatus::Resolved);
    }
}
