//! Validation and derived-quantity rules for the Inventory Console
//!
//! The discrepancy/actual formulas live here so the entry form, the detail
//! views and the WASM surface all share one implementation.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::models::{InwardDraft, OutwardDraft};

/// Per-field validation messages, keyed by the wire field name
pub type FieldErrors = BTreeMap<String, String>;

/// Quantities derived from an inward entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DerivedQuantities {
    pub discrepancy: Decimal,
    pub actual: Decimal,
}

// ============================================================================
// Derived Quantities
// ============================================================================

/// Shortfall between billed and received quantity, clamped at zero
pub fn quantity_discrepancy(on_bill: Decimal, received: Decimal) -> Decimal {
    (on_bill - received).max(Decimal::ZERO)
}

/// Net usable quantity after discrepancy and rejection, clamped at zero
pub fn quantity_actual(on_bill: Decimal, received: Decimal, rejected: Decimal) -> Decimal {
    let discrepancy = quantity_discrepancy(on_bill, received);
    (on_bill - discrepancy - rejected).max(Decimal::ZERO)
}

/// Both derived quantities in one pass
pub fn derive_quantities(
    on_bill: Decimal,
    received: Decimal,
    rejected: Decimal,
) -> DerivedQuantities {
    DerivedQuantities {
        discrepancy: quantity_discrepancy(on_bill, received),
        actual: quantity_actual(on_bill, received, rejected),
    }
}

/// Over-receipt is legitimate but needs an explicit user confirmation
pub fn needs_over_receipt_confirmation(on_bill: Decimal, received: Decimal) -> bool {
    received > on_bill
}

/// Stock-sufficiency convenience check for outward entries. The API owns the
/// authoritative rule; this only decides whether to ask for an override.
pub fn exceeds_stock(quantity: Decimal, current_stock: Decimal) -> bool {
    quantity > current_stock
}

// ============================================================================
// Form Validation
// ============================================================================

/// Validate an inward draft before submission
pub fn validate_inward(draft: &InwardDraft, today: NaiveDate) -> FieldErrors {
    let mut errors = FieldErrors::new();

    match draft.bill_date {
        None => {
            errors.insert("billDate".into(), "Bill date is required".into());
        }
        Some(date) if date > today => {
            errors.insert("billDate".into(), "Bill date cannot be in future".into());
        }
        Some(_) => {}
    }

    if !draft.counted {
        errors.insert(
            "isCounted".into(),
            "Count the material before entering quantities".into(),
        );
    }

    if draft.transaction_type.is_none() {
        errors.insert("type".into(), "Type is required".into());
    }
    if draft.item_id.trim().is_empty() {
        errors.insert("item".into(), "Item is required".into());
    }
    if draft.vendor_id.trim().is_empty() {
        errors.insert("vendor".into(), "Vendor is required".into());
    }
    if draft.unit.is_none() {
        errors.insert("unit".into(), "Unit of measure is required".into());
    }

    if draft.quantity_on_bill <= Decimal::ZERO {
        errors.insert("quantityOnBill".into(), "Enter valid quantity".into());
    }
    if draft.quantity_received < Decimal::ZERO {
        errors.insert("quantityReceived".into(), "Invalid quantity".into());
    }
    if draft.quantity_rejected < Decimal::ZERO {
        errors.insert("quantityRejected".into(), "Invalid quantity".into());
    } else if draft.quantity_rejected > draft.quantity_received {
        errors.insert(
            "quantityRejected".into(),
            "Rejected cannot exceed received".into(),
        );
    }

    let discrepancy = quantity_discrepancy(draft.quantity_on_bill, draft.quantity_received);
    if discrepancy > Decimal::ZERO && draft.discrepancy_remarks.trim().is_empty() {
        errors.insert("discrepancyRemarks".into(), "Remarks required".into());
    }
    if draft.quantity_rejected > Decimal::ZERO && draft.rejection_remarks.trim().is_empty() {
        errors.insert("rejectionRemarks".into(), "Remarks required".into());
    }

    errors
}

/// Validate an outward draft before submission
pub fn validate_outward(draft: &OutwardDraft, today: NaiveDate) -> FieldErrors {
    let mut errors = FieldErrors::new();

    match draft.outward_date {
        None => {
            errors.insert("outwardDate".into(), "Date of outward is required".into());
        }
        Some(date) if date > today => {
            errors.insert(
                "outwardDate".into(),
                "Outward date cannot be in future".into(),
            );
        }
        Some(_) => {}
    }

    if draft.transaction_type.is_none() {
        errors.insert("type".into(), "Type is required".into());
    }
    if draft.vendor_id.trim().is_empty() {
        errors.insert("vendor".into(), "Vendor is required".into());
    }
    if draft.item_id.trim().is_empty() {
        errors.insert("item".into(), "Item is required".into());
    }
    if draft.unit.is_none() {
        errors.insert("unit".into(), "Unit is required".into());
    }
    if draft.quantity <= Decimal::ZERO {
        errors.insert("quantity".into(), "Quantity must be greater than 0".into());
    }

    errors
}
