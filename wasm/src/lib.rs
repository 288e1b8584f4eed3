//! WebAssembly module for the Inventory Console
//!
//! Provides client-side computation for:
//! - Derived inward quantities (item missing / actual)
//! - Entry form validation
//! - Stock and over-receipt confirmation checks

use chrono::NaiveDate;
use rust_decimal::Decimal;
use wasm_bindgen::prelude::*;

// Re-export shared types for use in JavaScript
pub use shared::models::*;
pub use shared::types::*;
pub use shared::validation::*;

/// Initialize the WASM module
#[wasm_bindgen(start)]
pub fn init() {
    // Set up panic hook for better error messages in browser console
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

fn to_decimal(value: f64) -> Decimal {
    Decimal::try_from(value).unwrap_or(Decimal::ZERO)
}

fn to_f64(value: Decimal) -> f64 {
    value.to_string().parse().unwrap_or(0.0)
}

/// Item Missing: max(0, onBill - received)
#[wasm_bindgen]
pub fn inward_discrepancy(on_bill: f64, received: f64) -> f64 {
    to_f64(quantity_discrepancy(to_decimal(on_bill), to_decimal(received)))
}

/// Actual Quantity: max(0, onBill - discrepancy - rejected)
#[wasm_bindgen]
pub fn inward_actual(on_bill: f64, received: f64, rejected: f64) -> f64 {
    to_f64(quantity_actual(
        to_decimal(on_bill),
        to_decimal(received),
        to_decimal(rejected),
    ))
}

/// Whether the over-receipt confirmation dialog must be shown
#[wasm_bindgen]
pub fn over_receipt_needs_confirmation(on_bill: f64, received: f64) -> bool {
    needs_over_receipt_confirmation(to_decimal(on_bill), to_decimal(received))
}

/// Whether an outward quantity needs the stock-override confirmation
#[wasm_bindgen]
pub fn outward_exceeds_stock(quantity: f64, current_stock: f64) -> bool {
    exceeds_stock(to_decimal(quantity), to_decimal(current_stock))
}

/// Validate an inward draft. Takes the draft and today's date (ISO,
/// `YYYY-MM-DD`) and returns the field->message error map as JSON.
#[wasm_bindgen]
pub fn validate_inward_draft(draft_json: &str, today_iso: &str) -> Result<String, JsValue> {
    let draft: InwardDraft = serde_json::from_str(draft_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid draft JSON: {}", e)))?;
    let today = parse_today(today_iso)?;

    let errors = validate_inward(&draft, today);
    serde_json::to_string(&errors)
        .map_err(|e| JsValue::from_str(&format!("Serializing errors failed: {}", e)))
}

/// Validate an outward draft, same contract as [`validate_inward_draft`]
#[wasm_bindgen]
pub fn validate_outward_draft(draft_json: &str, today_iso: &str) -> Result<String, JsValue> {
    let draft: OutwardDraft = serde_json::from_str(draft_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid draft JSON: {}", e)))?;
    let today = parse_today(today_iso)?;

    let errors = validate_outward(&draft, today);
    serde_json::to_string(&errors)
        .map_err(|e| JsValue::from_str(&format!("Serializing errors failed: {}", e)))
}

fn parse_today(today_iso: &str) -> Result<NaiveDate, JsValue> {
    today_iso
        .parse()
        .map_err(|e| JsValue::from_str(&format!("Invalid date: {}", e)))
}
