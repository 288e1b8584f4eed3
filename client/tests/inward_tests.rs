//! Inward entry form tests: derived quantities, validation gates and the
//! over-receipt confirmation flow

mod support;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use inventory_console_client::pages::{Confirmation, InwardFormPage, SubmitOutcome};
use inventory_console_client::session::Route;
use shared::models::InwardDraft;
use shared::types::{TransactionType, Unit};

fn dec(n: i64) -> Decimal {
    Decimal::from(n)
}

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()
}

fn filled_draft() -> InwardDraft {
    InwardDraft {
        bill_date: Some(today()),
        counted: true,
        transaction_type: Some(TransactionType::RawMaterial),
        item_id: "itm-1".to_string(),
        vendor_id: "ven-1".to_string(),
        unit: Some(Unit::Metre),
        quantity_on_bill: dec(100),
        quantity_received: dec(80),
        quantity_rejected: dec(5),
        discrepancy_remarks: "short shipment".to_string(),
        rejection_remarks: "water damage".to_string(),
        ..InwardDraft::default()
    }
}

#[tokio::test]
async fn test_short_receipt_derives_missing_and_actual() {
    let api = support::test_api("http://127.0.0.1:9", "inw-derived");
    let mut page = InwardFormPage::new(api);
    page.draft = filled_draft();

    let derived = page.derived();
    assert_eq!(derived.discrepancy, dec(20));
    assert_eq!(derived.actual, dec(75));
}

#[tokio::test]
async fn test_missing_remarks_block_submission() {
    let api = support::test_api("http://127.0.0.1:9", "inw-remarks");
    let mut page = InwardFormPage::new(api);
    page.draft = InwardDraft {
        discrepancy_remarks: String::new(),
        rejection_remarks: String::new(),
        ..filled_draft()
    };

    let outcome = page.submit(today()).await;
    let SubmitOutcome::Invalid(errors) = outcome else {
        panic!("submission must be blocked");
    };
    assert!(errors.contains_key("discrepancyRemarks"));
    assert!(errors.contains_key("rejectionRemarks"));
    // errors stay on the page for inline rendering
    assert_eq!(page.errors, errors);
}

#[tokio::test]
async fn test_valid_draft_saves_and_redirects_to_inward_list() {
    let base = support::serve(vec![(201, "{}")]);
    let api = support::test_api(&base, "inw-save");
    let mut page = InwardFormPage::new(api);
    page.draft = filled_draft();

    let outcome = page.submit(today()).await;
    assert_eq!(outcome, SubmitOutcome::Saved(Route::InwardList));
    assert!(page.errors.is_empty());
}

#[tokio::test]
async fn test_over_receipt_pauses_for_confirmation_then_saves() {
    let base = support::serve(vec![(201, "{}")]);
    let api = support::test_api(&base, "inw-over");
    let mut page = InwardFormPage::new(api);
    page.draft = InwardDraft {
        quantity_received: dec(120),
        quantity_rejected: dec(0),
        discrepancy_remarks: String::new(),
        rejection_remarks: String::new(),
        ..filled_draft()
    };

    // no discrepancy (clamped at zero), but received > on-bill pauses
    let outcome = page.submit(today()).await;
    assert_eq!(
        outcome,
        SubmitOutcome::NeedsConfirmation(Confirmation::ReceivedExceedsBill)
    );

    // the user accepted the dialog
    let outcome = page.confirm_over_receipt().await;
    assert_eq!(outcome, SubmitOutcome::Saved(Route::InwardList));
}

#[tokio::test]
async fn test_uncounted_material_cannot_be_submitted() {
    let api = support::test_api("http://127.0.0.1:9", "inw-uncounted");
    let mut page = InwardFormPage::new(api);
    page.draft = InwardDraft {
        counted: false,
        ..filled_draft()
    };

    let SubmitOutcome::Invalid(errors) = page.submit(today()).await else {
        panic!("uncounted draft must be invalid");
    };
    assert!(errors.contains_key("isCounted"));
}

#[tokio::test]
async fn test_save_failure_surfaces_as_toast() {
    let base = support::serve(vec![(500, r#"{"message":"boom"}"#)]);
    let api = support::test_api(&base, "inw-fail");
    let mut page = InwardFormPage::new(api);
    page.draft = filled_draft();

    let SubmitOutcome::Failed(toast) = page.submit(today()).await else {
        panic!("API failure must surface as a toast");
    };
    assert_eq!(toast.message, "Failed to save inward entry");
}
