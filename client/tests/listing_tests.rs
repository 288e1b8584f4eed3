//! Filter/sort tests for the admin summary tables
//!
//! Covers date-filter boundary inclusivity, sort toggle semantics and the
//! fixed two-tier discrepancy order, including property tests over random
//! permutations.

use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};
use proptest::prelude::*;
use rust_decimal::Decimal;

use inventory_console_client::services::listing::{
    default_inward_sort, filter_discrepancies, filter_inwards, order_discrepancies, sort_inwards,
    InwardColumn, SortState,
};
use shared::models::{DiscrepancyEntry, InwardRecord, NamedRef, RecordRef};
use shared::types::{DateRange, SortDirection};

fn named(name: &str) -> Option<RecordRef> {
    Some(RecordRef::Populated(NamedRef {
        id: format!("id-{name}"),
        name: name.to_string(),
    }))
}

fn inward_at(item: &str, vendor: &str, created_at: Option<DateTime<Utc>>) -> InwardRecord {
    InwardRecord {
        id: format!("inw-{item}"),
        bill_date: None,
        counted: true,
        transaction_type: None,
        item: named(item),
        vendor: named(vendor),
        unit: None,
        color: None,
        quantity_on_bill: Decimal::from(100),
        quantity_received: Decimal::from(100),
        quantity_rejected: Decimal::ZERO,
        quantity_discrepancy: Decimal::ZERO,
        quantity_actual: Decimal::from(100),
        remarks: None,
        discrepancy_remarks: None,
        rejection_remarks: None,
        discrepancy_status: None,
        resolution_remarks: None,
        created_at,
        created_by: None,
    }
}

fn discrepancy_at(id: &str, resolved: bool, created_at: Option<DateTime<Utc>>) -> DiscrepancyEntry {
    DiscrepancyEntry {
        id: id.to_string(),
        item: named("Tinsel"),
        vendor: named("Quality Fabrics"),
        transaction_type: None,
        quantity_on_bill: Decimal::from(10),
        quantity_received: Decimal::from(8),
        quantity_discrepancy: Decimal::from(2),
        quantity_rejected: Decimal::ZERO,
        resolution_remarks: None,
        created_at,
        resolved,
    }
}

fn at(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> Option<DateTime<Utc>> {
    Utc.with_ymd_and_hms(y, m, d, h, min, s).single()
}

#[test]
fn test_to_date_includes_the_whole_day() {
    // created at 23:59:59.999 on the "to" date
    let last_moment = at(2025, 3, 10, 23, 59, 59).map(|t| t + Duration::milliseconds(999));
    // created at 00:00:00.000 the following day
    let next_day = at(2025, 3, 11, 0, 0, 0);

    let rows = vec![
        inward_at("Included", "V", last_moment),
        inward_at("Excluded", "V", next_day),
    ];
    let range = DateRange::new(None, NaiveDate::from_ymd_opt(2025, 3, 10));

    let hits = filter_inwards(&rows, "", &range);
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].item_name(), "Included");
}

#[test]
fn test_from_date_includes_midnight() {
    let midnight = at(2025, 3, 10, 0, 0, 0);
    let just_before = at(2025, 3, 9, 23, 59, 59);

    let rows = vec![
        inward_at("Included", "V", midnight),
        inward_at("Excluded", "V", just_before),
    ];
    let range = DateRange::new(NaiveDate::from_ymd_opt(2025, 3, 10), None);

    let hits = filter_inwards(&rows, "", &range);
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].item_name(), "Included");
}

#[test]
fn test_created_at_sorts_by_epoch_milliseconds() {
    let rows = vec![
        inward_at("Mid", "V", at(2025, 3, 5, 12, 0, 0)),
        inward_at("New", "V", at(2025, 3, 9, 12, 0, 0)),
        inward_at("Old", "V", at(2025, 3, 1, 12, 0, 0)),
    ];
    let mut view: Vec<&InwardRecord> = rows.iter().collect();

    // default: newest first
    sort_inwards(&mut view, default_inward_sort());
    let names: Vec<&str> = view.iter().map(|r| r.item_name()).collect();
    assert_eq!(names, ["New", "Mid", "Old"]);

    sort_inwards(
        &mut view,
        SortState::new(InwardColumn::CreatedAt, SortDirection::Ascending),
    );
    let names: Vec<&str> = view.iter().map(|r| r.item_name()).collect();
    assert_eq!(names, ["Old", "Mid", "New"]);
}

#[test]
fn test_toggle_flips_then_resets() {
    let mut sort = default_inward_sort();
    sort.toggle(InwardColumn::CreatedAt);
    assert_eq!(sort.direction, SortDirection::Ascending);

    sort.toggle(InwardColumn::Vendor);
    assert_eq!(sort.column, InwardColumn::Vendor);
    assert_eq!(sort.direction, SortDirection::Ascending);

    sort.toggle(InwardColumn::Vendor);
    assert_eq!(sort.direction, SortDirection::Descending);
}

#[test]
fn test_search_is_case_insensitive_over_item_and_vendor() {
    let rows = vec![
        inward_at("Velvet Ribbon", "Silk Suppliers", at(2025, 1, 1, 0, 0, 0)),
        inward_at("Jute Trim", "Ribbon World", at(2025, 1, 2, 0, 0, 0)),
        inward_at("Tinsel", "Craft Pro", at(2025, 1, 3, 0, 0, 0)),
    ];

    let hits = filter_inwards(&rows, "ribbon", &DateRange::default());
    assert_eq!(hits.len(), 2);

    let hits = filter_inwards(&rows, "CRAFT", &DateRange::default());
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].vendor_name(), "Craft Pro");
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    /// All unresolved entries come strictly before all resolved ones, no
    /// matter how the input was ordered.
    #[test]
    fn prop_unresolved_always_precede_resolved(
        spec in prop::collection::vec((any::<bool>(), 1u32..28), 0..40)
    ) {
        let rows: Vec<DiscrepancyEntry> = spec
            .iter()
            .enumerate()
            .map(|(i, (resolved, day))| {
                discrepancy_at(&format!("d{i}"), *resolved, at(2025, 4, *day, 8, 0, 0))
            })
            .collect();

        let mut view: Vec<&DiscrepancyEntry> = rows.iter().collect();
        order_discrepancies(&mut view);

        let first_resolved = view.iter().position(|d| d.resolved);
        if let Some(boundary) = first_resolved {
            prop_assert!(view[boundary..].iter().all(|d| d.resolved));
            prop_assert!(view[..boundary].iter().all(|d| !d.resolved));
        }
    }

    /// Within each tier, newest first.
    #[test]
    fn prop_each_tier_is_newest_first(
        spec in prop::collection::vec((any::<bool>(), 1u32..28), 2..40)
    ) {
        let rows: Vec<DiscrepancyEntry> = spec
            .iter()
            .enumerate()
            .map(|(i, (resolved, day))| {
                discrepancy_at(&format!("d{i}"), *resolved, at(2025, 4, *day, 8, 0, 0))
            })
            .collect();

        let mut view: Vec<&DiscrepancyEntry> = rows.iter().collect();
        order_discrepancies(&mut view);

        for pair in view.windows(2) {
            if pair[0].resolved == pair[1].resolved {
                prop_assert!(pair[0].created_millis() >= pair[1].created_millis());
            }
        }
    }

    /// Filtering never invents rows, and every kept row matches the term.
    #[test]
    fn prop_filter_keeps_only_matches(term in "[a-z]{0,3}") {
        let rows = vec![
            discrepancy_at("alpha", false, at(2025, 4, 1, 8, 0, 0)),
            discrepancy_at("beta", true, at(2025, 4, 2, 8, 0, 0)),
            discrepancy_at("gamma", false, at(2025, 4, 3, 8, 0, 0)),
        ];
        let hits = filter_discrepancies(&rows, &term);
        prop_assert!(hits.len() <= rows.len());
        for hit in hits {
            let haystack = format!(
                "{} {} {}",
                hit.id.to_lowercase(),
                hit.item_name().to_lowercase(),
                hit.vendor_name().to_lowercase()
            );
            prop_assert!(haystack.contains(&term.to_lowercase()));
        }
    }
}
