//! Client-side filtering and sorting of already-fetched lists
//!
//! Search terms match case-insensitively against item and vendor names (and
//! the record id for discrepancies). Date ranges are inclusive of both whole
//! days. Sorting is a single active column plus direction; re-selecting the
//! active column flips the direction, selecting a new one resets to
//! ascending.

use std::cmp::Ordering;

use shared::models::{DiscrepancyEntry, InwardRecord, OutwardRecord};
use shared::types::{DateRange, SortDirection};

/// Current sort selection for a table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortState<C> {
    pub column: C,
    pub direction: SortDirection,
}

impl<C: Copy + PartialEq> SortState<C> {
    pub fn new(column: C, direction: SortDirection) -> Self {
        Self { column, direction }
    }

    /// A header click: flip direction on the active column, reset to
    /// ascending on a new one
    pub fn toggle(&mut self, column: C) {
        if self.column == column {
            self.direction = self.direction.flipped();
        } else {
            self.column = column;
            self.direction = SortDirection::Ascending;
        }
    }
}

fn matches_term(term: &str, haystacks: &[&str]) -> bool {
    let needle = term.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    haystacks
        .iter()
        .any(|hay| hay.to_lowercase().contains(&needle))
}

fn directed(ordering: Ordering, direction: SortDirection) -> Ordering {
    match direction {
        SortDirection::Ascending => ordering,
        SortDirection::Descending => ordering.reverse(),
    }
}

fn text_cmp(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

// ============================================================================
// Inward summary
// ============================================================================

/// Sortable columns of the admin inward summary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InwardColumn {
    Item,
    Vendor,
    QuantityOnBill,
    CreatedAt,
}

/// Initial sort of the inward summary: newest first
pub fn default_inward_sort() -> SortState<InwardColumn> {
    SortState::new(InwardColumn::CreatedAt, SortDirection::Descending)
}

pub fn filter_inwards<'a>(
    rows: &'a [InwardRecord],
    term: &str,
    range: &DateRange,
) -> Vec<&'a InwardRecord> {
    rows.iter()
        .filter(|row| matches_term(term, &[row.item_name(), row.vendor_name()]))
        .filter(|row| match row.created_at {
            Some(created) => range.contains(created),
            None => range.is_empty(),
        })
        .collect()
}

pub fn sort_inwards(rows: &mut [&InwardRecord], sort: SortState<InwardColumn>) {
    rows.sort_by(|a, b| {
        let ordering = match sort.column {
            InwardColumn::Item => text_cmp(a.item_name(), b.item_name()),
            InwardColumn::Vendor => text_cmp(a.vendor_name(), b.vendor_name()),
            InwardColumn::QuantityOnBill => a.quantity_on_bill.cmp(&b.quantity_on_bill),
            InwardColumn::CreatedAt => a.created_millis().cmp(&b.created_millis()),
        };
        directed(ordering, sort.direction)
    });
}

// ============================================================================
// Outward summary
// ============================================================================

/// Sortable columns of the admin outward summary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutwardColumn {
    Item,
    Vendor,
    Quantity,
    CreatedAt,
}

/// Initial sort of the outward summary: newest first
pub fn default_outward_sort() -> SortState<OutwardColumn> {
    SortState::new(OutwardColumn::CreatedAt, SortDirection::Descending)
}

pub fn filter_outwards<'a>(
    rows: &'a [OutwardRecord],
    term: &str,
    range: &DateRange,
) -> Vec<&'a OutwardRecord> {
    rows.iter()
        .filter(|row| matches_term(term, &[row.item_name(), row.vendor_name()]))
        .filter(|row| match row.created_at {
            Some(created) => range.contains(created),
            None => range.is_empty(),
        })
        .collect()
}

pub fn sort_outwards(rows: &mut [&OutwardRecord], sort: SortState<OutwardColumn>) {
    rows.sort_by(|a, b| {
        let ordering = match sort.column {
            OutwardColumn::Item => text_cmp(a.item_name(), b.item_name()),
            OutwardColumn::Vendor => text_cmp(a.vendor_name(), b.vendor_name()),
            OutwardColumn::Quantity => a.quantity.cmp(&b.quantity),
            OutwardColumn::CreatedAt => a.created_millis().cmp(&b.created_millis()),
        };
        directed(ordering, sort.direction)
    });
}

// ============================================================================
// Discrepancy review list
// ============================================================================

pub fn filter_discrepancies<'a>(
    rows: &'a [DiscrepancyEntry],
    term: &str,
) -> Vec<&'a DiscrepancyEntry> {
    rows.iter()
        .filter(|row| matches_term(term, &[row.id.as_str(), row.item_name(), row.vendor_name()]))
        .collect()
}

/// The review list ignores column sorts: everything unresolved comes
/// strictly before everything resolved, newest first within each tier.
pub fn order_discrepancies(rows: &mut [&DiscrepancyEntry]) {
    rows.sort_by(|a, b| {
        a.resolved
            .cmp(&b.resolved)
            .then_with(|| b.created_millis().cmp(&a.created_millis()))
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use rust_decimal::Decimal;
    use shared::models::{NamedRef, RecordRef};

    fn named(name: &str) -> Option<RecordRef> {
        Some(RecordRef::Populated(NamedRef {
            id: format!("id-{name}"),
            name: name.to_string(),
        }))
    }

    fn inward(item: &str, vendor: &str, on_bill: i64, day: u32) -> InwardRecord {
        InwardRecord {
            id: format!("inw-{item}-{day}"),
            bill_date: None,
            counted: true,
            transaction_type: None,
            item: named(item),
            vendor: named(vendor),
            unit: None,
            color: None,
            quantity_on_bill: Decimal::from(on_bill),
            quantity_received: Decimal::ZERO,
            quantity_rejected: Decimal::ZERO,
            quantity_discrepancy: Decimal::ZERO,
            quantity_actual: Decimal::ZERO,
            remarks: None,
            discrepancy_remarks: None,
            rejection_remarks: None,
            discrepancy_status: None,
            resolution_remarks: None,
            created_at: Utc.with_ymd_and_hms(2025, 5, day, 12, 0, 0).single(),
            created_by: None,
        }
    }

    #[test]
    fn test_search_matches_item_or_vendor_case_insensitively() {
        let rows = vec![
            inward("Velvet Ribbon", "Silk Suppliers", 10, 1),
            inward("Organza Sheer", "Ribbon World", 20, 2),
        ];
        let hits = filter_inwards(&rows, "VELVET", &DateRange::default());
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].item_name(), "Velvet Ribbon");

        let hits = filter_inwards(&rows, "ribbon world", &DateRange::default());
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].vendor_name(), "Ribbon World");
    }

    #[test]
    fn test_sort_toggle_semantics() {
        let mut sort = default_inward_sort();
        assert_eq!(sort.column, InwardColumn::CreatedAt);
        assert_eq!(sort.direction, SortDirection::Descending);

        // clicking a new column resets to ascending
        sort.toggle(InwardColumn::Item);
        assert_eq!(sort.column, InwardColumn::Item);
        assert_eq!(sort.direction, SortDirection::Ascending);

        // clicking the active column flips direction
        sort.toggle(InwardColumn::Item);
        assert_eq!(sort.direction, SortDirection::Descending);
    }

    #[test]
    fn test_sort_strings_case_insensitively() {
        let rows = vec![
            inward("apple", "V", 1, 1),
            inward("Banana", "V", 2, 2),
            inward("cherry", "V", 3, 3),
        ];
        let mut view: Vec<&InwardRecord> = rows.iter().collect();
        sort_inwards(
            &mut view,
            SortState::new(InwardColumn::Item, SortDirection::Ascending),
        );
        let names: Vec<&str> = view.iter().map(|r| r.item_name()).collect();
        assert_eq!(names, ["apple", "Banana", "cherry"]);
    }

    #[test]
    fn test_date_filter_uses_creation_day() {
        let rows = vec![inward("A", "V", 1, 10), inward("B", "V", 2, 20)];
        let range = DateRange::new(
            chrono::NaiveDate::from_ymd_opt(2025, 5, 15),
            chrono::NaiveDate::from_ymd_opt(2025, 5, 25),
        );
        let hits = filter_inwards(&rows, "", &range);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].item_name(), "B");
    }

    fn discrepancy(id: &str, resolved: bool, day: u32) -> DiscrepancyEntry {
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
            created_at: Utc.with_ymd_and_hms(2025, 5, day, 9, 0, 0).single(),
            resolved,
        }
    }

    #[test]
    fn test_unresolved_discrepancies_come_first() {
        let rows = vec![
            discrepancy("a", true, 28),
            discrepancy("b", false, 2),
            discrepancy("c", true, 1),
            discrepancy("d", false, 14),
        ];
        let mut view: Vec<&DiscrepancyEntry> = rows.iter().collect();
        order_discrepancies(&mut view);

        let ids: Vec<&str> = view.iter().map(|d| d.id.as_str()).collect();
        // pending newest-first, then resolved newest-first
        assert_eq!(ids, ["d", "b", "a", "c"]);
    }

    #[test]
    fn test_discrepancy_search_includes_record_id() {
        let rows = vec![discrepancy("abc123", false, 1), discrepancy("xyz", false, 2)];
        let hits = filter_discrepancies(&rows, "ABC");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "abc123");
    }
}
