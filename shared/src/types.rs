//! Common types used across the console

use chrono::{DateTime, Duration, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

/// Transaction type / category assigned to stock movements and catalog items
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum TransactionType {
    #[serde(rename = "Raw Material")]
    RawMaterial,
    #[serde(rename = "WIP")]
    Wip,
    #[serde(rename = "Final Item")]
    FinalItem,
    #[serde(rename = "Packaging")]
    Packaging,
    #[serde(rename = "Sampling")]
    Sampling,
}

impl TransactionType {
    pub const ALL: [TransactionType; 5] = [
        TransactionType::RawMaterial,
        TransactionType::Wip,
        TransactionType::FinalItem,
        TransactionType::Packaging,
        TransactionType::Sampling,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::RawMaterial => "Raw Material",
            TransactionType::Wip => "WIP",
            TransactionType::FinalItem => "Final Item",
            TransactionType::Packaging => "Packaging",
            TransactionType::Sampling => "Sampling",
        }
    }
}

/// Unit of measure for quantities
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Unit {
    Pieces,
    Metre,
    Kilos,
    Litres,
}

impl Unit {
    pub const ALL: [Unit; 4] = [Unit::Pieces, Unit::Metre, Unit::Kilos, Unit::Litres];

    pub fn as_str(&self) -> &'static str {
        match self {
            Unit::Pieces => "Pieces",
            Unit::Metre => "Metre",
            Unit::Kilos => "Kilos",
            Unit::Litres => "Litres",
        }
    }
}

/// Direction of a table sort
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn flipped(&self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

/// Creation-date filter applied to fetched lists
///
/// Both bounds are optional; a record matches when its timestamp falls within
/// `[start of from-day, end of to-day]`, inclusive on both ends.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct DateRange {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl DateRange {
    pub fn new(from: Option<NaiveDate>, to: Option<NaiveDate>) -> Self {
        Self { from, to }
    }

    pub fn is_empty(&self) -> bool {
        self.from.is_none() && self.to.is_none()
    }

    /// Clear both bounds
    pub fn clear(&mut self) {
        self.from = None;
        self.to = None;
    }

    pub fn contains(&self, timestamp: DateTime<Utc>) -> bool {
        let from_ok = match self.from {
            Some(day) => timestamp >= day_start(day),
            None => true,
        };
        let to_ok = match self.to {
            Some(day) => timestamp <= day_end(day),
            None => true,
        };
        from_ok && to_ok
    }
}

fn day_start(day: NaiveDate) -> DateTime<Utc> {
    day.and_time(NaiveTime::MIN).and_utc()
}

fn day_end(day: NaiveDate) -> DateTime<Utc> {
    // 23:59:59.999 of the same day
    day_start(day) + Duration::days(1) - Duration::milliseconds(1)
}
