//! Dashboard aggregate models

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::{TransactionType, Unit};

/// Admin dashboard headline figures
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AdminSummary {
    #[serde(rename = "currentStock", default)]
    pub current_stock: Decimal,
    #[serde(rename = "totalInwards", default)]
    pub total_inwards: Decimal,
    #[serde(rename = "totalSales", default)]
    pub total_sales: Decimal,
}

/// A recent inward row on the inventory dashboard
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecentInward {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "itemName", default)]
    pub item_name: String,
    #[serde(rename = "vendorName", default)]
    pub vendor_name: String,
    #[serde(rename = "quantityActual", default)]
    pub quantity_actual: Decimal,
    #[serde(default)]
    pub unit: Option<Unit>,
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// A recent outward row on the inventory dashboard
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecentOutward {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "itemName", default)]
    pub item_name: String,
    #[serde(rename = "partyName", default)]
    pub party_name: String,
    #[serde(default)]
    pub quantity: Decimal,
    #[serde(default)]
    pub unit: Option<Unit>,
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Inventory dashboard payload: the latest movements in both directions
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct InventoryDashboard {
    #[serde(rename = "recentInwards", default)]
    pub recent_inwards: Vec<RecentInward>,
    #[serde(rename = "recentOutwards", default)]
    pub recent_outwards: Vec<RecentOutward>,
}

/// A row on the revenue board, most valuable stock first
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExpensiveItem {
    #[serde(rename = "itemName", default)]
    pub item_name: String,
    #[serde(rename = "type", default)]
    pub item_type: Option<TransactionType>,
    #[serde(rename = "currentStock", default)]
    pub current_stock: Decimal,
    #[serde(rename = "costPerUnit", default)]
    pub cost_per_unit: Decimal,
    #[serde(rename = "totalValue", default)]
    pub total_value: Decimal,
}

/// Revenue board payload
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct RevenueBoard {
    #[serde(rename = "expensiveItems", default)]
    pub expensive_items: Vec<ExpensiveItem>,
}
