//! Catalog models: items and vendors
//!
//! Catalog entries are soft-deletable; deactivating one only flips its
//! active flag so historic records keep their references.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::types::TransactionType;

/// A catalog item
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Item {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(rename = "type", default)]
    pub item_type: Option<TransactionType>,
    #[serde(rename = "isActive", default = "default_active")]
    pub is_active: bool,
    #[serde(rename = "costPerUnit", default)]
    pub cost_per_unit: Option<Decimal>,
    #[serde(rename = "currentStock", default)]
    pub current_stock: Decimal,
}

/// A catalog vendor
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Vendor {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(rename = "isActive", default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

/// Input for creating or renaming an item
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ItemInput {
    #[validate(length(min = 1, max = 120, message = "Item name required"))]
    pub name: String,
    #[serde(rename = "type")]
    pub item_type: TransactionType,
}

/// Input for creating or renaming a vendor
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct VendorInput {
    #[validate(length(min = 1, max = 120, message = "Vendor name required"))]
    pub name: String,
}

/// A populated reference embedded in a record (`{_id, name}` on the wire)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct NamedRef {
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
}

/// A record's item/vendor reference, which the API returns either populated
/// or as a bare id depending on the endpoint
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum RecordRef {
    Populated(NamedRef),
    Id(String),
}

impl RecordRef {
    pub fn id(&self) -> &str {
        match self {
            RecordRef::Populated(named) => &named.id,
            RecordRef::Id(id) => id,
        }
    }

    /// Display name when the reference was populated by the API
    pub fn name(&self) -> Option<&str> {
        match self {
            RecordRef::Populated(named) => Some(named.name.as_str()),
            RecordRef::Id(_) => None,
        }
    }
}

/// Reference to the user who entered a record
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct CreatorRef {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub role: Option<String>,
}
