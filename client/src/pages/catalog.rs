//! Catalog management and the inventory summary with cost editing

use std::sync::Arc;

use rust_decimal::Decimal;
use validator::Validate;

use shared::models::{Item, ItemInput, Vendor, VendorInput};

use crate::api::items::ItemQuery;
use crate::api::{items, vendors, ApiClient};

use super::Toast;

/// Items/vendors admin page: add, rename, soft delete, restore
pub struct CatalogPage {
    api: Arc<ApiClient>,
    pub items: Vec<Item>,
    pub vendors: Vec<Vendor>,
    /// Id of the item currently being edited, if the dialog is in edit mode
    pub editing_item: Option<String>,
    pub editing_vendor: Option<String>,
}

impl CatalogPage {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self {
            api,
            items: Vec::new(),
            vendors: Vec::new(),
            editing_item: None,
            editing_vendor: None,
        }
    }

    pub async fn load_all(&mut self) -> Option<Toast> {
        let items = items::list(&self.api, &ItemQuery::default()).await;
        let vendors = vendors::list(&self.api).await;
        match (items, vendors) {
            (Ok(items), Ok(vendors)) => {
                self.items = items;
                self.vendors = vendors;
                None
            }
            (items, vendors) => {
                if let Err(err) = items {
                    tracing::error!(error = %err, "item list fetch failed");
                }
                if let Err(err) = vendors {
                    tracing::error!(error = %err, "vendor list fetch failed");
                }
                Some(Toast::error("Failed to load dropdown data"))
            }
        }
    }

    /// Add a new item, or rename the one being edited
    pub async fn save_item(&mut self, input: ItemInput) -> Result<(), Toast> {
        if input.validate().is_err() {
            return Err(Toast::error("Item name required"));
        }

        let result = match self.editing_item.take() {
            Some(id) => items::update(&self.api, &id, &input).await,
            None => items::create(&self.api, &input).await,
        };
        if let Err(err) = result {
            tracing::error!(error = %err, "item save failed");
            return Err(Toast::error("Failed to save item"));
        }
        self.load_all().await;
        Ok(())
    }

    pub async fn save_vendor(&mut self, input: VendorInput) -> Result<(), Toast> {
        if input.validate().is_err() {
            return Err(Toast::error("Vendor name required"));
        }

        let result = match self.editing_vendor.take() {
            Some(id) => vendors::update(&self.api, &id, &input).await,
            None => vendors::create(&self.api, &input).await,
        };
        if let Err(err) = result {
            tracing::error!(error = %err, "vendor save failed");
            return Err(Toast::error("Failed to save vendor"));
        }
        self.load_all().await;
        Ok(())
    }

    pub async fn deactivate_item(&mut self, id: &str) -> Result<(), Toast> {
        if let Err(err) = items::soft_delete(&self.api, id).await {
            tracing::error!(error = %err, "item soft-delete failed");
            return Err(Toast::error("Failed to delete item"));
        }
        self.load_all().await;
        Ok(())
    }

    pub async fn restore_item(&mut self, id: &str) -> Result<(), Toast> {
        if let Err(err) = items::restore(&self.api, id).await {
            tracing::error!(error = %err, "item restore failed");
            return Err(Toast::error("Failed to restore item"));
        }
        self.load_all().await;
        Ok(())
    }

    pub async fn deactivate_vendor(&mut self, id: &str) -> Result<(), Toast> {
        if let Err(err) = vendors::soft_delete(&self.api, id).await {
            tracing::error!(error = %err, "vendor soft-delete failed");
            return Err(Toast::error("Failed to delete vendor"));
        }
        self.load_all().await;
        Ok(())
    }

    pub async fn restore_vendor(&mut self, id: &str) -> Result<(), Toast> {
        if let Err(err) = vendors::restore(&self.api, id).await {
            tracing::error!(error = %err, "vendor restore failed");
            return Err(Toast::error("Failed to restore vendor"));
        }
        self.load_all().await;
        Ok(())
    }
}

/// Inventory summary: every item with stock and editable unit cost
pub struct InventorySummaryPage {
    api: Arc<ApiClient>,
    pub items: Vec<Item>,
    pub search: String,
}

impl InventorySummaryPage {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self {
            api,
            items: Vec::new(),
            search: String::new(),
        }
    }

    pub async fn load(&mut self) -> Option<Toast> {
        match items::list(&self.api, &ItemQuery::default()).await {
            Ok(items) => {
                self.items = items;
                None
            }
            Err(err) => {
                tracing::error!(error = %err, "inventory fetch failed");
                Some(Toast::error("Failed to load inventory"))
            }
        }
    }

    pub fn filtered(&self) -> Vec<&Item> {
        let needle = self.search.trim().to_lowercase();
        self.items
            .iter()
            .filter(|item| needle.is_empty() || item.name.to_lowercase().contains(&needle))
            .collect()
    }

    /// Patch one item's cost and update the local copy in place
    pub async fn update_cost(&mut self, id: &str, cost_per_unit: Decimal) -> Result<(), Toast> {
        if let Err(err) = items::update_cost(&self.api, id, cost_per_unit).await {
            tracing::error!(error = %err, "cost update failed");
            return Err(Toast::error("Failed to update cost"));
        }
        if let Some(item) = self.items.iter_mut().find(|item| item.id == id) {
            item.cost_per_unit = Some(cost_per_unit);
        }
        Ok(())
    }
}
