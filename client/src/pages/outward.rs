//! Outward pages: entry form, own-scope list/detail, admin summary

use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;

use shared::models::{
    Item, NamedRef, OutwardDraft, OutwardRecord, BUYER_VENDOR_ID, BUYER_VENDOR_NAME,
};
use shared::types::{DateRange, TransactionType};
use shared::validation::{exceeds_stock, validate_outward, FieldErrors};

use crate::api::items::ItemQuery;
use crate::api::outwards::{AdminOutwardUpdate, NewOutward};
use crate::api::{items, outwards, vendors, ApiClient};
use crate::error::ClientResult;
use crate::services::export::{export_outwards, CsvExport};
use crate::services::listing::{
    default_outward_sort, filter_outwards, sort_outwards, OutwardColumn, SortState,
};
use crate::session::Route;

use super::{Confirmation, SubmitOutcome, Toast};

/// New-outward entry form
pub struct OutwardFormPage {
    api: Arc<ApiClient>,
    pub draft: OutwardDraft,
    pub items: Vec<Item>,
    vendors: Vec<NamedRef>,
    pub errors: FieldErrors,
}

impl OutwardFormPage {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self {
            api,
            draft: OutwardDraft::default(),
            items: Vec::new(),
            vendors: Vec::new(),
            errors: FieldErrors::new(),
        }
    }

    pub async fn load_vendors(&mut self) -> Option<Toast> {
        match vendors::list(&self.api).await {
            Ok(list) => {
                self.vendors = list
                    .into_iter()
                    .map(|vendor| NamedRef {
                        id: vendor.id,
                        name: vendor.name,
                    })
                    .collect();
                None
            }
            Err(err) => {
                tracing::error!(error = %err, "vendor fetch failed");
                Some(Toast::error("Failed to load vendors"))
            }
        }
    }

    /// Dropdown options: every vendor plus the synthetic buyer entry
    pub fn vendor_options(&self) -> Vec<NamedRef> {
        let mut options = self.vendors.clone();
        options.push(NamedRef {
            id: BUYER_VENDOR_ID.to_string(),
            name: BUYER_VENDOR_NAME.to_string(),
        });
        options
    }

    pub async fn select_type(&mut self, transaction_type: Option<TransactionType>) -> Option<Toast> {
        self.draft.transaction_type = transaction_type;
        self.draft.item_id.clear();

        let Some(transaction_type) = transaction_type else {
            self.items.clear();
            return None;
        };

        match items::list(&self.api, &ItemQuery::active_of_type(transaction_type)).await {
            Ok(list) => {
                self.items = list;
                None
            }
            Err(err) => {
                tracing::error!(error = %err, "item fetch failed");
                Some(Toast::error("Failed to load items"))
            }
        }
    }

    /// Stock of the currently selected item
    pub fn current_stock(&self) -> Decimal {
        self.items
            .iter()
            .find(|item| item.id == self.draft.item_id)
            .map(|item| item.current_stock)
            .unwrap_or(Decimal::ZERO)
    }

    pub async fn submit(&mut self, today: NaiveDate) -> SubmitOutcome {
        let errors = validate_outward(&self.draft, today);
        if !errors.is_empty() {
            self.errors = errors.clone();
            return SubmitOutcome::Invalid(errors);
        }
        self.errors.clear();

        let current_stock = self.current_stock();
        if exceeds_stock(self.draft.quantity, current_stock) {
            return SubmitOutcome::NeedsConfirmation(Confirmation::QuantityExceedsStock {
                requested: self.draft.quantity,
                current_stock,
            });
        }

        self.push().await
    }

    /// The user explicitly overrode the stock warning
    pub async fn confirm_stock_override(&mut self) -> SubmitOutcome {
        self.push().await
    }

    async fn push(&mut self) -> SubmitOutcome {
        let Some(payload) = NewOutward::from_draft(&self.draft) else {
            return SubmitOutcome::Failed(Toast::error("Failed to record outward entry"));
        };
        match outwards::create(&self.api, &payload).await {
            Ok(()) => SubmitOutcome::Saved(Route::OutwardList),
            Err(err) => {
                tracing::error!(error = %err, "outward create failed");
                SubmitOutcome::Failed(Toast::error("Failed to record outward entry"))
            }
        }
    }
}

/// Own-scope outward list
pub struct OutwardListPage {
    api: Arc<ApiClient>,
    rows: Vec<OutwardRecord>,
    pub search: String,
}

impl OutwardListPage {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self {
            api,
            rows: Vec::new(),
            search: String::new(),
        }
    }

    pub async fn load(&mut self) -> Option<Toast> {
        match outwards::my(&self.api).await {
            Ok(rows) => {
                self.rows = rows;
                None
            }
            Err(err) => {
                tracing::error!(error = %err, "outward list fetch failed");
                Some(Toast::error("Failed to load outward entries"))
            }
        }
    }

    pub fn visible(&self) -> Vec<&OutwardRecord> {
        let mut view = filter_outwards(&self.rows, &self.search, &DateRange::default());
        sort_outwards(&mut view, default_outward_sort());
        view
    }
}

/// Outward detail with the admin correction form
pub struct OutwardDetailPage {
    api: Arc<ApiClient>,
    pub record: Option<OutwardRecord>,
}

impl OutwardDetailPage {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api, record: None }
    }

    pub async fn load(&mut self, id: &str, admin_scope: bool) -> Option<Toast> {
        let fetched = if admin_scope {
            outwards::admin_by_id(&self.api, id).await
        } else {
            outwards::my_by_id(&self.api, id).await
        };
        match fetched {
            Ok(record) => {
                self.record = Some(record);
                None
            }
            Err(err) => {
                tracing::error!(error = %err, "outward detail fetch failed");
                Some(Toast::error("Failed to load outward entry"))
            }
        }
    }

    pub async fn save_admin_edit(&mut self, update: AdminOutwardUpdate) -> Result<(), Toast> {
        let Some(id) = self.record.as_ref().map(|r| r.id.clone()) else {
            return Err(Toast::error("Failed to update outward entry"));
        };
        if let Err(err) = outwards::admin_update(&self.api, &id, &update).await {
            tracing::error!(error = %err, "outward update failed");
            return Err(Toast::error("Failed to update outward entry"));
        }
        match self.load(&id, true).await {
            Some(toast) => Err(toast),
            None => Ok(()),
        }
    }
}

/// Admin outward summary: search, date range, column sort, CSV export
pub struct AdminOutwardPage {
    api: Arc<ApiClient>,
    rows: Vec<OutwardRecord>,
    pub search: String,
    pub range: DateRange,
    pub sort: SortState<OutwardColumn>,
}

impl AdminOutwardPage {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self {
            api,
            rows: Vec::new(),
            search: String::new(),
            range: DateRange::default(),
            sort: default_outward_sort(),
        }
    }

    pub async fn load(&mut self) -> Option<Toast> {
        match outwards::admin(&self.api).await {
            Ok(rows) => {
                self.rows = rows;
                None
            }
            Err(err) => {
                tracing::error!(error = %err, "admin outward fetch failed");
                Some(Toast::error("Failed to load outward summary"))
            }
        }
    }

    pub fn toggle_sort(&mut self, column: OutwardColumn) {
        self.sort.toggle(column);
    }

    pub fn visible(&self) -> Vec<&OutwardRecord> {
        let mut view = filter_outwards(&self.rows, &self.search, &self.range);
        sort_outwards(&mut view, self.sort);
        view
    }

    pub fn export(&self) -> ClientResult<CsvExport> {
        export_outwards(&self.visible(), Utc::now())
    }
}
