//! Inward pages: entry form, own-scope list/detail, admin summary

use std::sync::Arc;

use chrono::{NaiveDate, Utc};

use shared::models::{InwardDraft, InwardRecord, Item, Vendor};
use shared::types::{DateRange, TransactionType};
use shared::validation::{
    derive_quantities, needs_over_receipt_confirmation, validate_inward, DerivedQuantities,
    FieldErrors,
};

use crate::api::inwards::{AdminInwardUpdate, NewInward};
use crate::api::items::ItemQuery;
use crate::api::{inwards, items, vendors, ApiClient};
use crate::error::ClientResult;
use crate::services::export::{export_inwards, CsvExport};
use crate::services::listing::{
    default_inward_sort, filter_inwards, sort_inwards, InwardColumn, SortState,
};
use crate::session::Route;

use super::{Confirmation, SubmitOutcome, Toast};

/// New-inward entry form
pub struct InwardFormPage {
    api: Arc<ApiClient>,
    pub draft: InwardDraft,
    pub items: Vec<Item>,
    pub vendors: Vec<Vendor>,
    pub errors: FieldErrors,
}

impl InwardFormPage {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self {
            api,
            draft: InwardDraft::default(),
            items: Vec::new(),
            vendors: Vec::new(),
            errors: FieldErrors::new(),
        }
    }

    pub async fn load_vendors(&mut self) -> Option<Toast> {
        match vendors::active(&self.api).await {
            Ok(list) => {
                self.vendors = list;
                None
            }
            Err(err) => {
                tracing::error!(error = %err, "vendor fetch failed");
                Some(Toast::error("Failed to load vendors"))
            }
        }
    }

    /// Choosing a type refetches the active items of that type and clears
    /// the chosen item
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

    /// Item Missing / Actual Quantity, recomputed from the draft
    pub fn derived(&self) -> DerivedQuantities {
        derive_quantities(
            self.draft.quantity_on_bill,
            self.draft.quantity_received,
            self.draft.quantity_rejected,
        )
    }

    pub async fn submit(&mut self, today: NaiveDate) -> SubmitOutcome {
        let errors = validate_inward(&self.draft, today);
        if !errors.is_empty() {
            self.errors = errors.clone();
            return SubmitOutcome::Invalid(errors);
        }
        self.errors.clear();

        if needs_over_receipt_confirmation(
            self.draft.quantity_on_bill,
            self.draft.quantity_received,
        ) {
            return SubmitOutcome::NeedsConfirmation(Confirmation::ReceivedExceedsBill);
        }

        self.push().await
    }

    /// The user accepted the over-receipt dialog
    pub async fn confirm_over_receipt(&mut self) -> SubmitOutcome {
        self.push().await
    }

    async fn push(&mut self) -> SubmitOutcome {
        let Some(payload) = NewInward::from_draft(&self.draft) else {
            return SubmitOutcome::Failed(Toast::error("Failed to save inward entry"));
        };
        match inwards::create(&self.api, &payload).await {
            Ok(()) => SubmitOutcome::Saved(Route::InwardList),
            Err(err) => {
                tracing::error!(error = %err, "inward create failed");
                SubmitOutcome::Failed(Toast::error("Failed to save inward entry"))
            }
        }
    }
}

/// Own-scope inward list
pub struct InwardListPage {
    api: Arc<ApiClient>,
    rows: Vec<InwardRecord>,
    pub search: String,
}

impl InwardListPage {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self {
            api,
            rows: Vec::new(),
            search: String::new(),
        }
    }

    pub async fn load(&mut self) -> Option<Toast> {
        match inwards::my(&self.api).await {
            Ok(rows) => {
                self.rows = rows;
                None
            }
            Err(err) => {
                tracing::error!(error = %err, "inward list fetch failed");
                Some(Toast::error("Failed to load inward entries"))
            }
        }
    }

    pub fn visible(&self) -> Vec<&InwardRecord> {
        let mut view = filter_inwards(&self.rows, &self.search, &DateRange::default());
        sort_inwards(&mut view, default_inward_sort());
        view
    }
}

/// Inward detail with the admin correction form
pub struct InwardDetailPage {
    api: Arc<ApiClient>,
    pub record: Option<InwardRecord>,
}

impl InwardDetailPage {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api, record: None }
    }

    pub async fn load(&mut self, id: &str, admin_scope: bool) -> Option<Toast> {
        let fetched = if admin_scope {
            inwards::admin_by_id(&self.api, id).await
        } else {
            inwards::my_by_id(&self.api, id).await
        };
        match fetched {
            Ok(record) => {
                self.record = Some(record);
                None
            }
            Err(err) => {
                tracing::error!(error = %err, "inward detail fetch failed");
                Some(Toast::error("Failed to load inward entry"))
            }
        }
    }

    /// Apply an admin correction and refetch the updated record
    pub async fn save_admin_edit(&mut self, update: AdminInwardUpdate) -> Result<(), Toast> {
        let Some(id) = self.record.as_ref().map(|r| r.id.clone()) else {
            return Err(Toast::error("Failed to update inward entry"));
        };
        if let Err(err) = inwards::admin_update(&self.api, &id, &update).await {
            tracing::error!(error = %err, "inward update failed");
            return Err(Toast::error("Failed to update inward entry"));
        }
        match self.load(&id, true).await {
            Some(toast) => Err(toast),
            None => Ok(()),
        }
    }
}

/// Admin inward summary: search, date range, column sort, CSV export
pub struct AdminInwardPage {
    api: Arc<ApiClient>,
    rows: Vec<InwardRecord>,
    pub search: String,
    pub range: DateRange,
    pub sort: SortState<InwardColumn>,
}

impl AdminInwardPage {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self {
            api,
            rows: Vec::new(),
            search: String::new(),
            range: DateRange::default(),
            sort: default_inward_sort(),
        }
    }

    pub async fn load(&mut self) -> Option<Toast> {
        match inwards::admin(&self.api).await {
            Ok(rows) => {
                self.rows = rows;
                None
            }
            Err(err) => {
                tracing::error!(error = %err, "admin inward fetch failed");
                Some(Toast::error("Failed to load inward summary"))
            }
        }
    }

    pub fn toggle_sort(&mut self, column: InwardColumn) {
        self.sort.toggle(column);
    }

    pub fn visible(&self) -> Vec<&InwardRecord> {
        let mut view = filter_inwards(&self.rows, &self.search, &self.range);
        sort_inwards(&mut view, self.sort);
        view
    }

    /// Export the currently visible rows
    pub fn export(&self) -> ClientResult<CsvExport> {
        export_inwards(&self.visible(), Utc::now())
    }
}
