//! Discrepancy review pages

use std::sync::Arc;

use shared::models::{DiscrepancyEntry, DiscrepancyStatus, InwardRecord};

use crate::api::{discrepancies, inwards, ApiClient};
use crate::services::listing::{filter_discrepancies, order_discrepancies};
use crate::session::Route;

use super::Toast;

/// Merged pending + resolved review list
pub struct DiscrepancyListPage {
    api: Arc<ApiClient>,
    rows: Vec<DiscrepancyEntry>,
    pub search: String,
}

impl DiscrepancyListPage {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self {
            api,
            rows: Vec::new(),
            search: String::new(),
        }
    }

    /// Fetch both tiers and stamp the resolved flag while merging
    pub async fn load(&mut self) -> Option<Toast> {
        let pending = discrepancies::pending(&self.api).await;
        let history = discrepancies::history(&self.api).await;

        match (pending, history) {
            (Ok(pending), Ok(history)) => {
                let mut rows = Vec::with_capacity(pending.len() + history.len());
                rows.extend(pending.into_iter().map(|mut entry| {
                    entry.resolved = false;
                    entry
                }));
                rows.extend(history.into_iter().map(|mut entry| {
                    entry.resolved = true;
                    entry
                }));
                self.rows = rows;
                None
            }
            (pending, history) => {
                if let Err(err) = pending {
                    tracing::error!(error = %err, "pending discrepancy fetch failed");
                }
                if let Err(err) = history {
                    tracing::error!(error = %err, "resolved discrepancy fetch failed");
                }
                Some(Toast::error("Failed to load discrepancies"))
            }
        }
    }

    /// Search-filtered rows in the fixed two-tier order
    pub fn visible(&self) -> Vec<&DiscrepancyEntry> {
        let mut view = filter_discrepancies(&self.rows, &self.search);
        order_discrepancies(&mut view);
        view
    }
}

/// Outcome of a resolve attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolveOutcome {
    Resolved(Route),
    /// Resolution is terminal; an already-resolved record cannot be
    /// resolved again
    AlreadyResolved,
    Failed(Toast),
}

/// Single discrepancy with the resolve action
pub struct DiscrepancyDetailPage {
    api: Arc<ApiClient>,
    pub record: Option<InwardRecord>,
    pub resolution_remarks: String,
}

impl DiscrepancyDetailPage {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self {
            api,
            record: None,
            resolution_remarks: String::new(),
        }
    }

    pub async fn load(&mut self, id: &str) -> Option<Toast> {
        match inwards::my_by_id(&self.api, id).await {
            Ok(record) => {
                self.record = Some(record);
                None
            }
            Err(err) => {
                tracing::error!(error = %err, "discrepancy fetch failed");
                Some(Toast::error("Failed to load discrepancy"))
            }
        }
    }

    pub fn is_resolved(&self) -> bool {
        self.record
            .as_ref()
            .and_then(|record| record.discrepancy_status)
            .map(|status| status.is_terminal())
            .unwrap_or(false)
    }

    pub async fn resolve(&mut self) -> ResolveOutcome {
        let Some(id) = self.record.as_ref().map(|r| r.id.clone()) else {
            return ResolveOutcome::Failed(Toast::error("Failed to resolve"));
        };
        if self.is_resolved() {
            return ResolveOutcome::AlreadyResolved;
        }

        let remarks = match self.resolution_remarks.trim() {
            "" => None,
            text => Some(text.to_string()),
        };
        match discrepancies::resolve(&self.api, &id, remarks).await {
            Ok(()) => {
                if let Some(record) = self.record.as_mut() {
                    record.discrepancy_status = Some(DiscrepancyStatus::Resolved);
                }
                ResolveOutcome::Resolved(Route::AdminDiscrepancies)
            }
            Err(err) => {
                tracing::error!(error = %err, "discrepancy resolve failed");
                ResolveOutcome::Failed(Toast::error("Failed to resolve"))
            }
        }
    }
}
