//! Page-level data controllers
//!
//! Each page owns its private copy of fetched data, derives its visible
//! view from local filter/sort state, and submits forms back through the
//! API client. Fetch failures surface as transient toasts with the page
//! left empty or stale; nothing is retried automatically.

mod catalog;
mod dashboard;
mod discrepancy;
mod inward;
mod login;
mod notifications;
mod outward;

pub use catalog::{CatalogPage, InventorySummaryPage};
pub use dashboard::{AdminDashboardPage, InventoryDashboardPage, RevenueBoardPage};
pub use discrepancy::{DiscrepancyDetailPage, DiscrepancyListPage, ResolveOutcome};
pub use inward::{AdminInwardPage, InwardDetailPage, InwardFormPage, InwardListPage};
pub use login::{LoginOutcome, LoginPage};
pub use notifications::NotificationsPage;
pub use outward::{AdminOutwardPage, OutwardDetailPage, OutwardFormPage, OutwardListPage};

use rust_decimal::Decimal;

use shared::validation::FieldErrors;

use crate::session::Route;

/// A transient failure banner
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub message: String,
}

impl Toast {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// What the user must confirm before a submission proceeds
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Confirmation {
    /// Received quantity is above the billed quantity (legitimate
    /// over-receipt, but it needs an explicit go-ahead)
    ReceivedExceedsBill,
    /// Requested outward quantity is above the item's current stock
    QuantityExceedsStock {
        requested: Decimal,
        current_stock: Decimal,
    },
}

/// Result of a form submission attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Saved(Route),
    NeedsConfirmation(Confirmation),
    Invalid(FieldErrors),
    Failed(Toast),
}
