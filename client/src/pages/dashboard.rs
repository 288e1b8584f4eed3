//! Dashboard pages for both roles, plus the gated revenue board

use std::sync::Arc;

use shared::models::{AdminSummary, AuthUser, InventoryDashboard, RevenueBoard, UserRole};

use crate::api::{dashboard, ApiClient};
use crate::session::{Route, RouteAccess};

use super::Toast;

/// Admin headline figures
pub struct AdminDashboardPage {
    api: Arc<ApiClient>,
    pub summary: AdminSummary,
}

impl AdminDashboardPage {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self {
            api,
            summary: AdminSummary::default(),
        }
    }

    pub async fn load(&mut self) -> Option<Toast> {
        match dashboard::admin_summary(&self.api).await {
            Ok(summary) => {
                self.summary = summary;
                None
            }
            Err(err) => {
                tracing::error!(error = %err, "dashboard fetch failed");
                Some(Toast::error("Failed to load dashboard"))
            }
        }
    }
}

/// Inventory landing page: the five most recent movements each way
pub struct InventoryDashboardPage {
    api: Arc<ApiClient>,
    pub recent: InventoryDashboard,
}

impl InventoryDashboardPage {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self {
            api,
            recent: InventoryDashboard::default(),
        }
    }

    pub async fn load(&mut self) -> Option<Toast> {
        match dashboard::inventory(&self.api).await {
            Ok(recent) => {
                self.recent = recent;
                None
            }
            Err(err) => {
                tracing::error!(error = %err, "inventory dashboard fetch failed");
                Some(Toast::error("Failed to load dashboard"))
            }
        }
    }
}

/// Revenue board, visible only to admins carrying the revenue flag
pub struct RevenueBoardPage {
    api: Arc<ApiClient>,
    pub board: RevenueBoard,
}

impl RevenueBoardPage {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self {
            api,
            board: RevenueBoard::default(),
        }
    }

    /// Page-level gate on top of the route guard: an admin without the
    /// revenue flag is bounced back to the admin dashboard
    pub fn check_access(user: Option<&AuthUser>) -> RouteAccess {
        match user {
            Some(user) if user.role == UserRole::Admin && user.can_view_revenue => {
                RouteAccess::Grant
            }
            _ => RouteAccess::Redirect(Route::Dashboard(UserRole::Admin)),
        }
    }

    pub async fn load(&mut self) -> Option<Toast> {
        match dashboard::revenue_board(&self.api).await {
            Ok(board) => {
                self.board = board;
                None
            }
            Err(err) => {
                tracing::error!(error = %err, "revenue board fetch failed");
                Some(Toast::error("Failed to load revenue board"))
            }
        }
    }
}
