//! Dashboard aggregate endpoints

use shared::models::{AdminSummary, InventoryDashboard, RevenueBoard};

use super::ApiClient;
use crate::error::ClientResult;

pub async fn admin_summary(api: &ApiClient) -> ClientResult<AdminSummary> {
    api.get("/dashboard").await
}

pub async fn inventory(api: &ApiClient) -> ClientResult<InventoryDashboard> {
    api.get("/dashboard/inventory").await
}

pub async fn revenue_board(api: &ApiClient) -> ClientResult<RevenueBoard> {
    api.get("/dashboard/revenue-board").await
}
