//! Notification endpoints

use shared::models::Notification;

use super::ApiClient;
use crate::error::ClientResult;

pub async fn list(api: &ApiClient) -> ClientResult<Vec<Notification>> {
    api.get("/notifications").await
}

pub async fn mark_read(api: &ApiClient, id: &str) -> ClientResult<()> {
    api.put_empty(&format!("/notifications/{}/read", id)).await
}
