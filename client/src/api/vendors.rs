//! Vendor catalog endpoints

use shared::models::{Vendor, VendorInput};

use super::ApiClient;
use crate::error::ClientResult;

pub async fn list(api: &ApiClient) -> ClientResult<Vec<Vendor>> {
    api.get("/vendors").await
}

pub async fn active(api: &ApiClient) -> ClientResult<Vec<Vendor>> {
    api.get_with("/vendors", &[("activeOnly", "true".to_string())])
        .await
}

pub async fn create(api: &ApiClient, input: &VendorInput) -> ClientResult<()> {
    api.post("/vendors", input).await
}

pub async fn update(api: &ApiClient, id: &str, input: &VendorInput) -> ClientResult<()> {
    api.put(&format!("/vendors/{}", id), input).await
}

pub async fn soft_delete(api: &ApiClient, id: &str) -> ClientResult<()> {
    api.put_empty(&format!("/vendors/{}/soft-delete", id)).await
}

pub async fn restore(api: &ApiClient, id: &str) -> ClientResult<()> {
    api.put_empty(&format!("/vendors/{}/restore", id)).await
}
