//! Discrepancy review endpoints

use serde::{Deserialize, Serialize};

use shared::models::DiscrepancyEntry;

use super::{ApiClient, ListEnvelope};
use crate::error::ClientResult;

#[derive(Debug, Serialize)]
struct ResolveRequest {
    #[serde(rename = "resolutionRemarks", skip_serializing_if = "Option::is_none")]
    resolution_remarks: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CountResponse {
    count: u64,
}

/// Discrepancies awaiting review
pub async fn pending(api: &ApiClient) -> ClientResult<Vec<DiscrepancyEntry>> {
    let envelope: ListEnvelope<DiscrepancyEntry> =
        api.get("/admin/discrepancies/pending").await?;
    Ok(envelope.data)
}

/// Already-resolved discrepancies
pub async fn history(api: &ApiClient) -> ClientResult<Vec<DiscrepancyEntry>> {
    let envelope: ListEnvelope<DiscrepancyEntry> =
        api.get("/admin/discrepancies/history").await?;
    Ok(envelope.data)
}

pub async fn pending_count(api: &ApiClient) -> ClientResult<u64> {
    let response: CountResponse = api.get("/admin/discrepancies/pending-count").await?;
    Ok(response.count)
}

/// Mark a discrepancy resolved, optionally recording how
pub async fn resolve(
    api: &ApiClient,
    id: &str,
    resolution_remarks: Option<String>,
) -> ClientResult<()> {
    api.put(
        &format!("/admin/discrepancies/{}/resolve", id),
        &ResolveRequest { resolution_remarks },
    )
    .await
}
