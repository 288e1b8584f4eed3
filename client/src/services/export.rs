//! CSV export of the filtered inward/outward summaries
//!
//! The exporter produces the CSV text and a timestamped filename; handing
//! the blob to the browser for download is the host UI's job. The outward
//! export quotes every field; the inward export uses minimal quoting, with
//! embedded commas and quotes escaped properly.

use anyhow::anyhow;
use chrono::{DateTime, Utc};
use csv::{QuoteStyle, WriterBuilder};

use shared::models::{InwardRecord, OutwardRecord};

use crate::error::{ClientError, ClientResult};

/// A ready-to-download export
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvExport {
    pub filename: String,
    pub content: String,
}

pub const INWARD_EXPORT_HEADERS: [&str; 11] = [
    "Item",
    "Vendor",
    "Type",
    "Unit",
    "Bill Quantity",
    "Received Quantity",
    "Rejected Quantity",
    "Item Missing",
    "Actual Quantity",
    "Entered By",
    "Date",
];

pub const OUTWARD_EXPORT_HEADERS: [&str; 8] = [
    "Date",
    "Type",
    "Item",
    "Vendor",
    "Quantity",
    "Unit",
    "Entered By",
    "Remarks",
];

fn display_date(timestamp: Option<DateTime<Utc>>) -> String {
    timestamp
        .map(|t| t.format("%d/%m/%Y").to_string())
        .unwrap_or_default()
}

fn into_text(writer: csv::Writer<Vec<u8>>) -> ClientResult<String> {
    let bytes = writer
        .into_inner()
        .map_err(|err| ClientError::Internal(anyhow!("flushing CSV buffer: {err}")))?;
    String::from_utf8(bytes).map_err(|err| ClientError::Internal(anyhow!("CSV not UTF-8: {err}")))
}

/// Export the (already filtered and sorted) inward summary
pub fn export_inwards(
    rows: &[&InwardRecord],
    exported_at: DateTime<Utc>,
) -> ClientResult<CsvExport> {
    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Necessary)
        .from_writer(Vec::new());

    writer.write_record(INWARD_EXPORT_HEADERS)?;
    for row in rows {
        writer.write_record([
            row.item_name().to_string(),
            row.vendor_name().to_string(),
            row.transaction_type
                .map(|t| t.as_str().to_string())
                .unwrap_or_default(),
            row.unit.map(|u| u.as_str().to_string()).unwrap_or_default(),
            row.quantity_on_bill.to_string(),
            row.quantity_received.to_string(),
            row.quantity_rejected.to_string(),
            row.quantity_discrepancy.to_string(),
            row.quantity_actual.to_string(),
            row.entered_by().to_string(),
            display_date(row.created_at),
        ])?;
    }

    Ok(CsvExport {
        filename: format!("inward-summary-{}.csv", exported_at.timestamp_millis()),
        content: into_text(writer)?,
    })
}

/// Export the (already filtered and sorted) outward summary
pub fn export_outwards(
    rows: &[&OutwardRecord],
    exported_at: DateTime<Utc>,
) -> ClientResult<CsvExport> {
    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .from_writer(Vec::new());

    writer.write_record(OUTWARD_EXPORT_HEADERS)?;
    for row in rows {
        writer.write_record([
            display_date(row.created_at),
            row.transaction_type
                .map(|t| t.as_str().to_string())
                .unwrap_or_default(),
            row.item_name().to_string(),
            row.vendor_name().to_string(),
            row.quantity.to_string(),
            row.unit.map(|u| u.as_str().to_string()).unwrap_or_default(),
            row.entered_by().to_string(),
            row.remarks.clone().unwrap_or_default(),
        ])?;
    }

    Ok(CsvExport {
        filename: format!(
            "outward-transactions-{}.csv",
            exported_at.timestamp_millis()
        ),
        content: into_text(writer)?,
    })
}
