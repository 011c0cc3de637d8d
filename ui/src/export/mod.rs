//! Metrics export: build the (label, value) table, render it to PDF and
//! hand the bytes to the platform download sink.

mod download;
mod pdf;

pub use download::download_bytes;
#[cfg(not(target_arch = "wasm32"))]
pub use download::write_export;
pub use pdf::render_pdf;

use time::OffsetDateTime;

use crate::core::format::{format_metric, CURRENCY_CODE};
use crate::core::{CampaignType, DerivedMetrics, MetricKind};

pub const EXPORT_FILENAME: &str = "campaign_analysis.pdf";
pub const TABLE_HEADER: (&str, &str) = ("Metric", "Value");

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("PDF rendering failed: {0}")]
    Render(String),
    #[error("couldn't deliver export: {0}")]
    Delivery(String),
    #[error("export I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Ordered metric table handed to the renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportTable {
    pub title: String,
    pub campaign_type: CampaignType,
    pub rows: Vec<(String, String)>,
}

impl ExportTable {
    pub fn from_metrics(metrics: &DerivedMetrics, campaign_type: CampaignType) -> Self {
        let rows = MetricKind::ALL
            .into_iter()
            .map(|kind| {
                (
                    kind.abbreviation().to_string(),
                    format_metric(kind, metrics.get(kind), CURRENCY_CODE),
                )
            })
            .collect();

        Self {
            title: "Campaign performance analysis".to_string(),
            campaign_type,
            rows,
        }
    }
}

/// Render and deliver the table. The `Ok` message describes where the
/// document went.
pub async fn perform_pdf_export(table: ExportTable) -> Result<String, String> {
    let bytes = render_pdf(&table, OffsetDateTime::now_utc()).map_err(|err| err.to_string())?;
    let delivery = download_bytes(EXPORT_FILENAME, "application/pdf", bytes)
        .await
        .map_err(|err| err.to_string())?;

    tracing::info!(rows = table.rows.len(), "exported {EXPORT_FILENAME}");
    Ok(match delivery {
        Some(path) => crate::t!("export-saved", path = path),
        None => crate::t!("export-download-started"),
    })
}
