//! Export of calculator results to a JSON file.
//!
//! Matches the original download format: `totalCost`, `breakdown`,
//! `settings` and an ISO-8601 `timestamp`, written as indented JSON to
//! `seo-cost-calculator-results.json`. This file is the only persisted
//! artifact the calculator produces.

use std::collections::BTreeMap;
use std::path::PathBuf;

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use tokio::fs;
use tokio::io::AsyncWriteExt;

use crate::domain::CalculatorSelection;
use crate::error::{Error, Result};
use crate::pricing::Quote;

/// Default file name for exported results.
pub const EXPORT_FILE_NAME: &str = "seo-cost-calculator-results.json";

/// The exported result document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportPayload {
    /// Total cost at export time.
    pub total_cost: f64,
    /// Per-line costs, keyed by display label.
    pub breakdown: BTreeMap<String, f64>,
    /// The full selection that produced the quote.
    pub settings: CalculatorSelection,
    /// ISO-8601 UTC timestamp of the export.
    pub timestamp: String,
}

impl ExportPayload {
    /// Build a payload from the current quote and selection, stamped now.
    pub fn new(quote: &Quote, selection: &CalculatorSelection) -> Self {
        Self {
            total_cost: quote.total,
            breakdown: quote.breakdown.clone(),
            settings: selection.clone(),
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}

/// Writes export payloads to disk.
///
/// Writes are atomic: the payload goes to a temp file which is then renamed
/// over the target path.
pub struct QuoteExporter {
    /// Directory the export file is written into.
    output_dir: PathBuf,
}

impl QuoteExporter {
    /// Exporter writing into the given directory.
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    /// Exporter writing into the current working directory.
    pub fn current_dir() -> Result<Self> {
        Ok(Self::new(std::env::current_dir()?))
    }

    /// Path the next export will be written to.
    pub fn output_path(&self) -> PathBuf {
        self.output_dir.join(EXPORT_FILE_NAME)
    }

    /// Write the payload as pretty-printed JSON.
    pub async fn export(&self, payload: &ExportPayload) -> Result<PathBuf> {
        if !self.output_dir.exists() {
            fs::create_dir_all(&self.output_dir).await.map_err(|e| {
                Error::Export(format!("Failed to create output directory: {}", e))
            })?;
        }

        let content = serde_json::to_string_pretty(payload)?;
        let path = self.output_path();
        let temp_path = path.with_extension("json.tmp");

        let mut file = fs::File::create(&temp_path)
            .await
            .map_err(|e| Error::Export(format!("Failed to create temp file: {}", e)))?;

        file.write_all(content.as_bytes())
            .await
            .map_err(|e| Error::Export(format!("Failed to write results: {}", e)))?;

        file.sync_all()
            .await
            .map_err(|e| Error::Export(format!("Failed to sync results: {}", e)))?;

        fs::rename(&temp_path, &path)
            .await
            .map_err(|e| Error::Export(format!("Failed to rename results file: {}", e)))?;

        tracing::info!(path = %path.display(), total = payload.total_cost, "exported calculator results");
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::SERVICE_CATALOG;
    use crate::pricing::compute_quote;
    use tempfile::tempdir;

    fn sample_state() -> (Quote, CalculatorSelection) {
        let mut selection = CalculatorSelection::new();
        selection.set_quantity("on-page-seo", 2);
        selection.set_quantity("local-seo", 1);
        selection.monthly_retainer = true;
        let quote = compute_quote(&selection, &SERVICE_CATALOG);
        (quote, selection)
    }

    #[test]
    fn test_payload_sums_and_roundtrips_settings() {
        let (quote, selection) = sample_state();
        let payload = ExportPayload::new(&quote, &selection);

        let sum: f64 = payload.breakdown.values().sum();
        assert_eq!(payload.total_cost, sum);
        assert_eq!(payload.settings, selection);
    }

    #[test]
    fn test_timestamp_is_iso8601() {
        let (quote, selection) = sample_state();
        let payload = ExportPayload::new(&quote, &selection);

        assert!(chrono::DateTime::parse_from_rfc3339(&payload.timestamp).is_ok());
        assert!(payload.timestamp.ends_with('Z'));
    }

    #[test]
    fn test_payload_key_shape() {
        let (quote, selection) = sample_state();
        let json = serde_json::to_value(ExportPayload::new(&quote, &selection)).unwrap();

        assert!(json["totalCost"].is_number());
        assert!(json["breakdown"].is_object());
        assert_eq!(json["settings"]["projectDuration"], 6);
        assert!(json["timestamp"].is_string());
    }

    #[tokio::test]
    async fn test_export_writes_file() {
        let dir = tempdir().unwrap();
        let exporter = QuoteExporter::new(dir.path());

        let (quote, selection) = sample_state();
        let payload = ExportPayload::new(&quote, &selection);
        let path = exporter.export(&payload).await.unwrap();

        assert_eq!(path, dir.path().join(EXPORT_FILE_NAME));

        let content = std::fs::read_to_string(&path).unwrap();
        let back: ExportPayload = serde_json::from_str(&content).unwrap();
        assert_eq!(back, payload);

        // No temp file left behind.
        assert!(!path.with_extension("json.tmp").exists());
    }

    #[tokio::test]
    async fn test_export_creates_missing_directory() {
        let dir = tempdir().unwrap();
        let exporter = QuoteExporter::new(dir.path().join("nested"));

        let (quote, selection) = sample_state();
        let payload = ExportPayload::new(&quote, &selection);
        let path = exporter.export(&payload).await.unwrap();
        assert!(path.exists());
    }
}
