//! SeoCalc Core Library
//!
//! Pricing engine and session state for the SEO cost calculator.
//! Provides functionality to:
//! - Describe the fixed service catalog and project multipliers
//! - Compute a deterministic quote with a per-line cost breakdown
//! - Hold the per-session selection with a quote derived on every change
//! - Export results as an indented JSON document
//!
//! # Architecture
//! - `domain`: Pure data models (catalog, selection)
//! - `pricing`: The pure, infallible quote computation
//! - `application`: The stateful session service used by front ends
//! - `export`: JSON result export (the only persisted artifact)
//!
//! The engine never validates or rejects input: values are bounded by the
//! surrounding UI controls and clamped once at the application layer.

pub mod application;
pub mod currency;
pub mod domain;
pub mod error;
pub mod export;
pub mod pricing;

// Re-export domain types (primary API)
pub use domain::{
    find_service, services_in_category, BusinessSize, CalculatorSelection, CompetitionLevel,
    Service, ServiceCategory, SERVICE_CATALOG,
};

// Re-export other commonly used types
pub use application::Calculator;
pub use currency::format_usd;
pub use error::{Error, Result};
pub use export::{ExportPayload, QuoteExporter, EXPORT_FILE_NAME};
pub use pricing::{compute_quote, is_recurring, Quote, RETAINER_LABEL};
