//! Error types for the seocalc-core library.

use thiserror::Error;

/// Result type alias for calculator operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while parsing input or exporting results.
///
/// The pricing engine itself is infallible; errors only arise at the edges
/// (textual input, file IO).
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Failed to write an export file.
    #[error("Export failed: {0}")]
    Export(String),

    /// Failed to parse a textual input value.
    #[error("Invalid value {input:?}: expected one of {expected}")]
    Parse {
        input: String,
        expected: &'static str,
    },
}
