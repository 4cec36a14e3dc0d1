//! Error types

use thiserror::Error;

/// Common error type
#[derive(Error, Debug)]
pub enum Error {
    /// A required column or sheet is absent, or the input has an unexpected shape.
    #[error("Schema error: {0}")]
    Schema(String),

    /// A field that must hold a value could not be used.
    #[error("Invalid value in row {row}, field {field}: {reason}")]
    InvalidValue {
        row: usize,
        field: String,
        reason: String,
    },

    #[error("Layout error: {0}")]
    Layout(String),

    #[error("Excel error: {0}")]
    Excel(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
