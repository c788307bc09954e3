//! Error types for rust_volcano

use thiserror::Error;

/// Main error type for volcano report operations
#[derive(Error, Debug)]
pub enum VolcanoError {
    #[error("Missing required column '{column}' (available: {available})")]
    MissingColumn { column: String, available: String },

    #[error("Delimiter could not be detected in {path}. Please ensure the file uses comma, tab or space separators.")]
    UndetectableDelimiter { path: String },

    #[error("Invalid table: {reason}")]
    InvalidTable { reason: String },

    #[error("Dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch { expected: String, got: String },

    #[error("Invalid input: {reason}")]
    InvalidInput { reason: String },

    #[error("Empty data: {reason}")]
    EmptyData { reason: String },

    #[error("Plotting failed: {reason}")]
    Plot { reason: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV parsing error: {0}")]
    CsvError(#[from] csv::Error),
}

/// Result type alias for volcano report operations
pub type Result<T> = std::result::Result<T, VolcanoError>;
