//! Custom error types for the outlier filters.
//!
//! This module provides the error hierarchy using `thiserror`. Structural
//! failures (missing or non-numeric column, Polars failures) can occur in any
//! mode; the remaining variants are only produced by strict validation.
//!
//! Errors are serializable so they can be handed to a frontend as
//! `{ "code": ..., "message": ... }`.

use serde::Serialize;
use serde::ser::SerializeStruct;
use thiserror::Error;

use crate::config::ConfigValidationError;

/// The main error type for outlier detection.
#[derive(Error, Debug)]
pub enum OutlierError {
    /// Column was not found in the dataset.
    #[error("Column '{0}' not found in dataset")]
    ColumnNotFound(String),

    /// Column exists but does not hold integer or floating point values.
    #[error("Column '{column}' is not numeric (dtype: {dtype})")]
    NonNumericColumn { column: String, dtype: String },

    /// The dataset has no rows.
    #[error("Dataset is empty")]
    EmptyDataset,

    /// The feature column contains missing values.
    #[error("Column '{column}' contains {count} null value(s)")]
    NullValues { column: String, count: usize },

    /// The feature column contains NaN or infinite values.
    #[error("Column '{column}' contains {count} non-finite value(s)")]
    NonFiniteValues { column: String, count: usize },

    /// Values outside the domain of the log transform.
    #[error("Column '{column}' has {count} value(s) outside the log transform domain")]
    NonPositiveForLog { column: String, count: usize },

    /// Not enough observations to compute the statistic.
    #[error("Column '{column}' needs at least {required} value(s), found {actual}")]
    InsufficientData {
        column: String,
        required: usize,
        actual: usize,
    },

    /// Invalid filter configuration.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Polars error wrapper.
    #[error("Polars error: {0}")]
    Polars(#[from] polars::error::PolarsError),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error with context.
    #[error("{context}: {source}")]
    WithContext {
        context: String,
        #[source]
        source: Box<OutlierError>,
    },
}

impl OutlierError {
    /// Add context to an error.
    pub fn with_context(self, context: impl Into<String>) -> Self {
        OutlierError::WithContext {
            context: context.into(),
            source: Box::new(self),
        }
    }

    /// Get error code for frontend handling.
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::ColumnNotFound(_) => "COLUMN_NOT_FOUND",
            Self::NonNumericColumn { .. } => "NON_NUMERIC_COLUMN",
            Self::EmptyDataset => "EMPTY_DATASET",
            Self::NullValues { .. } => "NULL_VALUES",
            Self::NonFiniteValues { .. } => "NON_FINITE_VALUES",
            Self::NonPositiveForLog { .. } => "NON_POSITIVE_FOR_LOG",
            Self::InsufficientData { .. } => "INSUFFICIENT_DATA",
            Self::InvalidConfig(_) => "INVALID_CONFIG",
            Self::Polars(_) => "POLARS_ERROR",
            Self::Json(_) => "JSON_ERROR",
            Self::WithContext { source, .. } => source.error_code(),
        }
    }

    /// Check if this error was raised by strict input validation.
    pub fn is_validation(&self) -> bool {
        match self {
            Self::EmptyDataset
            | Self::NullValues { .. }
            | Self::NonFiniteValues { .. }
            | Self::NonPositiveForLog { .. }
            | Self::InsufficientData { .. } => true,
            Self::WithContext { source, .. } => source.is_validation(),
            _ => false,
        }
    }
}

impl From<ConfigValidationError> for OutlierError {
    fn from(err: ConfigValidationError) -> Self {
        OutlierError::InvalidConfig(err.to_string())
    }
}

/// Errors are serialized as a struct with `code` and `message` fields.
impl Serialize for OutlierError {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut state = serializer.serialize_struct("OutlierError", 2)?;
        state.serialize_field("code", &self.error_code())?;
        state.serialize_field("message", &self.to_string())?;
        state.end()
    }
}

/// Result type alias for outlier operations.
pub type Result<T> = std::result::Result<T, OutlierError>;

/// Extension trait for adding context to Results.
pub trait ResultExt<T> {
    /// Add context to an error result.
    fn context(self, context: impl Into<String>) -> Result<T>;
}

impl<T> ResultExt<T> for Result<T> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.with_context(context))
    }
}
