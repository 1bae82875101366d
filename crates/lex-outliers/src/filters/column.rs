//! Typed column access and the log transform.

use polars::prelude::*;
use tracing::debug;

use crate::error::{OutlierError, Result};
use crate::utils::is_numeric_dtype;

/// Fetch a numeric column by name as `Float64`.
///
/// Integer and float columns are cast to `Float64`; nulls are kept in place
/// so the result stays index-aligned with `df`.
pub fn numeric_column(df: &DataFrame, name: &str) -> Result<Float64Chunked> {
    let column = df
        .column(name)
        .map_err(|_| OutlierError::ColumnNotFound(name.to_string()))?;

    let dtype = column.dtype();
    if !is_numeric_dtype(dtype) {
        return Err(OutlierError::NonNumericColumn {
            column: name.to_string(),
            dtype: dtype.to_string(),
        });
    }

    let series = column.as_materialized_series().cast(&DataType::Float64)?;
    Ok(series.f64()?.clone())
}

/// Element-wise `ln(x + offset)`.
///
/// Values at or below `-offset` become `-inf` or NaN and are left as such.
pub(crate) fn log_transform(values: &Float64Chunked, offset: f64) -> Float64Chunked {
    debug!("Applying ln(x + {}) to {} values", offset, values.len());
    values.apply(|v| v.map(|x| (x + offset).ln()))
}
