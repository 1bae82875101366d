//! Row partitioning by bounds.

use polars::prelude::*;
use tracing::debug;

use crate::error::Result;
use crate::types::Bounds;

/// Rows split by a pair of boolean masks.
pub(crate) struct Partition {
    pub outliers: DataFrame,
    pub cleaned: DataFrame,
    /// Rows matched by neither mask (null or NaN value).
    pub unclassified: usize,
}

/// Split `data` into rows outside and inside `bounds`, judged on `values`.
///
/// `values` must be index-aligned with `data`. Nulls and NaNs satisfy
/// neither predicate.
pub(crate) fn partition(
    data: &DataFrame,
    values: &Float64Chunked,
    bounds: Bounds,
) -> Result<Partition> {
    let mut outlier_mask = Vec::with_capacity(values.len());
    let mut cleaned_mask = Vec::with_capacity(values.len());
    let mut unclassified = 0;

    for opt_val in values.into_iter() {
        let (is_outlier, is_cleaned) = match opt_val {
            Some(val) => (bounds.excludes(val), bounds.contains(val)),
            None => (false, false),
        };
        if !is_outlier && !is_cleaned {
            unclassified += 1;
        }
        outlier_mask.push(is_outlier);
        cleaned_mask.push(is_cleaned);
    }

    let outliers = data.filter(&BooleanChunked::from_slice("outliers".into(), &outlier_mask))?;
    let cleaned = data.filter(&BooleanChunked::from_slice("cleaned".into(), &cleaned_mask))?;

    debug!(
        "Partitioned {} rows: {} outliers, {} cleaned, {} unclassified",
        data.height(),
        outliers.height(),
        cleaned.height(),
        unclassified
    );

    Ok(Partition {
        outliers,
        cleaned,
        unclassified,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partition_keeps_all_columns() {
        let df = df![
            "id" => [1, 2, 3, 4],
            "value" => [0.0, 5.0, 10.0, 11.0],
        ]
        .unwrap();
        let values = df.column("value").unwrap().f64().unwrap().clone();

        let parts = partition(&df, &values, Bounds::new(0.0, 10.0)).unwrap();

        assert_eq!(parts.outliers.width(), 2);
        assert_eq!(parts.outliers.height(), 1);
        assert_eq!(parts.cleaned.height(), 3);
        assert_eq!(parts.unclassified, 0);

        let ids = parts.outliers.column("id").unwrap().i32().unwrap();
        assert_eq!(ids.get(0), Some(4));
    }

    #[test]
    fn test_partition_null_and_nan_unclassified() {
        let df = df!["value" => [Some(1.0), None, Some(f64::NAN), Some(50.0)]].unwrap();
        let values = df.column("value").unwrap().f64().unwrap().clone();

        let parts = partition(&df, &values, Bounds::new(0.0, 10.0)).unwrap();

        assert_eq!(parts.outliers.height(), 1);
        assert_eq!(parts.cleaned.height(), 1);
        assert_eq!(parts.unclassified, 2);
    }

    #[test]
    fn test_partition_empty_frame() {
        let df = df!["value" => Vec::<f64>::new()].unwrap();
        let values = df.column("value").unwrap().f64().unwrap().clone();

        let parts = partition(&df, &values, Bounds::new(f64::NAN, f64::NAN)).unwrap();
        assert_eq!(parts.outliers.height(), 0);
        assert_eq!(parts.cleaned.height(), 0);
        assert_eq!(parts.unclassified, 0);
    }
}
