//! Shared helpers for dtype checks and value counting.

use polars::prelude::*;

/// Check if a DataType is numeric (integer or float).
#[inline]
pub fn is_numeric_dtype(dtype: &DataType) -> bool {
    matches!(
        dtype,
        DataType::Int8
            | DataType::Int16
            | DataType::Int32
            | DataType::Int64
            | DataType::UInt8
            | DataType::UInt16
            | DataType::UInt32
            | DataType::UInt64
            | DataType::Float32
            | DataType::Float64
    )
}

/// Count present values that are NaN or infinite.
pub fn count_non_finite(values: &Float64Chunked) -> usize {
    values
        .into_iter()
        .flatten()
        .filter(|v| !v.is_finite())
        .count()
}

/// Count present values matching a predicate. Nulls are skipped.
pub fn count_where(values: &Float64Chunked, predicate: impl Fn(f64) -> bool) -> usize {
    values.into_iter().flatten().filter(|v| predicate(*v)).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_numeric_dtype() {
        assert!(is_numeric_dtype(&DataType::Int64));
        assert!(is_numeric_dtype(&DataType::UInt8));
        assert!(is_numeric_dtype(&DataType::Float32));
        assert!(!is_numeric_dtype(&DataType::String));
        assert!(!is_numeric_dtype(&DataType::Boolean));
    }

    #[test]
    fn test_count_non_finite() {
        let ca = Float64Chunked::from_slice_options(
            "x".into(),
            &[Some(1.0), Some(f64::NAN), None, Some(f64::NEG_INFINITY)],
        );
        assert_eq!(count_non_finite(&ca), 2);
    }

    #[test]
    fn test_count_where_skips_nulls() {
        let ca =
            Float64Chunked::from_slice_options("x".into(), &[Some(-1.0), None, Some(0.0), Some(2.0)]);
        assert_eq!(count_where(&ca, |v| v <= 0.0), 2);
    }
}
