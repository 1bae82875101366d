//! Tukey's fences.
//!
//! With `q1`, `q3` the 25th and 75th percentile of the feature and
//! `iqr = q3 - q1`, rows outside `[q1 - left*iqr, q3 + right*iqr]` are
//! outliers. Under log scaling the feature is replaced by `ln(x)`, so zero or
//! negative values turn into `-inf` or NaN. Those are not trapped in
//! permissive mode. When a quartile falls between `-inf` and a finite value
//! past the midpoint it stays `-inf`, so the fences open to `(-inf, inf)`
//! and every row with a non-NaN value is cleaned.

use polars::prelude::*;
use tracing::debug;

use super::statistics::quartiles;
use crate::config::FilterConfig;
use crate::error::Result;
use crate::types::{Bounds, OutlierMethod};

/// Compute Tukey's fences over already transformed values.
pub(crate) fn fences(values: &Float64Chunked, config: &FilterConfig) -> Bounds {
    let (q1, q3) = quartiles(values);
    let iqr = q3 - q1;
    let bounds = Bounds::new(q1 - iqr * config.left, q3 + iqr * config.right);

    debug!(
        "IQR fences: q1={}, q3={}, iqr={}, bounds={}",
        q1, q3, iqr, bounds
    );
    bounds
}

/// Split `data` into `(outliers, cleaned)` by Tukey's fences on `feature`.
///
/// # Example
///
/// ```rust,ignore
/// use lex_outliers::{FilterConfig, find_outliers_iqr};
///
/// let (outliers, cleaned) = find_outliers_iqr(&df, "price", FilterConfig::iqr())?;
/// ```
///
/// # Errors
///
/// Fails if `feature` is missing or not numeric, if `config` has a negative
/// or non-finite multiplier, or, in strict mode, on invalid input values.
pub fn find_outliers_iqr(
    data: &DataFrame,
    feature: &str,
    config: FilterConfig,
) -> Result<(DataFrame, DataFrame)> {
    Ok(OutlierMethod::Iqr.split(data, feature, config)?.into_parts())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ValidationMode;

    fn config(left: f64, right: f64) -> FilterConfig {
        FilterConfig {
            log_scale: false,
            left,
            right,
            validation: ValidationMode::Permissive,
        }
    }

    #[test]
    fn test_fences_known_values() {
        let values: Vec<f64> = (1..=9).map(f64::from).chain([100.0]).collect();
        let ca = Float64Chunked::from_vec("x".into(), values);

        let bounds = fences(&ca, &FilterConfig::iqr());
        assert!((bounds.lower - -3.5).abs() < 1e-12);
        assert!((bounds.upper - 14.5).abs() < 1e-12);
    }

    #[test]
    fn test_fences_asymmetric_multipliers() {
        let ca = Float64Chunked::from_slice("x".into(), &[0.0, 2.0, 3.0, 4.0, 6.0]);

        let bounds = fences(&ca, &config(0.0, 2.0));
        assert_eq!(bounds, Bounds::new(2.0, 8.0));
    }

    #[test]
    fn test_fences_zero_iqr() {
        let ca = Float64Chunked::from_slice("x".into(), &[5.0, 5.0, 5.0]);
        let bounds = fences(&ca, &FilterConfig::iqr());
        assert_eq!(bounds, Bounds::new(5.0, 5.0));
    }

    #[test]
    fn test_find_outliers_iqr_known_split() {
        let df = df![
            "value" => [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 100.0],
        ]
        .unwrap();

        let (outliers, cleaned) = find_outliers_iqr(&df, "value", FilterConfig::iqr()).unwrap();

        assert_eq!(outliers.height(), 1);
        assert_eq!(cleaned.height(), 9);
        let col = outliers.column("value").unwrap().f64().unwrap();
        assert_eq!(col.get(0), Some(100.0));
    }

    #[test]
    fn test_find_outliers_iqr_boundary_is_cleaned() {
        // q1 = 2, q3 = 4, iqr = 2 -> bounds [0, 6]
        let df = df!["value" => [0.0, 2.0, 3.0, 4.0, 6.0]].unwrap();

        let (outliers, cleaned) = find_outliers_iqr(&df, "value", config(1.0, 1.0)).unwrap();

        assert_eq!(outliers.height(), 0);
        assert_eq!(cleaned.height(), 5);
    }
}
