//! Z-score band: `[mean - left*std, mean + right*std]`.
//!
//! `std` is the sample standard deviation. Log scaling uses `ln(x + 1)`, so
//! zero is a valid input; values at or below -1 are not.

use polars::prelude::*;
use tracing::debug;

use super::statistics::mean_and_std;
use crate::config::FilterConfig;
use crate::error::Result;
use crate::types::{Bounds, OutlierMethod};

/// Compute the z-score band over already transformed values.
pub(crate) fn band(values: &Float64Chunked, config: &FilterConfig) -> Bounds {
    let (mu, sigma) = mean_and_std(values);
    let bounds = Bounds::new(mu - config.left * sigma, mu + config.right * sigma);

    debug!("Z-score band: mean={}, std={}, bounds={}", mu, sigma, bounds);
    bounds
}

/// Split `data` into `(outliers, cleaned)` by the z-score band on `feature`.
///
/// # Errors
///
/// Same as [`find_outliers_iqr`](super::find_outliers_iqr); strict mode
/// additionally requires at least two rows.
pub fn find_outliers_z_score(
    data: &DataFrame,
    feature: &str,
    config: FilterConfig,
) -> Result<(DataFrame, DataFrame)> {
    Ok(OutlierMethod::ZScore.split(data, feature, config)?.into_parts())
}
