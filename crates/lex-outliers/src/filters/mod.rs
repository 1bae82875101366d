//! Outlier filters.
//!
//! Both filters follow the same flow:
//!
//! 1. fetch the feature as `Float64` ([`numeric_column`])
//! 2. in strict mode, reject invalid input
//! 3. optionally log-transform the values
//! 4. derive [`Bounds`] from the method's statistic
//! 5. split the rows with two boolean masks
//!
//! The input frame is never modified; both outputs are fresh frames.

mod column;
mod iqr;
mod partition;
mod statistics;
mod z_score;

pub use column::numeric_column;
pub use iqr::find_outliers_iqr;
pub use z_score::find_outliers_z_score;

use polars::prelude::*;
use tracing::{debug, warn};

use crate::config::FilterConfig;
use crate::error::{OutlierError, Result, ResultExt};
use crate::types::{Bounds, OutlierMethod, OutlierSplit, SplitSummary};
use crate::utils::{count_non_finite, count_where};

impl OutlierMethod {
    /// Compute the bounds for `feature` without splitting the rows.
    pub fn bounds(self, data: &DataFrame, feature: &str, config: FilterConfig) -> Result<Bounds> {
        let values = self.prepare(data, feature, &config)?;
        Ok(self.bounds_of(&values, &config))
    }

    /// Split `data` into outliers and cleaned rows, keeping the bounds and
    /// counts alongside.
    pub fn split(
        self,
        data: &DataFrame,
        feature: &str,
        config: FilterConfig,
    ) -> Result<OutlierSplit> {
        let values = self.prepare(data, feature, &config)?;
        let non_finite_count = count_non_finite(&values);
        if non_finite_count > 0 {
            warn!(
                "{} non-finite value(s) in '{}' after transform ({} filter)",
                non_finite_count, feature, self
            );
        }

        let bounds = self.bounds_of(&values, &config);
        let parts = partition::partition(data, &values, bounds)
            .context(format!("Failed to split rows on '{}'", feature))?;

        let summary = SplitSummary {
            method: self,
            feature: feature.to_string(),
            log_scale: config.log_scale,
            bounds,
            total_rows: data.height(),
            outlier_count: parts.outliers.height(),
            cleaned_count: parts.cleaned.height(),
            unclassified_count: parts.unclassified,
            non_finite_count,
        };

        debug!(
            "{} filter on '{}': {} of {} rows flagged",
            self, feature, summary.outlier_count, summary.total_rows
        );

        Ok(OutlierSplit {
            outliers: parts.outliers,
            cleaned: parts.cleaned,
            summary,
        })
    }

    /// Validate, fetch and transform the feature column.
    fn prepare(
        self,
        data: &DataFrame,
        feature: &str,
        config: &FilterConfig,
    ) -> Result<Float64Chunked> {
        config.validate()?;
        let raw = numeric_column(data, feature)?;

        if config.is_strict() {
            self.check_input(data, feature, &raw, config)?;
        }

        if config.log_scale {
            Ok(column::log_transform(&raw, self.log_offset()))
        } else {
            Ok(raw)
        }
    }

    fn bounds_of(self, values: &Float64Chunked, config: &FilterConfig) -> Bounds {
        let bounds = match self {
            Self::Iqr => iqr::fences(values, config),
            Self::ZScore => z_score::band(values, config),
        };

        if !bounds.is_finite() {
            warn!("{} filter produced non-finite bounds {}", self, bounds);
        }
        bounds
    }

    /// Strict-mode checks on the raw column.
    fn check_input(
        self,
        data: &DataFrame,
        feature: &str,
        raw: &Float64Chunked,
        config: &FilterConfig,
    ) -> Result<()> {
        if data.height() == 0 {
            return Err(OutlierError::EmptyDataset);
        }

        let nulls = raw.null_count();
        if nulls > 0 {
            return Err(OutlierError::NullValues {
                column: feature.to_string(),
                count: nulls,
            });
        }

        let non_finite = count_non_finite(raw);
        if non_finite > 0 {
            return Err(OutlierError::NonFiniteValues {
                column: feature.to_string(),
                count: non_finite,
            });
        }

        if config.log_scale {
            let floor = -self.log_offset();
            let out_of_domain = count_where(raw, |v| v <= floor);
            if out_of_domain > 0 {
                return Err(OutlierError::NonPositiveForLog {
                    column: feature.to_string(),
                    count: out_of_domain,
                });
            }
        }

        if self == Self::ZScore && raw.len() < 2 {
            return Err(OutlierError::InsufficientData {
                column: feature.to_string(),
                required: 2,
                actual: raw.len(),
            });
        }

        Ok(())
    }
}
