//! Core types shared by the outlier filters.

use polars::prelude::DataFrame;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::Result;

/// Statistical rule used to derive the outlier bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutlierMethod {
    /// Tukey's fences: `q1 - left*IQR`, `q3 + right*IQR`.
    Iqr,
    /// Standard-deviation band: `mean - left*std`, `mean + right*std`.
    ZScore,
}

impl OutlierMethod {
    /// Default left/right multiplier for this method.
    pub fn default_multiplier(self) -> f64 {
        match self {
            Self::Iqr => 1.5,
            Self::ZScore => 3.0,
        }
    }

    /// Offset added to each value before the natural log is taken.
    ///
    /// The IQR rule uses `ln(x)`, the z-score rule `ln(x + 1)`.
    pub fn log_offset(self) -> f64 {
        match self {
            Self::Iqr => 0.0,
            Self::ZScore => 1.0,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Iqr => "iqr",
            Self::ZScore => "z_score",
        }
    }
}

impl fmt::Display for OutlierMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lower and upper bound of the accepted range, both inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub lower: f64,
    pub upper: f64,
}

impl Bounds {
    pub fn new(lower: f64, upper: f64) -> Self {
        Self { lower, upper }
    }

    /// `lower <= value <= upper`. False for NaN.
    #[inline]
    pub fn contains(&self, value: f64) -> bool {
        value >= self.lower && value <= self.upper
    }

    /// `value < lower || value > upper`. False for NaN.
    #[inline]
    pub fn excludes(&self, value: f64) -> bool {
        value < self.lower || value > self.upper
    }

    pub fn is_finite(&self) -> bool {
        self.lower.is_finite() && self.upper.is_finite()
    }
}

impl fmt::Display for Bounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.lower, self.upper)
    }
}

/// Serializable description of one split.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SplitSummary {
    pub method: OutlierMethod,
    pub feature: String,
    pub log_scale: bool,
    pub bounds: Bounds,
    pub total_rows: usize,
    pub outlier_count: usize,
    pub cleaned_count: usize,
    /// Rows whose transformed value is null or NaN. They satisfy neither
    /// predicate and appear in neither output frame.
    pub unclassified_count: usize,
    /// Transformed values that are infinite or NaN, e.g. `ln(0)` under
    /// IQR log scaling.
    pub non_finite_count: usize,
}

impl SplitSummary {
    /// Share of rows flagged as outliers (0.0 for an empty dataset).
    pub fn outlier_fraction(&self) -> f64 {
        if self.total_rows == 0 {
            0.0
        } else {
            self.outlier_count as f64 / self.total_rows as f64
        }
    }

    /// True when every input row landed in exactly one output.
    pub fn is_exhaustive(&self) -> bool {
        self.unclassified_count == 0
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Result of a filter: both partitions plus the bounds that produced them.
#[derive(Debug, Clone)]
pub struct OutlierSplit {
    /// Rows outside the bounds.
    pub outliers: DataFrame,
    /// Rows inside the bounds (inclusive).
    pub cleaned: DataFrame,
    pub summary: SplitSummary,
}

impl OutlierSplit {
    pub fn bounds(&self) -> Bounds {
        self.summary.bounds
    }

    /// Consume the split, returning `(outliers, cleaned)`.
    pub fn into_parts(self) -> (DataFrame, DataFrame) {
        (self.outliers, self.cleaned)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_inclusive() {
        let bounds = Bounds::new(-3.5, 14.5);
        assert!(bounds.contains(-3.5));
        assert!(bounds.contains(14.5));
        assert!(!bounds.excludes(-3.5));
        assert!(!bounds.excludes(14.5));
        assert!(bounds.excludes(100.0));
        assert!(bounds.excludes(-4.0));
    }

    #[test]
    fn test_bounds_nan_matches_neither() {
        let bounds = Bounds::new(0.0, 1.0);
        assert!(!bounds.contains(f64::NAN));
        assert!(!bounds.excludes(f64::NAN));

        let nan_bounds = Bounds::new(f64::NAN, f64::NAN);
        assert!(!nan_bounds.contains(0.5));
        assert!(!nan_bounds.excludes(0.5));
        assert!(!nan_bounds.is_finite());
    }

    #[test]
    fn test_bounds_infinite_values() {
        let bounds = Bounds::new(f64::NEG_INFINITY, 2.0);
        assert!(bounds.contains(f64::NEG_INFINITY));
        assert!(bounds.excludes(f64::INFINITY));
        assert!(!bounds.is_finite());
    }

    #[test]
    fn test_method_defaults() {
        assert_eq!(OutlierMethod::Iqr.default_multiplier(), 1.5);
        assert_eq!(OutlierMethod::ZScore.default_multiplier(), 3.0);
        assert_eq!(OutlierMethod::Iqr.log_offset(), 0.0);
        assert_eq!(OutlierMethod::ZScore.log_offset(), 1.0);
    }

    #[test]
    fn test_method_serialization() {
        let json = serde_json::to_string(&OutlierMethod::ZScore).unwrap();
        assert_eq!(json, "\"z_score\"");
        let method: OutlierMethod = serde_json::from_str("\"iqr\"").unwrap();
        assert_eq!(method, OutlierMethod::Iqr);
        assert_eq!(OutlierMethod::ZScore.to_string(), "z_score");
    }

    #[test]
    fn test_summary_fraction() {
        let summary = SplitSummary {
            method: OutlierMethod::Iqr,
            feature: "value".to_string(),
            log_scale: false,
            bounds: Bounds::new(-3.5, 14.5),
            total_rows: 10,
            outlier_count: 1,
            cleaned_count: 9,
            unclassified_count: 0,
            non_finite_count: 0,
        };
        assert!((summary.outlier_fraction() - 0.1).abs() < 1e-12);
        assert!(summary.is_exhaustive());

        let json = summary.to_json_pretty().unwrap();
        assert!(json.contains("\"outlier_count\": 1"));
        assert!(json.contains("\"method\": \"iqr\""));
    }
}
