//! Univariate Outlier Filters
//!
//! Split the rows of a Polars [`DataFrame`](polars::prelude::DataFrame) into
//! outliers and cleaned rows, judged on a single numeric column.
//!
//! # Overview
//!
//! Two rules are available:
//!
//! - **Tukey's fences** ([`find_outliers_iqr`]): bounds
//!   `q1 - left*IQR` and `q3 + right*IQR`, defaults `left = right = 1.5`.
//!   Log scaling uses `ln(x)`.
//! - **Z-score band** ([`find_outliers_z_score`]): bounds
//!   `mean - left*std` and `mean + right*std` with the sample standard
//!   deviation, defaults `left = right = 3`. Log scaling uses `ln(x + 1)`.
//!
//! A value equal to a bound counts as cleaned. The input frame is never
//! modified.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use lex_outliers::{FilterConfig, OutlierMethod, find_outliers_iqr};
//! use polars::prelude::*;
//!
//! let df = df!["price" => [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 100.0]]?;
//!
//! // Plain call with the defaults
//! let (outliers, cleaned) = find_outliers_iqr(&df, "price", FilterConfig::iqr())?;
//!
//! // Custom multipliers, log scaling and strict validation
//! let config = FilterConfig::builder(OutlierMethod::ZScore)
//!     .log_scale(true)
//!     .multipliers(2.0, 3.0)
//!     .strict()
//!     .build()?;
//!
//! let split = OutlierMethod::ZScore.split(&df, "price", config)?;
//! println!("bounds: {}", split.bounds());
//! println!("{}", split.summary.to_json_pretty()?);
//! ```
//!
//! # Non-finite values
//!
//! In the default [`ValidationMode::Permissive`] mode nothing is checked
//! beyond the column lookup and dtype. `ln(0)` and the log of negative
//! values produce `-inf`/NaN, which flow into the bounds and comparisons
//! unchanged. A row whose transformed value is NaN (or null) matches neither
//! predicate and appears in neither output; [`SplitSummary`] reports how many
//! such rows there were. Use [`ValidationMode::Strict`] to reject these
//! inputs up front.

pub mod config;
pub mod error;
pub mod filters;
pub mod types;
pub mod utils;

// Re-exports for convenient access
pub use config::{ConfigValidationError, FilterConfig, FilterConfigBuilder, ValidationMode};
pub use error::{OutlierError, Result as OutlierResult, ResultExt};
pub use filters::{find_outliers_iqr, find_outliers_z_score, numeric_column};
pub use types::{Bounds, OutlierMethod, OutlierSplit, SplitSummary};
