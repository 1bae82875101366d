//! Location and spread statistics used to place the bounds.
//!
//! Nulls and NaNs are skipped. Infinities are kept and propagate through the
//! arithmetic. An empty sample yields NaN rather than an error.

use polars::prelude::*;

/// Values that take part in the statistics: present and not NaN.
fn observed(values: &Float64Chunked) -> Float64Chunked {
    let kept: Vec<f64> = values
        .into_iter()
        .flatten()
        .filter(|v| !v.is_nan())
        .collect();
    Float64Chunked::from_vec("observed".into(), kept)
}

/// `Some(v)` when every observed value equals `v`.
fn constant_value(sample: &Float64Chunked) -> Option<f64> {
    match (sample.min(), sample.max()) {
        (Some(min), Some(max)) if min == max => Some(min),
        _ => None,
    }
}

/// Interpolate between neighbouring order statistics.
///
/// Past the midpoint the step is taken back from `b`, so an infinite `a`
/// still yields an infinite result instead of `inf - inf`.
#[inline]
fn lerp(a: f64, b: f64, t: f64) -> f64 {
    let diff = b - a;
    if t >= 0.5 {
        b - diff * (1.0 - t)
    } else {
        a + diff * t
    }
}

/// Percentile `q` (0..=1) of an ascending sample, linear between order
/// statistics at position `q * (n - 1)`.
fn percentile(sorted: &Float64Chunked, q: f64) -> f64 {
    let n = sorted.len();
    if n == 0 {
        return f64::NAN;
    }

    let position = q * (n - 1) as f64;
    let lo = position.floor() as usize;
    let hi = (lo + 1).min(n - 1);
    let t = position - lo as f64;

    match (sorted.get(lo), sorted.get(hi)) {
        (Some(a), Some(b)) => lerp(a, b, t),
        _ => f64::NAN,
    }
}

/// 25th and 75th percentile with linear interpolation between order
/// statistics.
pub(crate) fn quartiles(values: &Float64Chunked) -> (f64, f64) {
    let sample = observed(values);
    if let Some(v) = constant_value(&sample) {
        return (v, v);
    }

    let sorted = sample.sort(false);
    (percentile(&sorted, 0.25), percentile(&sorted, 0.75))
}

/// Arithmetic mean and sample standard deviation (denominator `n - 1`).
///
/// The standard deviation is NaN for fewer than two observations. A constant
/// sample returns its value and zero, whatever rounding the summation would
/// introduce.
pub(crate) fn mean_and_std(values: &Float64Chunked) -> (f64, f64) {
    let sample = observed(values);
    let n = sample.len();
    let mean = sample.mean().unwrap_or(f64::NAN);

    if n < 2 {
        return (mean, f64::NAN);
    }

    if let Some(v) = constant_value(&sample) {
        return (v, 0.0);
    }

    let variance: f64 = sample
        .into_iter()
        .flatten()
        .map(|v| (v - mean).powi(2))
        .sum::<f64>()
        / (n - 1) as f64;

    (mean, variance.sqrt())
}
