use std::ops::Range;

use crate::series::SECONDS_PER_DAY;

/// Range covering all finite `values`, padded by 5% (or by a fixed margin
/// when every value is equal).
pub(super) fn padded_range<I>(values: I) -> Range<f64>
where
    I: IntoIterator<Item = f64>,
{
    let (min, max) = values
        .into_iter()
        .filter(|value| value.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), value| {
            (lo.min(value), hi.max(value))
        });
    if min > max {
        return 0.0..1.0;
    }
    let pad = if max > min {
        (max - min) * 0.05
    } else {
        (max.abs() * 0.1).max(1.0)
    };
    (min - pad)..(max + pad)
}

/// Range from zero up to the largest finite value, padded by 5%.
pub(super) fn zero_based_range<I>(values: I) -> Range<f64>
where
    I: IntoIterator<Item = f64>,
{
    let max = values
        .into_iter()
        .filter(|value| value.is_finite())
        .fold(0.0, f64::max);
    if max > 0.0 { 0.0..max * 1.05 } else { 0.0..1.0 }
}

/// Position of grid second `idx` in fractional days, starting at day 1.
pub(super) fn second_to_day(idx: usize) -> f64 {
    1.0 + idx as f64 / SECONDS_PER_DAY as f64
}

/// Position of hourly bucket `idx` in fractional days, starting at day 1.
pub(super) fn hour_to_day(idx: usize) -> f64 {
    1.0 + idx as f64 / 24.0
}

/// `(day, value)` points for the defined values.
pub(super) fn defined_points(values: &[Option<f64>], to_day: fn(usize) -> f64) -> Vec<(f64, f64)> {
    values
        .iter()
        .enumerate()
        .filter_map(|(idx, value)| value.map(|value| (to_day(idx), value)))
        .collect()
}
