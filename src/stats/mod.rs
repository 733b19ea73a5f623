//! Read-only statistics over a filled [`crate::series::SecondGrid`].
mod correlation;
mod decompose;
mod distribution;
mod grouping;
mod resample;


pub use correlation::pearson;
pub use decompose::{DAILY_PERIOD_H, Decomposition, seasonal_decompose};
pub use distribution::{Histogram, LogNormalFit, MAX_HISTOGRAM_BINS, fit_lognormal, histogram};
pub use grouping::{Accumulator, GroupStats, group_stats, max_defined};
pub use resample::{HOUR_S, HourlySeries, bucket_means};
