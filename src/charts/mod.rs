mod axis;
mod decomposition;
mod distribution;
mod driver;
mod lines;
mod volume;

#[cfg(test)]
mod tests;

use std::collections::BTreeMap;

use crate::series::SecondGrid;
use crate::stats::{Decomposition, GroupStats, Histogram, HourlySeries, LogNormalFit};

pub use decomposition::plot_seasonal_decomposition;
pub use distribution::plot_service_time_distribution;
pub(crate) use driver::plot_report;
pub use lines::{DailyStat, plot_daily_stat, plot_mean_response_time};
pub use volume::{plot_requests_and_service_time, plot_service_time_vs_requests};

/// Pixel size of every exported chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartSize {
    pub width: u32,
    pub height: u32,
}

impl ChartSize {
    #[must_use]
    pub const fn dims(self) -> (u32, u32) {
        (self.width, self.height)
    }
}

/// Everything the chart set is drawn from.
pub(crate) struct ChartData<'a> {
    pub(crate) title: &'a str,
    pub(crate) grid: &'a SecondGrid,
    pub(crate) hourly: &'a HourlySeries,
    pub(crate) daily: &'a BTreeMap<u8, GroupStats>,
    pub(crate) decomposition: &'a Decomposition,
    pub(crate) fit: &'a LogNormalFit,
    pub(crate) histogram: Option<Histogram>,
}
