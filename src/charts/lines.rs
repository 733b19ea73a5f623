use std::collections::BTreeMap;

use plotters::prelude::*;

use crate::error::AppResult;
use crate::stats::GroupStats;

use super::ChartSize;
use super::axis::{defined_points, padded_range, second_to_day, zero_based_range};

/// Which per-day statistic a daily chart shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DailyStat {
    Mean,
    StdDev,
}

impl DailyStat {
    const fn caption(self) -> &'static str {
        match self {
            Self::Mean => "Daily mean response time per request",
            Self::StdDev => "Daily standard deviation of response time per request",
        }
    }

    fn value(self, stats: &GroupStats) -> Option<f64> {
        match self {
            Self::Mean => Some(stats.mean),
            Self::StdDev => stats.std_dev,
        }
    }
}

/// Per-second `mean_Rn` over the whole window.
pub fn plot_mean_response_time(
    mean_rn: &[Option<f64>],
    title: &str,
    size: ChartSize,
    path: &str,
) -> AppResult<()> {
    let root = BitMapBackend::new(path, size.dims()).into_drawing_area();
    root.fill(&WHITE)?;

    let points = defined_points(mean_rn, second_to_day);
    let x_max = second_to_day(mean_rn.len());
    let y_range = zero_based_range(points.iter().map(|(_, y)| *y));

    let mut chart = ChartBuilder::on(&root)
        .caption(
            format!("Mean response time per request: {}", title),
            ("sans-serif", 30).into_font(),
        )
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(1.0..x_max, y_range)?;

    chart
        .configure_mesh()
        .x_desc("Day")
        .y_desc("mean_Rn")
        .x_labels(15)
        .y_labels(10)
        .draw()?;

    chart.draw_series(LineSeries::new(points, &BLUE))?;

    root.present()?;
    Ok(())
}

/// One point per calendar day for the chosen statistic.
pub fn plot_daily_stat(
    daily: &BTreeMap<u8, GroupStats>,
    stat: DailyStat,
    title: &str,
    size: ChartSize,
    path: &str,
) -> AppResult<()> {
    let root = BitMapBackend::new(path, size.dims()).into_drawing_area();
    root.fill(&WHITE)?;

    let points: Vec<(f64, f64)> = daily
        .iter()
        .filter_map(|(day, stats)| stat.value(stats).map(|value| (f64::from(*day), value)))
        .collect();
    let y_range = padded_range(points.iter().map(|(_, y)| *y));

    let mut chart = ChartBuilder::on(&root)
        .caption(
            format!("{}: {}", stat.caption(), title),
            ("sans-serif", 30).into_font(),
        )
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(0.5..14.5, y_range)?;

    chart
        .configure_mesh()
        .x_desc("Day")
        .y_desc(match stat {
            DailyStat::Mean => "mean_Rn",
            DailyStat::StdDev => "std(mean_Rn)",
        })
        .x_labels(14)
        .x_label_formatter(&|v| format!("{:.0}", v))
        .draw()?;

    chart.draw_series(LineSeries::new(points.iter().copied(), &BLUE))?;
    chart.draw_series(
        points
            .iter()
            .map(|point| Circle::new(*point, 4, BLUE.filled())),
    )?;

    root.present()?;
    Ok(())
}
