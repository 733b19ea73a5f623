use std::collections::BTreeMap;
use std::path::Path;

use chrono::DateTime;

use crate::series::{GRID_LEN, GridCounts, SecondGrid};
use crate::stats::{
    Decomposition, GroupStats, HourlySeries, LogNormalFit, group_stats, max_defined, pearson,
};

pub(crate) struct ReportSummary {
    pub(crate) input_name: String,
    pub(crate) window_start: i64,
    pub(crate) counts: GridCounts,
    pub(crate) max_mean_rn: Option<f64>,
    pub(crate) weekly: BTreeMap<u8, GroupStats>,
    pub(crate) daily: BTreeMap<u8, GroupStats>,
    pub(crate) hourly_correlation: Option<f64>,
}

impl ReportSummary {
    pub(crate) fn from_grid(input: &Path, grid: &SecondGrid, hourly: &HourlySeries) -> Self {
        Self {
            input_name: input_name(input),
            window_start: grid.start,
            counts: grid.counts,
            max_mean_rn: max_defined(&grid.mean_rn),
            weekly: group_stats(&grid.mean_rn, &grid.week),
            daily: group_stats(&grid.mean_rn, &grid.day),
            hourly_correlation: pearson(&hourly.cn, &hourly.mean_sn),
        }
    }
}

pub(crate) fn input_name(input: &Path) -> String {
    input.file_name().map_or_else(
        || input.display().to_string(),
        |name| name.to_string_lossy().into_owned(),
    )
}

pub(crate) fn summary_lines(summary: &ReportSummary) -> Vec<String> {
    let mut lines = Vec::new();
    let window_end = i64::try_from(GRID_LEN)
        .ok()
        .and_then(|len| summary.window_start.checked_add(len.saturating_sub(1)))
        .unwrap_or(i64::MAX);

    lines.push(format!("Input: {}", summary.input_name));
    lines.push(format!(
        "Window: {} .. {} UTC ({} seconds)",
        format_timestamp(summary.window_start),
        format_timestamp(window_end),
        GRID_LEN
    ));
    lines.push(format!(
        "Seconds with records: {} (outside window: {}, duplicates: {})",
        summary.counts.present, summary.counts.outside_window, summary.counts.duplicates
    ));
    lines.push(format!(
        "Negative service times blanked: Sn {}, mean_Sn {}",
        summary.counts.negative_sn, summary.counts.negative_mean_sn
    ));

    lines.push("maximum value of the response time per request :".to_owned());
    lines.push(format_value(summary.max_mean_rn));

    lines.push("weekly mean of the response time per request :".to_owned());
    for (week, stats) in &summary.weekly {
        lines.push(format!("  week {}: {:.6}", week, stats.mean));
    }

    lines.push("daily mean / standard deviation of the response time per request :".to_owned());
    for (day, stats) in &summary.daily {
        lines.push(format!(
            "  day {:>2}: mean {:.6}  std {}",
            day,
            stats.mean,
            format_value(stats.std_dev)
        ));
    }

    lines.push(format!(
        "correlation between hourly requests and service time per request : {}",
        summary
            .hourly_correlation
            .map_or_else(|| "n/a".to_owned(), |value| format!("{:.4}", value))
    ));
    lines
}

pub(crate) fn analysis_lines(fit: &LogNormalFit, decomposition: &Decomposition) -> Vec<String> {
    let (season_min, season_max) = decomposition
        .seasonal
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), value| {
            (lo.min(*value), hi.max(*value))
        });
    let amplitude = (season_max >= season_min).then(|| season_max - season_min);

    vec![
        format!(
            "service time per request, log-normal fit ({} samples) : shape {:.4}, scale {:.6}, mean {:.6}",
            fit.sample_count,
            fit.sigma,
            fit.scale(),
            fit.mean()
        ),
        format!(
            "daily seasonal amplitude of hourly response time per request (period {}h) : {}",
            decomposition.period,
            format_value(amplitude)
        ),
    ]
}

pub(crate) fn print_lines(lines: &[String]) {
    for line in lines {
        println!("{}", line);
    }
}

fn format_value(value: Option<f64>) -> String {
    value.map_or_else(|| "n/a".to_owned(), |value| format!("{:.6}", value))
}

fn format_timestamp(timestamp: i64) -> String {
    DateTime::from_timestamp(timestamp, 0).map_or_else(
        || timestamp.to_string(),
        |time| time.format("%Y-%m-%d %H:%M:%S").to_string(),
    )
}
