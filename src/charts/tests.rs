use std::path::Path;

use clap::Parser;
use tempfile::tempdir;

use super::driver::{chart_run_dir_name, sanitize_segment};
use super::{ChartData, ChartSize, DailyStat, plot_daily_stat, plot_mean_response_time, plot_report};
use crate::args::ReportArgs;
use crate::error::{AnalysisError, AppError, AppResult};
use crate::input::EventRow;
use crate::series::{SECONDS_PER_DAY, SecondGrid, derive_records};
use crate::stats::{
    DAILY_PERIOD_H, HourlySeries, MAX_HISTOGRAM_BINS, fit_lognormal, group_stats, histogram,
    seasonal_decompose,
};

const SMALL: ChartSize = ChartSize {
    width: 320,
    height: 240,
};

fn check(condition: bool, message: String) -> AppResult<()> {
    if condition {
        Ok(())
    } else {
        Err(AppError::analysis(AnalysisError::from(message)))
    }
}

/// One record every ten minutes for two weeks, with a daily load cycle.
fn sample_grid() -> SecondGrid {
    let start = 1_700_000_000_i64 - 1_700_000_000_i64.rem_euclid(SECONDS_PER_DAY) + 21_601;
    let rows: Vec<EventRow> = (0..14 * 144)
        .map(|step: i64| {
            let hour = (step / 6) % 24;
            let cn = 10 + u64::try_from(hour).unwrap_or(0);
            EventRow {
                tn: start + step * 600,
                cn,
                rn: cn as f64 * (1.0 + (step % 7) as f64 * 0.1),
            }
        })
        .collect();
    SecondGrid::from_records(&derive_records(&rows)).fill_gaps()
}

fn path_str(path: &Path) -> AppResult<&str> {
    path.to_str()
        .ok_or_else(|| AppError::analysis(AnalysisError::from("Non UTF-8 temp path")))
}

#[test]
fn mean_response_time_chart_is_written() -> AppResult<()> {
    let dir = tempdir()?;
    let grid = sample_grid();
    let path = dir.path().join("mean.png");

    plot_mean_response_time(&grid.mean_rn, "sample", SMALL, path_str(&path)?)?;

    check(path.exists(), format!("Missing chart {}", path.display()))
}

#[test]
fn daily_charts_tolerate_missing_std() -> AppResult<()> {
    let dir = tempdir()?;
    let values = [Some(1.0), Some(2.0), Some(4.0)];
    let labels = [Some(1), Some(1), Some(2)];
    let daily = group_stats(&values, &labels);

    for (stat, name) in [(DailyStat::Mean, "mean.png"), (DailyStat::StdDev, "std.png")] {
        let path = dir.path().join(name);
        plot_daily_stat(&daily, stat, "sample", SMALL, path_str(&path)?)?;
        check(path.exists(), format!("Missing chart {}", path.display()))?;
    }
    Ok(())
}

#[test]
fn plot_report_writes_every_chart() -> AppResult<()> {
    let dir = tempdir()?;
    let charts_path = path_str(dir.path())?.to_owned();
    let args = ReportArgs::try_parse_from([
        "svctime",
        "two weeks.tsv",
        "--charts-path",
        charts_path.as_str(),
        "--chart-width",
        "320",
        "--chart-height",
        "240",
    ])?;

    let grid = sample_grid();
    let hourly = HourlySeries::from_grid(&grid);
    let daily = group_stats(&grid.mean_rn, &grid.day);
    let decomposition = seasonal_decompose(&hourly.mean_rn, DAILY_PERIOD_H)?;
    let fit = fit_lognormal(&grid.mean_sn)?;
    let data = ChartData {
        title: "two weeks.tsv",
        grid: &grid,
        hourly: &hourly,
        daily: &daily,
        decomposition: &decomposition,
        fit: &fit,
        histogram: histogram(&grid.mean_sn, MAX_HISTOGRAM_BINS),
    };

    let output = plot_report(&data, &args, Path::new("two weeks.tsv"))?;
    let output = output.ok_or_else(|| AppError::analysis(AnalysisError::from("No output dir")))?;

    check(
        output.contains("_two-weeks"),
        format!("Unexpected run dir {}", output),
    )?;
    for name in [
        "mean_response_time.png",
        "daily_mean_response_time.png",
        "daily_std_response_time.png",
        "seasonal_decomposition.png",
        "service_time_distribution.png",
        "service_time_vs_requests.png",
        "requests_and_service_time.png",
    ] {
        let path = Path::new(&output).join(name);
        check(path.exists(), format!("Missing chart {}", path.display()))?;
    }
    Ok(())
}

#[test]
fn run_dir_name_uses_sanitized_stem() -> AppResult<()> {
    let name = chart_run_dir_name(Path::new("/tmp/logs/server a.tsv"));
    check(name.starts_with("run-"), format!("Bad prefix {}", name))?;
    check(name.ends_with("_server-a"), format!("Bad suffix {}", name))?;
    // run-YYYY-MM-DD_HH-MM-SS_
    check(
        name.len() == "run-2024-01-01_00-00-00_server-a".len(),
        format!("Bad length {}", name),
    )?;

    let fallback = chart_run_dir_name(Path::new("/"));
    check(fallback.ends_with("_input"), format!("Bad fallback {}", fallback))
}

#[test]
fn sanitize_segment_replaces_separators() -> AppResult<()> {
    let cleaned = sanitize_segment("a b/c:d.e_f-g");
    check(cleaned == "a-b-c-d.e_f-g", format!("Unexpected {}", cleaned))
}
