use tracing::{debug, info};

use crate::args::ReportArgs;
use crate::charts::{ChartData, plot_report};
use crate::error::{AppResult, InputError};
use crate::input::read_event_log;
use crate::series::{SecondGrid, derive_records};
use crate::stats::{
    DAILY_PERIOD_H, HourlySeries, MAX_HISTOGRAM_BINS, fit_lognormal, histogram,
    seasonal_decompose,
};

use super::summary::{ReportSummary, analysis_lines, print_lines, summary_lines};

/// Runs the whole report: ingest, derive, reindex, fill, print, plot.
pub(crate) fn run_report(args: &ReportArgs) -> AppResult<()> {
    let input = args.input.as_deref().ok_or(InputError::MissingArgument)?;

    info!("Please wait while importing and cleaning the data...");
    let rows = read_event_log(input)?;
    let records = derive_records(&rows);
    debug!("Derived service time and delay for {} rows", records.len());
    let grid = SecondGrid::from_records(&records).fill_gaps();
    let hourly = HourlySeries::from_grid(&grid);

    let summary = ReportSummary::from_grid(input, &grid, &hourly);
    print_lines(&summary_lines(&summary));

    info!("Please wait while creating all the plots...");
    let decomposition = seasonal_decompose(&hourly.mean_rn, DAILY_PERIOD_H)?;
    let fit = fit_lognormal(&grid.mean_sn)?;
    print_lines(&analysis_lines(&fit, &decomposition));

    if args.no_charts {
        info!("Charts disabled.");
        return Ok(());
    }

    let data = ChartData {
        title: &summary.input_name,
        grid: &grid,
        hourly: &hourly,
        daily: &summary.daily,
        decomposition: &decomposition,
        fit: &fit,
        histogram: histogram(&grid.mean_sn, MAX_HISTOGRAM_BINS),
    };
    if let Some(path) = plot_report(&data, args, input)? {
        info!("Charts written to {}", path);
    }
    Ok(())
}
