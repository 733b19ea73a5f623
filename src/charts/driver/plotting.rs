use std::path::Path;

use tracing::{error, info};

use crate::args::ReportArgs;
use crate::error::AppResult;

use crate::charts::{
    ChartData, ChartSize, DailyStat, plot_daily_stat, plot_mean_response_time,
    plot_requests_and_service_time, plot_seasonal_decomposition, plot_service_time_distribution,
    plot_service_time_vs_requests,
};
use super::naming::resolve_chart_output_dir;

/// Writes the seven report charts into a fresh run directory under
/// `args.charts_path` and returns that directory.
pub(crate) fn plot_report(
    data: &ChartData<'_>,
    args: &ReportArgs,
    input: &Path,
) -> AppResult<Option<String>> {
    if data.grid.is_empty() {
        return Ok(None);
    }
    let output_dir = resolve_chart_output_dir(&args.charts_path, input);
    let path = output_dir.to_string_lossy().to_string();

    if let Err(e) = std::fs::create_dir_all(&output_dir) {
        error!("Failed to create output directory '{}': {}", path, e);
        return Err(e.into());
    }

    let size = ChartSize {
        width: args.chart_width.get(),
        height: args.chart_height.get(),
    };

    info!("Plotting mean response time per request...");
    plot_mean_response_time(
        &data.grid.mean_rn,
        data.title,
        size,
        &format!("{}/mean_response_time.png", path),
    )?;

    info!("Plotting daily mean response time...");
    plot_daily_stat(
        data.daily,
        DailyStat::Mean,
        data.title,
        size,
        &format!("{}/daily_mean_response_time.png", path),
    )?;

    info!("Plotting daily standard deviation...");
    plot_daily_stat(
        data.daily,
        DailyStat::StdDev,
        data.title,
        size,
        &format!("{}/daily_std_response_time.png", path),
    )?;

    info!("Plotting seasonal decomposition...");
    plot_seasonal_decomposition(
        data.decomposition,
        size,
        &format!("{}/seasonal_decomposition.png", path),
    )?;

    info!("Plotting service time distribution...");
    plot_service_time_distribution(
        data.histogram.as_ref(),
        data.fit,
        data.title,
        size,
        &format!("{}/service_time_distribution.png", path),
    )?;

    info!("Plotting service time against requests...");
    plot_service_time_vs_requests(
        data.hourly,
        data.title,
        size,
        &format!("{}/service_time_vs_requests.png", path),
    )?;

    info!("Plotting requests and service time...");
    plot_requests_and_service_time(
        data.hourly,
        data.title,
        size,
        &format!("{}/requests_and_service_time.png", path),
    )?;

    Ok(Some(path))
}
