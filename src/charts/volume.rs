use plotters::prelude::*;

use crate::error::AppResult;
use crate::stats::HourlySeries;

use super::ChartSize;
use super::axis::{defined_points, hour_to_day, padded_range, zero_based_range};

/// Hourly `mean_Sn` against hourly `Cn`.
pub fn plot_service_time_vs_requests(
    hourly: &HourlySeries,
    title: &str,
    size: ChartSize,
    path: &str,
) -> AppResult<()> {
    let root = BitMapBackend::new(path, size.dims()).into_drawing_area();
    root.fill(&WHITE)?;

    let points: Vec<(f64, f64)> = hourly
        .cn
        .iter()
        .zip(&hourly.mean_sn)
        .filter_map(|(cn, sn)| cn.zip(*sn))
        .collect();
    let x_range = zero_based_range(points.iter().map(|(x, _)| *x));
    let y_range = padded_range(points.iter().map(|(_, y)| *y));

    let mut chart = ChartBuilder::on(&root)
        .caption(
            format!("Service time against requests (hourly): {}", title),
            ("sans-serif", 30).into_font(),
        )
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(x_range, y_range)?;

    chart
        .configure_mesh()
        .x_desc("Cn")
        .y_desc("mean_Sn")
        .draw()?;

    chart.draw_series(
        points
            .into_iter()
            .map(|point| Circle::new(point, 3, BLUE.filled())),
    )?;

    root.present()?;
    Ok(())
}

/// Hourly `Cn` above hourly `mean_Sn` on a shared day axis.
pub fn plot_requests_and_service_time(
    hourly: &HourlySeries,
    title: &str,
    size: ChartSize,
    path: &str,
) -> AppResult<()> {
    let root = BitMapBackend::new(path, size.dims()).into_drawing_area();
    root.fill(&WHITE)?;

    let x_max = hour_to_day(hourly.len());
    let panels = root.split_evenly((2, 1));
    let (Some(upper), Some(lower)) = (panels.first(), panels.get(1)) else {
        return Ok(());
    };

    let requests = defined_points(&hourly.cn, hour_to_day);
    let mut chart = ChartBuilder::on(upper)
        .caption(
            format!("Requests per hour: {}", title),
            ("sans-serif", 24).into_font(),
        )
        .margin(10)
        .x_label_area_size(30)
        .y_label_area_size(60)
        .build_cartesian_2d(1.0..x_max, zero_based_range(requests.iter().map(|(_, y)| *y)))?;
    chart
        .configure_mesh()
        .x_desc("Day")
        .y_desc("Cn")
        .x_labels(15)
        .draw()?;
    chart.draw_series(LineSeries::new(requests, &GREEN))?;

    let service = defined_points(&hourly.mean_sn, hour_to_day);
    let mut chart = ChartBuilder::on(lower)
        .caption("Mean service time per request", ("sans-serif", 24).into_font())
        .margin(10)
        .x_label_area_size(30)
        .y_label_area_size(60)
        .build_cartesian_2d(1.0..x_max, padded_range(service.iter().map(|(_, y)| *y)))?;
    chart
        .configure_mesh()
        .x_desc("Day")
        .y_desc("mean_Sn")
        .x_labels(15)
        .draw()?;
    chart.draw_series(LineSeries::new(service, &BLUE))?;

    root.present()?;
    Ok(())
}
