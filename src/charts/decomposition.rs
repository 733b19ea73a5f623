use plotters::prelude::*;

use crate::error::AppResult;
use crate::stats::Decomposition;

use super::ChartSize;
use super::axis::{defined_points, hour_to_day, padded_range};

/// Observed, trend, seasonal and residual components stacked top to bottom.
pub fn plot_seasonal_decomposition(
    decomposition: &Decomposition,
    size: ChartSize,
    path: &str,
) -> AppResult<()> {
    let root = BitMapBackend::new(path, size.dims()).into_drawing_area();
    root.fill(&WHITE)?;

    let observed: Vec<Option<f64>> = decomposition.observed.iter().copied().map(Some).collect();
    let seasonal: Vec<Option<f64>> = decomposition.seasonal.iter().copied().map(Some).collect();
    let panels: [(&str, &[Option<f64>]); 4] = [
        ("Observed", &observed),
        ("Trend", &decomposition.trend),
        ("Seasonal", &seasonal),
        ("Residual", &decomposition.resid),
    ];

    let x_max = hour_to_day(decomposition.observed.len());
    let areas = root.split_evenly((4, 1));
    for (area, (label, values)) in areas.iter().zip(panels) {
        let points = defined_points(values, hour_to_day);
        let y_range = padded_range(points.iter().map(|(_, y)| *y));

        let mut chart = ChartBuilder::on(area)
            .caption(label, ("sans-serif", 20).into_font())
            .margin(5)
            .x_label_area_size(30)
            .y_label_area_size(60)
            .build_cartesian_2d(1.0..x_max, y_range)?;

        chart
            .configure_mesh()
            .x_desc("Day")
            .x_labels(15)
            .y_labels(5)
            .draw()?;

        chart.draw_series(LineSeries::new(points, &BLUE))?;
    }

    root.present()?;
    Ok(())
}
