use plotters::prelude::*;

use crate::error::AppResult;
use crate::stats::{Histogram, LogNormalFit};

use super::ChartSize;
use super::axis::zero_based_range;

const PDF_SAMPLES: usize = 400;

/// Density histogram of `mean_Sn` with the fitted log-normal density on top.
pub fn plot_service_time_distribution(
    histogram: Option<&Histogram>,
    fit: &LogNormalFit,
    title: &str,
    size: ChartSize,
    path: &str,
) -> AppResult<()> {
    let root = BitMapBackend::new(path, size.dims()).into_drawing_area();
    root.fill(&WHITE)?;

    let x_max = histogram
        .and_then(|hist| hist.edges.last().copied())
        .unwrap_or_else(|| fit.mean() * 3.0);
    let x_max = if x_max.is_finite() && x_max > 0.0 { x_max } else { 1.0 };

    let step = x_max / PDF_SAMPLES as f64;
    let pdf: Vec<(f64, f64)> = (1..=PDF_SAMPLES)
        .map(|idx| {
            let x = step * idx as f64;
            (x, fit.pdf(x))
        })
        .filter(|(_, y)| y.is_finite())
        .collect();

    let hist_max = histogram.map_or(0.0, Histogram::max_density);
    let y_range = zero_based_range(pdf.iter().map(|(_, y)| *y).chain([hist_max]));

    let mut chart = ChartBuilder::on(&root)
        .caption(
            format!("Service time per request: {}", title),
            ("sans-serif", 30).into_font(),
        )
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(0.0..x_max, y_range)?;

    chart
        .configure_mesh()
        .x_desc("mean_Sn")
        .y_desc("Density")
        .x_labels(20)
        .y_labels(10)
        .draw()?;

    if let Some(hist) = histogram {
        chart.draw_series(hist.bins().map(|(lo, hi, density)| {
            Rectangle::new([(lo, 0.0), (hi, density)], BLUE.mix(0.4).filled())
        }))?;
    }

    chart
        .draw_series(LineSeries::new(pdf, RED.stroke_width(2)))?
        .label(format!(
            "log-normal (mu = {:.4}, sigma = {:.4})",
            fit.mu, fit.sigma
        ))
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], RED));

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}
