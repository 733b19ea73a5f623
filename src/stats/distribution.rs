use std::f64::consts::PI;

use crate::error::{AnalysisError, AppError, AppResult};

use super::grouping::Accumulator;

pub const MAX_HISTOGRAM_BINS: usize = 50;

/// Log-normal distribution with location fixed at zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LogNormalFit {
    /// Mean of `ln(x)`.
    pub mu: f64,
    /// Standard deviation of `ln(x)`; the distribution's shape parameter.
    pub sigma: f64,
    pub sample_count: usize,
}

impl LogNormalFit {
    /// Scale parameter, `exp(mu)`; also the median.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.mu.exp()
    }

    #[must_use]
    pub fn mean(&self) -> f64 {
        (self.mu + self.sigma * self.sigma / 2.0).exp()
    }

    #[must_use]
    pub fn pdf(&self, x: f64) -> f64 {
        if x <= 0.0 {
            return 0.0;
        }
        let z = (x.ln() - self.mu) / self.sigma;
        (-0.5 * z * z).exp() / (x * self.sigma * (2.0 * PI).sqrt())
    }
}

/// Maximum-likelihood log-normal fit over the strictly positive defined
/// values.
///
/// # Errors
///
/// Returns an error with fewer than two positive values or when they are
/// all equal.
pub fn fit_lognormal(values: &[Option<f64>]) -> AppResult<LogNormalFit> {
    let mut logs = Accumulator::new();
    for value in values.iter().flatten() {
        if *value > 0.0 && value.is_finite() {
            logs.add(value.ln());
        }
    }

    let sample_count = logs.count();
    let (Some(mu), Some(sample_std)) = (logs.mean(), logs.std_dev()) else {
        return Err(AppError::analysis(AnalysisError::EmptySelection {
            what: "log-normal fit",
        }));
    };
    // MLE uses n rather than n - 1.
    let sigma = sample_std * ((sample_count - 1) as f64 / sample_count as f64).sqrt();
    if sigma <= 0.0 {
        return Err(AppError::analysis(AnalysisError::EmptySelection {
            what: "log-normal fit",
        }));
    }

    Ok(LogNormalFit {
        mu,
        sigma,
        sample_count,
    })
}

/// Density-normalised histogram: bar areas sum to 1.
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    pub edges: Vec<f64>,
    pub densities: Vec<f64>,
}

impl Histogram {
    /// `(low edge, high edge, density)` per bin.
    pub fn bins(&self) -> impl Iterator<Item = (f64, f64, f64)> + '_ {
        self.edges
            .windows(2)
            .zip(&self.densities)
            .filter_map(|(edge, density)| Some((*edge.first()?, *edge.get(1)?, *density)))
    }

    #[must_use]
    pub fn max_density(&self) -> f64 {
        self.densities.iter().copied().fold(0.0, f64::max)
    }
}

/// Bins the defined values with the Freedman–Diaconis rule, capped at
/// `max_bins`.
#[must_use]
pub fn histogram(values: &[Option<f64>], max_bins: usize) -> Option<Histogram> {
    let mut sorted: Vec<f64> = values
        .iter()
        .flatten()
        .copied()
        .filter(|value| value.is_finite())
        .collect();
    sorted.sort_by(f64::total_cmp);

    let (&min, &max) = (sorted.first()?, sorted.last()?);
    let count = sorted.len();
    let bins = freedman_diaconis_bins(&sorted).clamp(1, max_bins.max(1));

    let (low, high) = if max > min {
        (min, max)
    } else {
        (min - 0.5, max + 0.5)
    };
    let width = (high - low) / bins as f64;

    let mut counts = vec![0usize; bins];
    for value in &sorted {
        let idx = (((value - low) / width) as usize).min(bins - 1);
        if let Some(slot) = counts.get_mut(idx) {
            *slot = slot.saturating_add(1);
        }
    }

    let edges = (0..=bins).map(|idx| low + width * idx as f64).collect();
    let densities = counts
        .iter()
        .map(|bin| *bin as f64 / (count as f64 * width))
        .collect();
    Some(Histogram { edges, densities })
}

fn freedman_diaconis_bins(sorted: &[f64]) -> usize {
    let count = sorted.len() as f64;
    let iqr = percentile(sorted, 0.75) - percentile(sorted, 0.25);
    let bin_width = 2.0 * iqr / count.cbrt();
    let (Some(min), Some(max)) = (sorted.first(), sorted.last()) else {
        return 1;
    };
    if bin_width > 0.0 {
        ((max - min) / bin_width).ceil() as usize
    } else {
        count.sqrt() as usize
    }
}

/// Linear-interpolated quantile of a sorted slice, `q` in `[0, 1]`.
fn percentile(sorted: &[f64], q: f64) -> f64 {
    let Some(last) = sorted.len().checked_sub(1) else {
        return 0.0;
    };
    let position = q.clamp(0.0, 1.0) * last as f64;
    let lower = position.floor() as usize;
    let upper = position.ceil() as usize;
    let fraction = position - lower as f64;
    match (sorted.get(lower), sorted.get(upper)) {
        (Some(low), Some(high)) => low + (high - low) * fraction,
        _ => 0.0,
    }
}
