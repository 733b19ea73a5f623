use crate::error::{AnalysisError, AppError, AppResult};

use super::grouping::Accumulator;

/// Hours in the daily season of the hourly series.
pub const DAILY_PERIOD_H: usize = 24;

/// Additive decomposition `observed = trend + seasonal + resid`.
#[derive(Debug, Clone)]
pub struct Decomposition {
    pub period: usize,
    pub observed: Vec<f64>,
    /// Undefined for the first and last `period / 2` points.
    pub trend: Vec<Option<f64>>,
    pub seasonal: Vec<f64>,
    pub resid: Vec<Option<f64>>,
}

/// Classical additive seasonal decomposition.
///
/// The trend is a centred moving average over one period (a 2×`period`
/// average when `period` is even); the seasonal component is the per-phase
/// mean of the detrended series, shifted to sum to zero over a period.
///
/// # Errors
///
/// Returns an error when the series has undefined values or holds fewer than
/// two full periods.
pub fn seasonal_decompose(series: &[Option<f64>], period: usize) -> AppResult<Decomposition> {
    let observed: Vec<f64> = series
        .iter()
        .map(|value| value.filter(|v| v.is_finite()))
        .collect::<Option<Vec<f64>>>()
        .ok_or(AnalysisError::MissingValues {
            stage: "hourly mean_Rn",
        })?;

    let period = period.max(1);
    let required = period.saturating_mul(2);
    if observed.len() < required {
        return Err(AppError::analysis(AnalysisError::InsufficientPeriods {
            period,
            required,
            available: observed.len(),
        }));
    }

    let trend = centred_moving_average(&observed, period);

    let mut phases = vec![Accumulator::new(); period];
    for (idx, (value, trend)) in observed.iter().zip(&trend).enumerate() {
        if let (Some(trend), Some(phase)) = (trend, phases.get_mut(idx % period)) {
            phase.add(value - trend);
        }
    }
    let phase_means: Vec<f64> = phases
        .iter()
        .map(|phase| phase.mean().unwrap_or(0.0))
        .collect();
    let offset = phase_means.iter().sum::<f64>() / period as f64;
    let seasonal: Vec<f64> = (0..observed.len())
        .map(|idx| phase_means.get(idx % period).map_or(0.0, |mean| mean - offset))
        .collect();

    let resid = observed
        .iter()
        .zip(&trend)
        .zip(&seasonal)
        .map(|((value, trend), season)| trend.map(|trend| value - trend - season))
        .collect();

    Ok(Decomposition {
        period,
        observed,
        trend,
        seasonal,
        resid,
    })
}

fn centred_moving_average(values: &[f64], period: usize) -> Vec<Option<f64>> {
    let weights = moving_average_weights(period);
    let half = weights.len() / 2;
    let tail = weights.len().saturating_sub(half).saturating_sub(1);

    (0..values.len())
        .map(|idx| {
            if idx < half || idx.saturating_add(tail) >= values.len() {
                return None;
            }
            let window = values.get(idx - half..=idx + tail)?;
            Some(
                window
                    .iter()
                    .zip(&weights)
                    .map(|(value, weight)| value * weight)
                    .sum(),
            )
        })
        .collect()
}

fn moving_average_weights(period: usize) -> Vec<f64> {
    let scale = period as f64;
    if period % 2 == 0 {
        let mut weights = vec![1.0 / scale; period.saturating_add(1)];
        if let Some(first) = weights.first_mut() {
            *first = 0.5 / scale;
        }
        if let Some(last) = weights.last_mut() {
            *last = 0.5 / scale;
        }
        weights
    } else {
        vec![1.0 / scale; period]
    }
}
