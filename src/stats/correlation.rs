use super::grouping::Accumulator;

/// Pearson correlation over index-aligned pairs where both sides are
/// defined. Undefined with fewer than two pairs or a constant side.
#[must_use]
pub fn pearson(xs: &[Option<f64>], ys: &[Option<f64>]) -> Option<f64> {
    let pairs: Vec<(f64, f64)> = xs
        .iter()
        .zip(ys)
        .filter_map(|(x, y)| Some(((*x)?, (*y)?)))
        .collect();

    let mut x_acc = Accumulator::new();
    let mut y_acc = Accumulator::new();
    for (x, y) in &pairs {
        x_acc.add(*x);
        y_acc.add(*y);
    }
    let (x_mean, y_mean) = (x_acc.mean()?, y_acc.mean()?);
    let (x_std, y_std) = (x_acc.std_dev()?, y_acc.std_dev()?);
    if x_std <= 0.0 || y_std <= 0.0 {
        return None;
    }

    let covariance = pairs
        .iter()
        .map(|(x, y)| (x - x_mean) * (y - y_mean))
        .sum::<f64>()
        / (pairs.len() - 1) as f64;
    Some((covariance / (x_std * y_std)).clamp(-1.0, 1.0))
}
