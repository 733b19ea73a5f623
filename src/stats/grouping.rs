use std::collections::BTreeMap;

/// Running mean and variance (Welford).
#[derive(Debug, Clone, Copy, Default)]
pub struct Accumulator {
    count: usize,
    mean: f64,
    diff_2_sum: f64,
}

impl Accumulator {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            count: 0,
            mean: 0.0,
            diff_2_sum: 0.0,
        }
    }

    pub fn add(&mut self, value: f64) {
        self.count = self.count.saturating_add(1);
        let diff_a = value - self.mean;
        self.mean += diff_a / self.count as f64;
        let diff_b = value - self.mean;
        self.diff_2_sum += diff_a * diff_b;
    }

    #[must_use]
    pub const fn count(&self) -> usize {
        self.count
    }

    #[must_use]
    pub fn mean(&self) -> Option<f64> {
        (self.count > 0).then_some(self.mean)
    }

    /// Sample standard deviation (n - 1 in the denominator).
    #[must_use]
    pub fn std_dev(&self) -> Option<f64> {
        (self.count > 1).then(|| (self.diff_2_sum / (self.count - 1) as f64).sqrt())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GroupStats {
    pub count: usize,
    pub mean: f64,
    pub std_dev: Option<f64>,
}

/// Largest defined value.
#[must_use]
pub fn max_defined(values: &[Option<f64>]) -> Option<f64> {
    values.iter().flatten().copied().reduce(f64::max)
}

/// Mean and standard deviation of `values` per label, skipping unlabeled
/// and undefined entries.
#[must_use]
pub fn group_stats(values: &[Option<f64>], labels: &[Option<u8>]) -> BTreeMap<u8, GroupStats> {
    let mut groups: BTreeMap<u8, Accumulator> = BTreeMap::new();
    for (value, label) in values.iter().zip(labels) {
        if let (Some(value), Some(label)) = (value, label) {
            groups.entry(*label).or_default().add(*value);
        }
    }

    groups
        .into_iter()
        .filter_map(|(label, acc)| {
            acc.mean().map(|mean| {
                (
                    label,
                    GroupStats {
                        count: acc.count(),
                        mean,
                        std_dev: acc.std_dev(),
                    },
                )
            })
        })
        .collect()
}
