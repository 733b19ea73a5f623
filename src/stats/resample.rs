use crate::series::SecondGrid;

pub const HOUR_S: usize = 3_600;

/// Hourly means of the grid, in fixed 3600-second buckets counted from the
/// window start. The final bucket may be partial.
#[derive(Debug, Clone)]
pub struct HourlySeries {
    /// Unix seconds of the first second in each bucket.
    pub starts: Vec<i64>,
    pub cn: Vec<Option<f64>>,
    pub mean_rn: Vec<Option<f64>>,
    pub mean_sn: Vec<Option<f64>>,
}

impl HourlySeries {
    #[must_use]
    pub fn from_grid(grid: &SecondGrid) -> Self {
        let counts: Vec<Option<f64>> = grid.cn.iter().map(|cn| Some(*cn as f64)).collect();
        let starts = (0..grid.len())
            .step_by(HOUR_S)
            .map(|idx| grid.timestamp(idx))
            .collect();
        Self {
            starts,
            cn: bucket_means(&counts, HOUR_S),
            mean_rn: bucket_means(&grid.mean_rn, HOUR_S),
            mean_sn: bucket_means(&grid.mean_sn, HOUR_S),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.starts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.starts.is_empty()
    }
}

/// Arithmetic mean of each non-overlapping `width`-sized bucket, ignoring
/// undefined entries. A bucket with no defined entry is undefined.
#[must_use]
pub fn bucket_means(values: &[Option<f64>], width: usize) -> Vec<Option<f64>> {
    values
        .chunks(width.max(1))
        .map(|bucket| {
            let (sum, count) = bucket
                .iter()
                .flatten()
                .fold((0.0, 0usize), |(sum, count), value| {
                    (sum + value, count.saturating_add(1))
                });
            (count > 0).then(|| sum / count as f64)
        })
        .collect()
}
