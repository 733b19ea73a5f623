use tracing::debug;

use super::calendar::{SECONDS_PER_DAY, WINDOW_DAYS, day_label, week_label, window_start};
use super::fill::interpolate_linear;
use super::recurrence::DerivedRecord;

/// Seconds in the closed window `[start, start + 14 days]`.
pub const GRID_LEN: usize = (WINDOW_DAYS * SECONDS_PER_DAY + 1) as usize;

/// Bookkeeping gathered while building and filling a [`SecondGrid`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GridCounts {
    /// Seconds backed by an input record.
    pub present: usize,
    /// Input records whose timestamp falls outside the window.
    pub outside_window: usize,
    /// Input records that landed on an already occupied second.
    pub duplicates: usize,
    /// Negative `Sn` values blanked as artifacts.
    pub negative_sn: usize,
    /// Negative `mean_Sn` values blanked as artifacts.
    pub negative_mean_sn: usize,
    pub filled_mean_rn: usize,
    pub filled_mean_sn: usize,
}

/// Column-oriented per-second series over the fixed two-week window. Index
/// `i` is the second `start + i`.
#[derive(Debug, Clone)]
pub struct SecondGrid {
    pub start: i64,
    pub cn: Vec<u64>,
    pub rn: Vec<f64>,
    /// Undefined only where a negative artifact was blanked.
    pub sn: Vec<Option<f64>>,
    pub dn: Vec<f64>,
    /// Undefined for seconds without an input record.
    pub gap: Vec<Option<i64>>,
    pub mean_rn: Vec<Option<f64>>,
    pub mean_sn: Vec<Option<f64>>,
    pub mean_dn: Vec<Option<f64>>,
    pub day: Vec<Option<u8>>,
    pub week: Vec<Option<u8>>,
    pub counts: GridCounts,
}

impl SecondGrid {
    /// Builds the grid anchored at 06:00:01 on the day of the earliest
    /// record.
    #[must_use]
    pub fn from_records(records: &[DerivedRecord]) -> Self {
        let min_timestamp = records
            .iter()
            .map(|record| record.timestamp)
            .min()
            .unwrap_or(0);
        Self::reindex(records, window_start(min_timestamp))
    }

    /// Places each record on its second of the window starting at `start`.
    /// Seconds without a record get zero totals and undefined ratios;
    /// negative service times are blanked.
    #[must_use]
    pub fn reindex(records: &[DerivedRecord], start: i64) -> Self {
        let mut counts = GridCounts::default();
        let mut slots: Vec<Option<&DerivedRecord>> = vec![None; GRID_LEN];

        for record in records {
            let slot = offset_index(start, record.timestamp).and_then(|idx| slots.get_mut(idx));
            match slot {
                Some(slot) => {
                    if slot.replace(record).is_some() {
                        counts.duplicates = counts.duplicates.saturating_add(1);
                    }
                }
                None => counts.outside_window = counts.outside_window.saturating_add(1),
            }
        }

        let placed: Vec<&DerivedRecord> = slots.iter().flatten().copied().collect();
        counts.present = placed.len();
        counts.negative_sn = placed.iter().filter(|record| record.sn < 0.0).count();
        counts.negative_mean_sn = placed
            .iter()
            .filter(|record| record.mean_sn.is_some_and(|value| value < 0.0))
            .count();

        let cn = slots.iter().map(|slot| slot.map_or(0, |r| r.cn)).collect();
        let rn = slots.iter().map(|slot| slot.map_or(0.0, |r| r.rn)).collect();
        let dn = slots.iter().map(|slot| slot.map_or(0.0, |r| r.dn)).collect();
        let sn = slots
            .iter()
            .map(|slot| slot.map_or(Some(0.0), |r| non_negative(Some(r.sn))))
            .collect();
        let gap = slots.iter().map(|slot| slot.map(|r| r.gap)).collect();
        let mean_rn = slots.iter().map(|slot| slot.and_then(|r| r.mean_rn)).collect();
        let mean_sn = slots
            .iter()
            .map(|slot| non_negative(slot.and_then(|r| r.mean_sn)))
            .collect();
        let mean_dn = slots.iter().map(|slot| slot.and_then(|r| r.mean_dn)).collect();
        let day: Vec<Option<u8>> = (0..GRID_LEN)
            .map(|idx| i64::try_from(idx).ok().and_then(day_label))
            .collect();
        let week = day.iter().map(|label| week_label(*label)).collect();

        debug!(
            "Reindexed {} records from {}; {} outside the window, {} duplicates, {} negative service times blanked",
            counts.present,
            start,
            counts.outside_window,
            counts.duplicates,
            counts.negative_sn
        );

        Self {
            start,
            cn,
            rn,
            sn,
            dn,
            gap,
            mean_rn,
            mean_sn,
            mean_dn,
            day,
            week,
            counts,
        }
    }

    /// Interpolates `mean_Rn` and `mean_Sn` across undefined seconds. Raw
    /// totals are left untouched.
    #[must_use]
    pub fn fill_gaps(self) -> Self {
        let mean_rn = interpolate_linear(&self.mean_rn);
        let mean_sn = interpolate_linear(&self.mean_sn);
        let counts = GridCounts {
            filled_mean_rn: newly_defined(&self.mean_rn, &mean_rn),
            filled_mean_sn: newly_defined(&self.mean_sn, &mean_sn),
            ..self.counts
        };

        debug!(
            "Interpolated {} mean_Rn and {} mean_Sn gaps",
            counts.filled_mean_rn, counts.filled_mean_sn
        );

        Self {
            mean_rn,
            mean_sn,
            counts,
            ..self
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cn.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cn.is_empty()
    }

    /// Unix seconds of grid index `idx`.
    #[must_use]
    pub fn timestamp(&self, idx: usize) -> i64 {
        i64::try_from(idx).map_or(i64::MAX, |offset| self.start.saturating_add(offset))
    }

    /// Grid index of `timestamp`, if it lies inside the window.
    #[must_use]
    pub fn index_of(&self, timestamp: i64) -> Option<usize> {
        offset_index(self.start, timestamp).filter(|idx| *idx < self.len())
    }
}

fn offset_index(start: i64, timestamp: i64) -> Option<usize> {
    usize::try_from(timestamp.checked_sub(start)?)
        .ok()
        .filter(|idx| *idx < GRID_LEN)
}

fn non_negative(value: Option<f64>) -> Option<f64> {
    value.filter(|value| *value >= 0.0)
}

fn newly_defined(before: &[Option<f64>], after: &[Option<f64>]) -> usize {
    before
        .iter()
        .zip(after)
        .filter(|(old, new)| old.is_none() && new.is_some())
        .count()
}
