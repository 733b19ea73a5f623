use crate::input::EventRow;
use crate::input::per_request;

/// One input row with its derived gap, delay and service time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DerivedRecord {
    /// Unix seconds of the row.
    pub timestamp: i64,
    pub cn: u64,
    pub rn: f64,
    /// `Tn`: seconds elapsed since the previous row (0 for the first row).
    pub gap: i64,
    /// `Dn`: response time carried over from the previous row.
    pub dn: f64,
    /// `Sn`: response time attributable to this row alone.
    pub sn: f64,
    pub mean_rn: Option<f64>,
    pub mean_sn: Option<f64>,
    pub mean_dn: Option<f64>,
}

/// Runs the carry-over recurrence over rows in file order.
///
/// For every row after the first, the previous row's response time that
/// does not fit in the elapsed gap spills into this row as delay:
/// `Dn = max(0, Rn[i-1] - Tn)` and `Sn = Rn - Dn`.
#[must_use]
pub fn derive_records(rows: &[EventRow]) -> Vec<DerivedRecord> {
    let mut records = Vec::with_capacity(rows.len());
    let mut previous: Option<&EventRow> = None;

    for row in rows {
        let (gap, dn) = previous.map_or((0, 0.0), |prev| {
            let gap = row.tn.saturating_sub(prev.tn);
            (gap, (prev.rn - gap as f64).max(0.0))
        });
        let sn = row.rn - dn;

        records.push(DerivedRecord {
            timestamp: row.tn,
            cn: row.cn,
            rn: row.rn,
            gap,
            dn,
            sn,
            mean_rn: row.mean_rn(),
            mean_sn: per_request(sn, row.cn),
            mean_dn: per_request(dn, row.cn),
        });
        previous = Some(row);
    }

    records
}
