pub const SECONDS_PER_DAY: i64 = 86_400;
/// Days are counted from 06:00:01 to 06:00:00 of the next calendar day.
pub const DAY_START_OFFSET_S: i64 = 6 * 3_600 + 1;
pub const WINDOW_DAYS: i64 = 14;
const DAYS_PER_WEEK: u8 = 7;

/// First second of the report window: 06:00:01 UTC on the calendar day of
/// `min_timestamp`.
#[must_use]
pub const fn window_start(min_timestamp: i64) -> i64 {
    min_timestamp
        .div_euclid(SECONDS_PER_DAY)
        .saturating_mul(SECONDS_PER_DAY)
        .saturating_add(DAY_START_OFFSET_S)
}

/// Day label (1..=14) for a second `offset` seconds after the window start.
/// Seconds outside the fourteen labelled days are unlabeled.
#[must_use]
pub fn day_label(offset: i64) -> Option<u8> {
    if offset < 0 {
        return None;
    }
    let day = offset.div_euclid(SECONDS_PER_DAY).saturating_add(1);
    if day > WINDOW_DAYS {
        return None;
    }
    u8::try_from(day).ok()
}

/// Week label: 1 for days 1..=7, 2 for days 8..=14.
#[must_use]
pub const fn week_label(day: Option<u8>) -> Option<u8> {
    match day {
        Some(day) if day <= DAYS_PER_WEEK => Some(1),
        Some(_) => Some(2),
        None => None,
    }
}
