//! Per-second series derivation: the service-time/delay recurrence, the
//! fixed two-week grid and gap filling.
mod calendar;
mod fill;
mod grid;
mod recurrence;


pub use calendar::{
    DAY_START_OFFSET_S, SECONDS_PER_DAY, WINDOW_DAYS, day_label, week_label, window_start,
};
pub use fill::interpolate_linear;
pub use grid::{GRID_LEN, GridCounts, SecondGrid};
pub use recurrence::{DerivedRecord, derive_records};
