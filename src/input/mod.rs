//! Event-log ingestion: tab-separated `(tn, Cn, Rn)` rows.
mod parse;

#[cfg(test)]
mod tests;

pub use parse::{EventRow, parse_line, read_event_log};
pub(crate) use parse::per_request;
