use std::path::PathBuf;

use clap::{ArgMatches, CommandFactory, FromArgMatches};

use crate::args::{PositiveU32, ReportArgs};
use crate::config::apply_config;
use crate::config::types::ConfigFile;
use crate::error::{AppError, AppResult, ConfigError};
use crate::input::{EventRow, parse_line};
use crate::series::{derive_records, interpolate_linear};

thread_local! {
    static BASE_MATCHES: ArgMatches = ReportArgs::command().get_matches_from(["svctime", "events.tsv"]);
}

/// Parses one tab-separated event line.
///
/// # Errors
///
/// Returns the parse failure reason when the line is malformed.
pub fn parse_event_line_input(input: &str) -> Result<Option<EventRow>, String> {
    parse_line(input)
}

/// Parses every line of `input` and runs the recurrence over the rows that
/// parsed. Returns the number of derived records.
#[must_use]
pub fn derive_records_input(input: &str) -> usize {
    let rows: Vec<EventRow> = input
        .lines()
        .filter_map(|line| parse_line(line).ok().flatten())
        .collect();
    derive_records(&rows).len()
}

#[must_use]
pub fn interpolate_input(values: &[Option<f64>]) -> Vec<Option<f64>> {
    interpolate_linear(values)
}

/// Parses TOML config and applies it to defaults.
///
/// # Errors
///
/// Returns an error when parsing or validation fails.
pub fn apply_config_from_toml(input: &str) -> AppResult<()> {
    let config: ConfigFile = toml::from_str(input).map_err(|source| {
        AppError::config(ConfigError::ParseToml {
            path: PathBuf::from("svctime.toml"),
            source,
        })
    })?;
    apply_config_to_defaults(&config)
}

/// Parses JSON config and applies it to defaults.
///
/// # Errors
///
/// Returns an error when parsing or validation fails.
pub fn apply_config_from_json(input: &[u8]) -> AppResult<()> {
    let config: ConfigFile = serde_json::from_slice(input).map_err(|source| {
        AppError::config(ConfigError::ParseJson {
            path: PathBuf::from("svctime.json"),
            source,
        })
    })?;
    apply_config_to_defaults(&config)
}

/// Parses a positive u32 string value.
///
/// # Errors
///
/// Returns an error when the value is invalid or zero.
pub fn parse_positive_u32_input(input: &str) -> AppResult<u32> {
    let value: PositiveU32 = input.parse()?;
    Ok(value.get())
}

fn apply_config_to_defaults(config: &ConfigFile) -> AppResult<()> {
    BASE_MATCHES.with(|matches| {
        let mut args = ReportArgs::from_arg_matches(matches)?;
        apply_config(&mut args, matches, config)
    })
}
