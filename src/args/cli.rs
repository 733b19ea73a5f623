use clap::Parser;
use std::path::PathBuf;

use super::defaults::default_charts_path;
use super::parsers::{parse_bool_env, parse_positive_u32};
use super::types::PositiveU32;

#[derive(Debug, Parser, Clone)]
#[clap(
    version,
    about = "Derive per-second service time and carried-over delay from a request log, then report daily/weekly statistics and export charts."
)]
pub struct ReportArgs {
    /// Tab-separated event log: unix seconds, request count, response time sum
    #[arg(value_name = "INPUT")]
    pub input: Option<PathBuf>,

    /// Directory where chart runs are written
    #[arg(long = "charts-path", default_value_t = default_charts_path())]
    pub charts_path: String,

    /// Skip chart rendering and only print statistics
    #[arg(long = "no-charts")]
    pub no_charts: bool,

    /// Chart width in pixels
    #[arg(long = "chart-width", default_value = "1600", value_parser = parse_positive_u32)]
    pub chart_width: PositiveU32,

    /// Chart height in pixels
    #[arg(long = "chart-height", default_value = "600", value_parser = parse_positive_u32)]
    pub chart_height: PositiveU32,

    /// Path to config file (TOML or JSON)
    #[arg(long = "config")]
    pub config: Option<String>,

    /// Enable debug logging
    #[arg(long = "verbose", short = 'v')]
    pub verbose: bool,

    /// Disable colored log output
    #[arg(long = "no-color", env = "NO_COLOR", value_parser = parse_bool_env)]
    pub no_color: bool,
}
