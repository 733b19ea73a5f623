//! CLI argument types and parsing helpers.
mod cli;
mod defaults;
pub(crate) mod parsers;
mod types;


pub use cli::ReportArgs;
pub use types::PositiveU32;

#[cfg(test)]
use defaults::default_charts_path;
