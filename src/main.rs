mod app;
mod args;
mod charts;
mod config;
mod entry;
mod error;
mod input;
mod series;
mod stats;
mod system;

use error::AppResult;

fn main() -> AppResult<()> {
    entry::run()
}
