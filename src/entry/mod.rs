use clap::{ArgMatches, CommandFactory, FromArgMatches};

use crate::args::ReportArgs;
use crate::config::{apply_config, load_config};
use crate::error::AppResult;

pub(crate) fn run() -> AppResult<()> {
    let (mut args, matches) = parse_args()?;

    if let Some(config) = load_config(args.config.as_deref())? {
        apply_config(&mut args, &matches, &config)?;
    }

    crate::system::logger::init_logging(args.verbose, args.no_color);

    crate::app::run_report(&args)
}

fn parse_args() -> AppResult<(ReportArgs, ArgMatches)> {
    let matches = ReportArgs::command().get_matches();
    let args = ReportArgs::from_arg_matches(&matches)?;
    Ok((args, matches))
}
