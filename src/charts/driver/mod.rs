mod naming;
mod plotting;

pub(crate) use plotting::plot_report;

#[cfg(test)]
pub(super) use naming::{chart_run_dir_name, sanitize_segment};
