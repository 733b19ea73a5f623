use std::path::{Path, PathBuf};

use chrono::{Datelike, Local, Timelike};

pub(super) fn resolve_chart_output_dir(charts_path: &str, input: &Path) -> PathBuf {
    Path::new(charts_path).join(chart_run_dir_name(input))
}

pub(crate) fn chart_run_dir_name(input: &Path) -> String {
    let now = Local::now();
    let stamp = format!(
        "{:04}-{:02}-{:02}_{:02}-{:02}-{:02}",
        now.year(),
        now.month(),
        now.day(),
        now.hour(),
        now.minute(),
        now.second()
    );
    format!("run-{}_{}", stamp, input_segment(input))
}

fn input_segment(input: &Path) -> String {
    let sanitized = input
        .file_stem()
        .map(|stem| sanitize_segment(&stem.to_string_lossy()))
        .unwrap_or_default();
    if sanitized.is_empty() {
        "input".to_owned()
    } else {
        sanitized
    }
}

pub(crate) fn sanitize_segment(input: &str) -> String {
    input
        .chars()
        .map(|ch| match ch {
            'a'..='z' | 'A'..='Z' | '0'..='9' | '-' | '_' | '.' => ch,
            _ => '-',
        })
        .collect()
}
