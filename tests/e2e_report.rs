mod support_report;

use std::fs;

use tempfile::tempdir;

use support_report::{describe, run_svctime, two_week_log, write_input};

const CHART_FILES: [&str; 7] = [
    "mean_response_time.png",
    "daily_mean_response_time.png",
    "daily_std_response_time.png",
    "seasonal_decomposition.png",
    "service_time_distribution.png",
    "service_time_vs_requests.png",
    "requests_and_service_time.png",
];

#[test]
fn e2e_report_prints_statistics_without_charts() -> Result<(), String> {
    let dir = tempdir().map_err(|err| format!("tempdir failed: {}", err))?;
    let input = write_input(dir.path(), "events.tsv", &two_week_log())?;

    let output = run_svctime(dir.path(), [input.as_str(), "--no-charts"])?;
    if !output.status.success() {
        return Err(describe(&output));
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    let expected = [
        "Input: events.tsv",
        "Window: 2023-11-15 06:00:01 .. 2023-11-29 06:00:01 UTC (1209601 seconds)",
        "Seconds with records: 20160",
        "maximum value of the response time per request :",
        "0.590000",
        "  week 1: ",
        "  week 2: ",
        "  day  1: mean ",
        "  day 14: mean ",
        "log-normal fit",
        "daily seasonal amplitude",
    ];
    for needle in expected {
        if !stdout.contains(needle) {
            return Err(format!("missing '{}' in report\n{}", needle, describe(&output)));
        }
    }
    if stdout.contains("  day 15") || stdout.contains("  week 3") {
        return Err(format!("unexpected label in report\n{}", describe(&output)));
    }
    Ok(())
}

#[test]
fn e2e_report_writes_charts() -> Result<(), String> {
    let dir = tempdir().map_err(|err| format!("tempdir failed: {}", err))?;
    let input = write_input(dir.path(), "events.tsv", &two_week_log())?;
    let charts = dir.path().join("charts");
    let charts_path = charts.to_string_lossy().into_owned();

    let output = run_svctime(
        dir.path(),
        [
            input.as_str(),
            "--charts-path",
            charts_path.as_str(),
            "--chart-width",
            "400",
            "--chart-height",
            "300",
        ],
    )?;
    if !output.status.success() {
        return Err(describe(&output));
    }

    let runs: Vec<_> = fs::read_dir(&charts)
        .map_err(|err| format!("read charts dir failed: {}", err))?
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .collect();
    let [run_dir] = runs.as_slice() else {
        return Err(format!("expected one run dir, found {:?}", runs));
    };
    let name = run_dir
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    if !name.starts_with("run-") || !name.ends_with("_events") {
        return Err(format!("unexpected run dir name {}", name));
    }
    for file in CHART_FILES {
        if !run_dir.join(file).is_file() {
            return Err(format!("missing chart {}", file));
        }
    }
    Ok(())
}

#[test]
fn e2e_report_config_file_disables_charts() -> Result<(), String> {
    let dir = tempdir().map_err(|err| format!("tempdir failed: {}", err))?;
    let input = write_input(dir.path(), "events.tsv", &two_week_log())?;
    let charts = dir.path().join("charts");
    let config = format!(
        "charts_path = \"{}\"\nno_charts = true\n",
        charts.to_string_lossy().replace('\\', "/")
    );
    write_input(dir.path(), "svctime.toml", &config)?;

    let output = run_svctime(dir.path(), [input.as_str()])?;
    if !output.status.success() {
        return Err(describe(&output));
    }
    if charts.exists() {
        return Err("charts written although config disabled them".to_owned());
    }
    Ok(())
}

#[test]
fn e2e_report_requires_input_argument() -> Result<(), String> {
    let dir = tempdir().map_err(|err| format!("tempdir failed: {}", err))?;

    let output = run_svctime(dir.path(), ["--no-charts"])?;
    if output.status.success() {
        return Err(format!("expected failure\n{}", describe(&output)));
    }
    let stderr = String::from_utf8_lossy(&output.stderr);
    if !stderr.contains("MissingArgument") {
        return Err(format!("unexpected error\n{}", describe(&output)));
    }
    Ok(())
}

#[test]
fn e2e_report_rejects_malformed_row() -> Result<(), String> {
    let dir = tempdir().map_err(|err| format!("tempdir failed: {}", err))?;
    let input = write_input(
        dir.path(),
        "broken.tsv",
        "1700028001\t1\t0.5\n1700028061\tone\t0.5\n",
    )?;

    let output = run_svctime(dir.path(), [input.as_str(), "--no-charts"])?;
    if output.status.success() {
        return Err(format!("expected failure\n{}", describe(&output)));
    }
    let stderr = String::from_utf8_lossy(&output.stderr);
    if !stderr.contains("MalformedRow") || !stderr.contains("line: 2") {
        return Err(format!("expected line number in error\n{}", describe(&output)));
    }
    Ok(())
}
