use std::ffi::OsStr;
use std::fmt::Write as _;
use std::path::Path;
use std::process::{Command, Output};

/// 06:00:01 UTC on 2023-11-15.
pub const WINDOW_START: i64 = 1_700_028_001;
pub const STEP_S: i64 = 60;
pub const ROWS: i64 = 14 * 24 * 60;

/// Two weeks of records, one per minute, with `mean_Rn` cycling through
/// `0.50 ..= 0.59`.
#[must_use]
pub fn two_week_log() -> String {
    let mut out = String::new();
    for step in 0..ROWS {
        let cn = 1 + step % 5;
        let mean_rn = 0.5 + (step % 10) as f64 * 0.01;
        let rn = cn as f64 * mean_rn;
        let _write_result = writeln!(out, "{}\t{}\t{}", WINDOW_START + step * STEP_S, cn, rn);
    }
    out
}

/// Writes `contents` to `name` inside `dir`.
///
/// # Errors
///
/// Returns an error when the file cannot be written.
pub fn write_input(dir: &Path, name: &str, contents: &str) -> Result<String, String> {
    let path = dir.join(name);
    std::fs::write(&path, contents).map_err(|err| format!("write input failed: {}", err))?;
    Ok(path.to_string_lossy().into_owned())
}

/// Runs the binary from `cwd` so no stray default config is picked up.
///
/// # Errors
///
/// Returns an error when the binary cannot be spawned.
pub fn run_svctime<I, S>(cwd: &Path, args: I) -> Result<Output, String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let bin = svctime_bin()?;
    Command::new(bin)
        .args(args)
        .current_dir(cwd)
        .env("RUST_LOG", "error")
        .env_remove("SVCTIME_LOG")
        .output()
        .map_err(|err| format!("run svctime failed: {}", err))
}

fn svctime_bin() -> Result<String, String> {
    option_env!("CARGO_BIN_EXE_svctime").map_or_else(
        || Err("CARGO_BIN_EXE_svctime missing at compile time.".to_owned()),
        |path| Ok(path.to_owned()),
    )
}

#[must_use]
pub fn describe(output: &Output) -> String {
    format!(
        "status: {}\nstdout: {}\nstderr: {}",
        output.status,
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    )
}
