use std::io::Write;

use tempfile::NamedTempFile;

use super::*;
use crate::error::{AppError, AppResult, InputError};

fn write_log(content: &str) -> AppResult<NamedTempFile> {
    let mut file = NamedTempFile::new()?;
    file.write_all(content.as_bytes())?;
    file.flush()?;
    Ok(file)
}

#[test]
fn parse_line_reads_three_fields() -> Result<(), String> {
    let row = parse_line("3600\t4\t1.5")?.ok_or("Expected a row")?;
    if row.tn != 3600 || row.cn != 4 {
        return Err(format!("Unexpected row: {:?}", row));
    }
    if (row.rn - 1.5).abs() > f64::EPSILON {
        return Err(format!("Unexpected rn: {}", row.rn));
    }
    match row.mean_rn() {
        Some(mean) if (mean - 0.375).abs() < 1e-12 => Ok(()),
        other => Err(format!("Unexpected mean_rn: {:?}", other)),
    }
}

#[test]
fn parse_line_skips_blank_lines() -> Result<(), String> {
    if parse_line("")?.is_some() || parse_line("  \r")?.is_some() {
        return Err("Expected blank lines to be skipped".to_owned());
    }
    Ok(())
}

#[test]
fn parse_line_tolerates_crlf() -> Result<(), String> {
    let row = parse_line("10\t1\t0.25\r")?.ok_or("Expected a row")?;
    if row.tn != 10 {
        return Err("Unexpected tn".to_owned());
    }
    Ok(())
}

#[test]
fn parse_line_rejects_wrong_field_count() -> Result<(), String> {
    if parse_line("10\t1").is_ok() {
        return Err("Expected two fields to fail".to_owned());
    }
    if parse_line("10\t1\t0.5\t7").is_ok() {
        return Err("Expected four fields to fail".to_owned());
    }
    Ok(())
}

#[test]
fn parse_line_rejects_non_numeric_fields() -> Result<(), String> {
    for line in ["abc\t1\t0.5", "10\t1.5\t0.5", "10\t-1\t0.5", "10\t1\tfast"] {
        if parse_line(line).is_ok() {
            return Err(format!("Expected '{}' to fail", line));
        }
    }
    Ok(())
}

#[test]
fn mean_rn_is_undefined_without_requests() -> Result<(), String> {
    let row = EventRow {
        tn: 0,
        cn: 0,
        rn: 0.0,
    };
    if row.mean_rn().is_some() {
        return Err("Expected mean_rn to be undefined".to_owned());
    }
    Ok(())
}

#[test]
fn read_event_log_keeps_file_order() -> AppResult<()> {
    let file = write_log("0\t1\t0.5\n1\t2\t1.0\n\n5\t1\t0.2\n")?;
    let rows = read_event_log(file.path())?;
    let stamps: Vec<i64> = rows.iter().map(|row| row.tn).collect();
    if stamps != vec![0, 1, 5] {
        return Err(AppError::analysis(format!("Unexpected stamps: {:?}", stamps)));
    }
    Ok(())
}

#[test]
fn read_event_log_reports_malformed_line_number() -> AppResult<()> {
    let file = write_log("0\t1\t0.5\n1\t2\n")?;
    match read_event_log(file.path()) {
        Err(AppError::Input(InputError::MalformedRow { line: 2, .. })) => Ok(()),
        Err(err) => Err(AppError::analysis(format!("Unexpected error: {}", err))),
        Ok(_) => Err(AppError::analysis("Expected malformed row error")),
    }
}

#[test]
fn read_event_log_rejects_empty_file() -> AppResult<()> {
    let file = write_log("\n\n")?;
    match read_event_log(file.path()) {
        Err(AppError::Input(InputError::Empty { .. })) => Ok(()),
        Err(err) => Err(AppError::analysis(format!("Unexpected error: {}", err))),
        Ok(_) => Err(AppError::analysis("Expected empty input error")),
    }
}

#[test]
fn read_event_log_reports_missing_file() -> AppResult<()> {
    let dir = tempfile::tempdir()?;
    match read_event_log(&dir.path().join("absent.tsv")) {
        Err(AppError::Input(InputError::Read { .. })) => Ok(()),
        Err(err) => Err(AppError::analysis(format!("Unexpected error: {}", err))),
        Ok(_) => Err(AppError::analysis("Expected read error")),
    }
}
