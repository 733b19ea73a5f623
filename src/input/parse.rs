use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::debug;

use crate::error::{AppError, AppResult, InputError};

/// One line of the event log.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EventRow {
    /// Unix seconds.
    pub tn: i64,
    /// Requests observed in that second.
    pub cn: u64,
    /// Sum of response times observed in that second.
    pub rn: f64,
}

impl EventRow {
    /// Mean response time per request.
    #[must_use]
    pub fn mean_rn(&self) -> Option<f64> {
        per_request(self.rn, self.cn)
    }
}

/// `total / cn`, undefined when no request was counted or the ratio is not
/// finite.
pub(crate) fn per_request(total: f64, cn: u64) -> Option<f64> {
    if cn == 0 {
        return None;
    }
    Some(total / cn as f64).filter(|value| value.is_finite())
}

/// Parses one tab-separated line into an [`EventRow`]. Blank lines yield
/// `Ok(None)`.
///
/// # Errors
///
/// Returns a description of the problem when the line does not hold exactly
/// three fields parseable as `(integer, integer, float)`.
pub fn parse_line(line: &str) -> Result<Option<EventRow>, String> {
    let trimmed = line.trim_end_matches(['\r', '\n']);
    if trimmed.trim().is_empty() {
        return Ok(None);
    }

    let mut fields = trimmed.split('\t');
    let (Some(tn), Some(cn), Some(rn), None) =
        (fields.next(), fields.next(), fields.next(), fields.next())
    else {
        return Err(format!(
            "expected 3 tab-separated fields, got {}",
            trimmed.split('\t').count()
        ));
    };

    let tn = tn
        .trim()
        .parse::<i64>()
        .map_err(|err| format!("invalid timestamp '{}': {}", tn.trim(), err))?;
    let cn = cn
        .trim()
        .parse::<u64>()
        .map_err(|err| format!("invalid request count '{}': {}", cn.trim(), err))?;
    let rn = rn
        .trim()
        .parse::<f64>()
        .map_err(|err| format!("invalid response time '{}': {}", rn.trim(), err))?;

    Ok(Some(EventRow { tn, cn, rn }))
}

/// Reads the whole event log into memory. Rows are kept in file order; the
/// log is expected to be sorted by timestamp already.
///
/// # Errors
///
/// Returns an error when the file cannot be read, a row is malformed, or the
/// file holds no rows at all.
pub fn read_event_log(path: &Path) -> AppResult<Vec<EventRow>> {
    let file = File::open(path).map_err(|err| {
        AppError::input(InputError::Read {
            path: path.to_path_buf(),
            source: err,
        })
    })?;

    let mut rows = Vec::new();
    for (index, line) in BufReader::new(file).lines().enumerate() {
        let line = line.map_err(|err| {
            AppError::input(InputError::Read {
                path: path.to_path_buf(),
                source: err,
            })
        })?;
        let parsed = parse_line(&line).map_err(|reason| {
            AppError::input(InputError::MalformedRow {
                path: path.to_path_buf(),
                line: index.saturating_add(1),
                reason,
            })
        })?;
        if let Some(row) = parsed {
            rows.push(row);
        }
    }

    if rows.is_empty() {
        return Err(AppError::input(InputError::Empty {
            path: path.to_path_buf(),
        }));
    }

    debug!("Read {} rows from '{}'", rows.len(), path.display());
    Ok(rows)
}
