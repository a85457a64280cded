use crate::source::error::SourceError;

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};

/// An access log located in the log directory, dated by its file name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogFile {
    pub path: PathBuf,
    pub date: NaiveDate,
}

// Plain or gzipped ui access logs only; anything else in the directory is
// someone else's file.
static LOG_NAME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^nginx-access-ui\.log-(\d{8})(?:\.gz)?$").expect("log name pattern compiles")
});

/// Scan `log_dir` for `nginx-access-ui.log-YYYYMMDD[.gz]` files and return
/// the newest one, if any.
///
/// Names whose eight digits are not a real calendar date are skipped.
pub fn find_latest_log(log_dir: &Path) -> Result<Option<LogFile>, SourceError> {
    let list_err = |source| SourceError::ListDir {
        path: log_dir.to_path_buf(),
        source,
    };

    let mut latest: Option<LogFile> = None;

    for entry in fs::read_dir(log_dir).map_err(list_err)? {
        let entry = entry.map_err(list_err)?;

        let name = entry.file_name();
        let Some(name) = name.to_str() else {
            continue;
        };

        let Some(date) = log_date(name) else {
            continue;
        };

        if latest.as_ref().is_none_or(|found| date > found.date) {
            latest = Some(LogFile {
                path: entry.path(),
                date,
            });
        }
    }

    Ok(latest)
}

fn log_date(name: &str) -> Option<NaiveDate> {
    let caps = LOG_NAME.captures(name)?;
    NaiveDate::parse_from_str(&caps[1], "%Y%m%d").ok()
}
