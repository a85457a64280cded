mod error;
mod render;


pub use error::ReportError;
pub use render::write_report;

use chrono::{Datelike, NaiveDate};
use std::path::{Path, PathBuf};

/// Report file name for a log dated `date`, e.g. `report-2017.06.30.html`.
pub fn report_name(date: NaiveDate) -> String {
    format!(
        "report-{:04}.{:02}.{:02}.html",
        date.year(),
        date.month(),
        date.day()
    )
}

/// Where the report for `date` lives under `report_dir`.
pub fn report_path(report_dir: &Path, date: NaiveDate) -> PathBuf {
    report_dir.join(report_name(date))
}
