use crate::pipeline::UrlStats;
use crate::report::error::ReportError;

use std::fs;
use std::path::Path;

const TABLE_PLACEHOLDER: &str = "$table_json";

/// Render the ranked table into the HTML template and write it to
/// `report_path`, creating the report directory if needed.
pub fn write_report(
    table: &[UrlStats],
    template_path: &Path,
    report_path: &Path,
) -> Result<(), ReportError> {
    let template = fs::read_to_string(template_path).map_err(|source| ReportError::Template {
        path: template_path.to_path_buf(),
        source,
    })?;

    let html = template.replace(TABLE_PLACEHOLDER, &serde_json::to_string(table)?);

    let write_err = |source| ReportError::Write {
        path: report_path.to_path_buf(),
        source,
    };

    if let Some(dir) = report_path.parent() {
        fs::create_dir_all(dir).map_err(write_err)?;
    }

    fs::write(report_path, html).map_err(write_err)
}
