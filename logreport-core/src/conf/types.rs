use serde::Deserialize;
use std::path::PathBuf;

/// Runtime configuration, merged over built-in defaults from a JSON file.
///
/// Keys are upper-case in the file (`REPORT_SIZE`, `LOG_DIR`, ...); absent
/// keys keep their defaults, unknown keys are ignored.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "SCREAMING_SNAKE_CASE")]
pub struct Config {
    /// Maximum number of ranked entries kept in the report.
    pub report_size: usize,
    /// Directory the rendered reports are written to.
    pub report_dir: PathBuf,
    /// Directory scanned for access logs.
    pub log_dir: PathBuf,
    /// When set, diagnostics are appended to this file instead of stderr.
    pub script_log: Option<PathBuf>,
    /// HTML template carrying a `$table_json` placeholder.
    pub template: PathBuf,
    /// Unmatched-line percentage at or above which a run is aborted.
    pub max_unmatched_perc: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            report_size: 1000,
            report_dir: PathBuf::from("./reports"),
            log_dir: PathBuf::from("./var/log"),
            script_log: None,
            template: PathBuf::from("./templates/report.html"),
            max_unmatched_perc: 30.0,
        }
    }
}
