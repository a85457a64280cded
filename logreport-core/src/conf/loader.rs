use crate::conf::error::ConfigError;
use crate::conf::types::Config;

use std::fs;
use std::path::Path;

/// Load the JSON config at `path`, merged over built-in defaults.
///
/// The file must exist and parse. A partial file is fine: absent keys keep
/// their defaults.
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    let raw = fs::read_to_string(path).map_err(|e| ConfigError::read_file(path, e))?;
    let config: Config = serde_json::from_str(&raw).map_err(|e| ConfigError::parse(path, e))?;

    validate(config)
}

fn validate(config: Config) -> Result<Config, ConfigError> {
    if config.report_size == 0 {
        return Err(ConfigError::ReportSizeZero);
    }

    if !(0.0..=100.0).contains(&config.max_unmatched_perc) {
        return Err(ConfigError::ThresholdOutOfRange {
            value: config.max_unmatched_perc,
        });
    }

    Ok(config)
}
