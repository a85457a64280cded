use anyhow::Result;
use clap::Parser;
use logreport_core::conf::{Config, load_config};
use logreport_core::logging::init_logging;
use logreport_core::pipeline::{self, ScanPolicy, TracingDiagnostics};
use logreport_core::report::{report_path, write_report};
use logreport_core::source::{find_latest_log, open_log};
use std::io::BufRead;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info};

#[derive(Parser, Debug)]
#[command(
    name = "logreport",
    version,
    about = "Nginx access-log analyzer: per-URL timing report"
)]
struct Cli {
    /// Path to the JSON config file
    #[arg(long, default_value = "config.json")]
    config: PathBuf,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Logging setup depends on the config, so config errors go to stderr raw.
    let config = match load_config(&cli.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("config error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let _guard = init_logging(config.script_log.as_deref());

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(config: &Config) -> Result<()> {
    let Some(log) = find_latest_log(&config.log_dir)? else {
        info!(dir = %config.log_dir.display(), "no access log found");
        return Ok(());
    };

    let report = report_path(&config.report_dir, log.date);
    if report.exists() {
        info!(report = %report.display(), "report already exists");
        return Ok(());
    }

    info!(log = %log.path.display(), "analyzing access log");

    let lines = open_log(&log.path)?.lines();
    let policy = ScanPolicy {
        max_unmatched_perc: config.max_unmatched_perc,
    };
    let table = pipeline::run(lines, policy, &TracingDiagnostics, config.report_size)?;

    write_report(&table, &config.template, &report)?;
    info!(report = %report.display(), entries = table.len(), "report written");

    Ok(())
}
