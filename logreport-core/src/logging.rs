use std::fs;
use std::io;
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt};

/// Initialize the logging system with environment-based filtering
///
/// Uses environment variables for log level filtering (defaults to "info" if
/// not set). With a script-log path the output goes to that file through a
/// non-blocking appender; the returned guard must stay alive until shutdown
/// so buffered lines are flushed. Without one, output goes to stderr.
pub fn init_logging(script_log: Option<&Path>) -> Option<WorkerGuard> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    match script_log {
        Some(path) => {
            let dir = match path.parent() {
                Some(dir) if !dir.as_os_str().is_empty() => dir,
                _ => Path::new("."),
            };
            let file_name = path.file_name().unwrap_or_else(|| "script.log".as_ref());

            // The appender cannot create intermediate directories itself.
            let _ = fs::create_dir_all(dir);

            let appender = tracing_appender::rolling::never(dir, file_name);
            let (writer, guard) = tracing_appender::non_blocking(appender);

            fmt()
                .with_env_filter(filter)
                .with_writer(writer)
                .with_ansi(false)
                .init();

            Some(guard)
        }
        None => {
            fmt().with_env_filter(filter).with_writer(io::stderr).init();

            None
        }
    }
}
