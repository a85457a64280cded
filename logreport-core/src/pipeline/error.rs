use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PipelineError {
    /// The log resource yielded no lines at all.
    #[error("access log is empty")]
    EmptyLog,

    /// Unmatched ratio reached the tolerance after a full scan.
    #[error("too many unmatched lines: {unmatched} of {total}")]
    TooManyUnmatched { unmatched: u64, total: u64 },

    /// A request time that passed the grammar failed numeric conversion.
    /// Signals a grammar/aggregator mismatch, never bad input.
    #[error("request time {value:?} for {url:?} matched the grammar but is not a number")]
    RequestTimeInvariant { url: String, value: String },

    #[error("failed to read log line: {source}")]
    Read {
        #[source]
        source: io::Error,
    },
}
