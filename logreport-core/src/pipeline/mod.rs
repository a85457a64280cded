//! Access-log analysis pipeline.
//!
//! One forward-only pass over the raw lines, with a single materialization
//! barrier at the aggregation step:
//!
//! lines (BufRead)
//! RecordScan
//! AccessRecord
//! TimeSampleSet
//! UrlStats
//! rank
//!
//! The scan is lazy, so a large log is never held in memory as text. The
//! aggregator drains it completely because the percentage columns need every
//! sample before anything can be computed. Lines that fail the grammar are
//! counted, not fatal; the tolerance policy runs once, after the source is
//! exhausted.

mod aggregate;
mod error;
mod grammar;
mod rank;
mod scan;
mod stats;

#[cfg(test)]
mod tests;

pub use aggregate::{TimeSampleSet, collect_samples};
pub use error::PipelineError;
pub use grammar::{AccessRecord, parse_line};
pub use rank::rank;
pub use scan::{Diagnostics, RecordScan, ScanPolicy, ScanTally, TracingDiagnostics};
pub use stats::{UrlStats, analyze};

use std::io;

/// Run the whole pipeline over a line source and return the ranked,
/// size-truncated report table.
pub fn run<I>(
    lines: I,
    policy: ScanPolicy,
    diagnostics: &dyn Diagnostics,
    report_size: usize,
) -> Result<Vec<UrlStats>, PipelineError>
where
    I: Iterator<Item = io::Result<String>>,
{
    let scan = RecordScan::new(lines, policy, diagnostics);
    let samples = collect_samples(scan)?;
    Ok(rank(analyze(&samples), report_size))
}
