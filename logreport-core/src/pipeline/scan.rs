use crate::pipeline::error::PipelineError;
use crate::pipeline::grammar::{AccessRecord, parse_line};
use std::io;
use tracing::info;

/// Tolerance policy for lines that fail the grammar.
#[derive(Debug, Clone, Copy)]
pub struct ScanPolicy {
    /// Unmatched percentage at or above which the whole run is aborted.
    pub max_unmatched_perc: f64,
}

impl Default for ScanPolicy {
    fn default() -> Self {
        Self {
            max_unmatched_perc: 30.0,
        }
    }
}

/// Line counters accumulated over one scan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanTally {
    pub total: u64,
    pub unmatched: u64,
}

impl ScanTally {
    pub fn matched(&self) -> u64 {
        self.total - self.unmatched
    }

    fn unmatched_perc(&self) -> f64 {
        (self.unmatched as f64 / self.total as f64) * 100.0
    }
}

/// Sink for end-of-scan line counts.
///
/// Observational only: implementations must not influence the pipeline
/// outcome.
pub trait Diagnostics {
    fn scan_finished(&self, tally: &ScanTally);
}

/// Production sink: emits the tally through `tracing`.
pub struct TracingDiagnostics;

impl Diagnostics for TracingDiagnostics {
    fn scan_finished(&self, tally: &ScanTally) {
        info!(
            total = tally.total,
            matched = tally.matched(),
            unmatched = tally.unmatched,
            "access log scanned"
        );
    }
}

/// Lazy, single-pass scan over raw log lines: parse each line, yield the
/// matched records in encounter order, count the rest.
///
/// The tolerance policy is terminal, not per-line: it runs once, when the
/// source is exhausted, so every record yielded before an abort was still a
/// valid parse. An empty source is detected the same way, after exhaustion.
pub struct RecordScan<'a, I> {
    lines: I,
    policy: ScanPolicy,
    diagnostics: &'a dyn Diagnostics,
    tally: ScanTally,
    done: bool,
}

impl<'a, I> RecordScan<'a, I>
where
    I: Iterator<Item = io::Result<String>>,
{
    pub fn new(lines: I, policy: ScanPolicy, diagnostics: &'a dyn Diagnostics) -> Self {
        Self {
            lines,
            policy,
            diagnostics,
            tally: ScanTally::default(),
            done: false,
        }
    }

    pub fn tally(&self) -> ScanTally {
        self.tally
    }

    fn finish(&mut self) -> Option<Result<AccessRecord, PipelineError>> {
        self.done = true;

        if self.tally.total == 0 {
            return Some(Err(PipelineError::EmptyLog));
        }

        self.diagnostics.scan_finished(&self.tally);

        if self.tally.unmatched_perc() >= self.policy.max_unmatched_perc {
            return Some(Err(PipelineError::TooManyUnmatched {
                unmatched: self.tally.unmatched,
                total: self.tally.total,
            }));
        }

        None
    }
}

impl<I> Iterator for RecordScan<'_, I>
where
    I: Iterator<Item = io::Result<String>>,
{
    type Item = Result<AccessRecord, PipelineError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        loop {
            let Some(line) = self.lines.next() else {
                return self.finish();
            };

            let line = match line {
                Ok(line) => line,
                Err(source) => {
                    self.done = true;
                    return Some(Err(PipelineError::Read { source }));
                }
            };

            self.tally.total += 1;

            match parse_line(&line) {
                Some(record) => return Some(Ok(record)),
                None => self.tally.unmatched += 1,
            }
        }
    }
}
