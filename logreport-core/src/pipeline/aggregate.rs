use crate::pipeline::error::PipelineError;
use crate::pipeline::grammar::AccessRecord;
use indexmap::IndexMap;

/// Request-time samples grouped by URL, keyed in first-seen order.
pub type TimeSampleSet = IndexMap<String, Vec<f64>>;

/// Drain the record stream and group request times by URL.
///
/// Full materialization on purpose: the statistics stage needs global totals
/// before any percentage can be computed, so nothing can stream past this
/// point.
pub fn collect_samples<S>(records: S) -> Result<TimeSampleSet, PipelineError>
where
    S: Iterator<Item = Result<AccessRecord, PipelineError>>,
{
    let mut samples = TimeSampleSet::new();

    for record in records {
        let record = record?;

        let time: f64 =
            record
                .request_time
                .parse()
                .map_err(|_| PipelineError::RequestTimeInvariant {
                    url: record.request_url.clone(),
                    value: record.request_time.clone(),
                })?;

        samples.entry(record.request_url).or_default().push(time);
    }

    Ok(samples)
}
