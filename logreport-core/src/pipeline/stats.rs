use crate::pipeline::aggregate::TimeSampleSet;
use serde::Serialize;

/// Per-URL statistical summary, the unit of ranking and reporting.
///
/// Every floating-point field is rounded to 3 decimal digits, halfway cases
/// away from zero.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UrlStats {
    pub url: String,
    pub count: u64,
    pub count_perc: f64,
    pub time_sum: f64,
    pub time_perc: f64,
    pub time_avg: f64,
    pub time_max: f64,
    pub time_med: f64,
}

/// Compute the per-URL summaries. Output order follows the sample-set key
/// order; an empty sample set yields an empty vec.
pub fn analyze(samples: &TimeSampleSet) -> Vec<UrlStats> {
    let total_count: u64 = samples.values().map(|times| times.len() as u64).sum();
    let total_time: f64 = samples
        .values()
        .map(|times| times.iter().sum::<f64>())
        .sum();

    samples
        .iter()
        .map(|(url, times)| {
            let count = times.len() as u64;
            let time_sum: f64 = times.iter().sum();
            let time_max = times.iter().copied().fold(0.0, f64::max);

            UrlStats {
                url: url.clone(),
                count,
                count_perc: round3(100.0 * count as f64 / total_count as f64),
                time_sum: round3(time_sum),
                time_perc: round3(100.0 * time_sum / total_time),
                time_avg: round3(time_sum / count as f64),
                time_max: round3(time_max),
                time_med: round3(median(times)),
            }
        })
        .collect()
}

/// Statistical median: middle element of the sorted samples for odd lengths,
/// mean of the two middle elements for even lengths.
///
/// `times` must be non-empty; every URL key holds at least one sample.
pub(crate) fn median(times: &[f64]) -> f64 {
    let mut sorted = times.to_vec();
    sorted.sort_by(f64::total_cmp);

    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 1 {
        sorted[mid]
    } else {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    }
}

/// Round to 3 decimal digits, halfway cases away from zero.
pub(crate) fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}
