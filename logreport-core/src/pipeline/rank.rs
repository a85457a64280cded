use crate::pipeline::stats::UrlStats;

/// Order summaries by total time, heaviest first, and keep the top
/// `report_size` entries.
///
/// The sort is stable, so equal totals keep their statistics-engine order.
pub fn rank(mut stats: Vec<UrlStats>, report_size: usize) -> Vec<UrlStats> {
    stats.sort_by(|a, b| b.time_sum.total_cmp(&a.time_sum));
    stats.truncate(report_size);
    stats
}
