use crate::pipeline::{UrlStats, rank};
use pretty_assertions::assert_eq;

fn entry(url: &str, time_sum: f64) -> UrlStats {
    UrlStats {
        url: url.to_string(),
        count: 1,
        count_perc: 0.0,
        time_sum,
        time_perc: 0.0,
        time_avg: 0.0,
        time_max: 0.0,
        time_med: 0.0,
    }
}

fn urls(stats: &[UrlStats]) -> Vec<&str> {
    stats.iter().map(|s| s.url.as_str()).collect()
}

#[test]
fn orders_by_total_time_descending_and_truncates() {
    // Arrange
    let stats = vec![
        entry("/a", 1.0),
        entry("/b", 5.0),
        entry("/c", 3.0),
        entry("/d", 2.0),
        entry("/e", 4.0),
    ];

    // Act
    let ranked = rank(stats, 2);

    // Assert
    assert_eq!(urls(&ranked), vec!["/b", "/e"]);
}

#[test]
fn ties_keep_their_input_order() {
    // Arrange
    let stats = vec![entry("/a", 1.0), entry("/b", 2.0), entry("/c", 1.0)];

    // Act
    let ranked = rank(stats, 10);

    // Assert
    assert_eq!(urls(&ranked), vec!["/b", "/a", "/c"]);
}

#[test]
fn short_input_is_returned_whole() {
    // Arrange
    let stats = vec![entry("/a", 1.0), entry("/b", 2.0)];

    // Act
    let ranked = rank(stats, 1000);

    // Assert
    assert_eq!(ranked.len(), 2);
}
