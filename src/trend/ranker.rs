//! In-category recommendation ranking: magnitude discounted by freshness.

use std::cmp::Ordering;

use chrono::{DateTime, Utc};

use super::window::latest_per_content;
use crate::db::models::{ContentRecommendation, MetricSnapshot};

/// Rank contents of one category by freshness-discounted view count.
///
/// The input is a window of snapshots already filtered to the caller's
/// category, platform and day window. Each content is represented by its
/// latest in-window snapshot. Sorted descending by score, ties broken by
/// content id ascending.
pub fn recommend(
    snapshots: &[MetricSnapshot],
    now: DateTime<Utc>,
    limit: usize,
) -> Vec<ContentRecommendation> {
    let latest = latest_per_content(snapshots);

    let mut entries: Vec<ContentRecommendation> = latest
        .values()
        .map(|snap| {
            let freshness_days = (now - snap.collected_at).num_days().max(0);
            ContentRecommendation {
                content_id: snap.content_id.clone(),
                category: snap.category.clone(),
                score: score(snap.view_count, freshness_days),
                freshness_days,
                rank: 0,
            }
        })
        .collect();

    entries.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.content_id.cmp(&b.content_id))
    });
    entries.truncate(limit);
    for (i, entry) in entries.iter_mut().enumerate() {
        entry.rank = i as u32 + 1;
    }

    entries
}

/// `(views + 1) / (freshness_days + 1)`.
///
/// Strictly decreasing in freshness at fixed magnitude (the `+1` numerator
/// keeps that strict even for zero-view content), strictly increasing in
/// magnitude at fixed freshness, non-negative, deterministic.
fn score(view_count: i64, freshness_days: i64) -> f64 {
    (view_count as f64 + 1.0) / (freshness_days as f64 + 1.0)
}

#[cfg(test)]
mod tests {
    use chrono::Duration;

    use super::*;

    fn snap(content_id: &str, days_ago: i64, view_count: i64, now: DateTime<Utc>) -> MetricSnapshot {
        MetricSnapshot {
            content_id: content_id.to_string(),
            category: "gaming".to_string(),
            platform: "youtube".to_string(),
            collected_at: now - Duration::days(days_ago),
            view_count,
        }
    }

    #[test]
    fn fresher_content_with_equal_magnitude_ranks_strictly_higher() {
        let now = Utc::now();
        let snapshots = vec![snap("old", 5, 1000, now), snap("new", 1, 1000, now)];

        let entries = recommend(&snapshots, now, 20);

        assert_eq!(entries[0].content_id, "new");
        assert_eq!(entries[0].rank, 1);
        assert!(entries[0].score > entries[1].score);
    }

    #[test]
    fn zero_view_content_still_orders_by_freshness() {
        let now = Utc::now();
        let snapshots = vec![snap("old", 4, 0, now), snap("new", 0, 0, now)];

        let entries = recommend(&snapshots, now, 20);

        assert_eq!(entries[0].content_id, "new");
        assert!(entries[0].score > entries[1].score);
    }

    #[test]
    fn scores_are_non_negative_and_use_latest_snapshot() {
        let now = Utc::now();
        let snapshots = vec![snap("a", 6, 50, now), snap("a", 2, 90, now)];

        let entries = recommend(&snapshots, now, 20);

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].freshness_days, 2);
        assert!((entries[0].score - 91.0 / 3.0).abs() < 1e-9);
        assert!(entries[0].score >= 0.0);
    }

    #[test]
    fn equal_scores_break_ties_by_content_id() {
        let now = Utc::now();
        let snapshots = vec![snap("b", 1, 100, now), snap("a", 1, 100, now)];

        let entries = recommend(&snapshots, now, 20);

        assert_eq!(entries[0].content_id, "a");
        assert_eq!(entries[1].content_id, "b");
    }

    #[test]
    fn future_collected_at_clamps_freshness_to_zero() {
        let now = Utc::now();
        // Collector clock skew can put a snapshot slightly ahead of `now`.
        let snapshots = vec![snap("a", -1, 10, now)];

        let entries = recommend(&snapshots, now, 20);

        assert_eq!(entries[0].freshness_days, 0);
    }
}
