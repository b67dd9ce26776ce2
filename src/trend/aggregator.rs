//! Per-category ranking over the most recent collection window.

use rustc_hash::FxHashMap;

use super::window::latest_per_content;
use crate::db::models::{CategoryTrendEntry, MetricSnapshot};

/// Rank categories by the summed latest view counts of their contents.
///
/// The input is a window of snapshots already filtered to the caller's
/// platform. Each distinct content contributes its latest snapshot exactly
/// once. Sorted descending by aggregate score, ties broken by category name
/// ascending; no snapshots is a normal empty result.
pub fn hot_categories(
    snapshots: &[MetricSnapshot],
    platform: Option<&str>,
    limit: usize,
) -> Vec<CategoryTrendEntry> {
    let latest = latest_per_content(snapshots);

    let mut by_category: FxHashMap<&str, (i64, u64)> = FxHashMap::default();
    for snap in latest.values() {
        let slot = by_category.entry(snap.category.as_str()).or_insert((0, 0));
        slot.0 += snap.view_count;
        slot.1 += 1;
    }

    let mut entries: Vec<CategoryTrendEntry> = by_category
        .into_iter()
        .map(|(category, (aggregate_score, sample_count))| CategoryTrendEntry {
            category: category.to_string(),
            platform: platform.map(str::to_string),
            rank: 0,
            aggregate_score,
            sample_count,
        })
        .collect();

    entries.sort_by(|a, b| {
        b.aggregate_score
            .cmp(&a.aggregate_score)
            .then_with(|| a.category.cmp(&b.category))
    });
    entries.truncate(limit);
    for (i, entry) in entries.iter_mut().enumerate() {
        entry.rank = i as u32 + 1;
    }

    entries
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, Utc};

    use super::*;

    fn snap(content_id: &str, category: &str, days_ago: i64, view_count: i64) -> MetricSnapshot {
        MetricSnapshot {
            content_id: content_id.to_string(),
            category: category.to_string(),
            platform: "youtube".to_string(),
            collected_at: Utc::now() - Duration::days(days_ago),
            view_count,
        }
    }

    #[test]
    fn empty_window_yields_empty_ranking() {
        assert!(hot_categories(&[], None, 20).is_empty());
    }

    #[test]
    fn ranks_categories_by_summed_latest_views() {
        let snapshots = vec![
            snap("a", "gaming", 2, 100),
            snap("b", "gaming", 1, 300),
            snap("c", "music", 1, 500),
        ];

        let entries = hot_categories(&snapshots, None, 20);

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].category, "music");
        assert_eq!(entries[0].aggregate_score, 500);
        assert_eq!(entries[0].rank, 1);
        assert_eq!(entries[1].category, "gaming");
        assert_eq!(entries[1].aggregate_score, 400);
        assert_eq!(entries[1].sample_count, 2);
        assert_eq!(entries[1].rank, 2);
    }

    #[test]
    fn re_collections_of_same_content_do_not_double_count() {
        let snapshots = vec![snap("a", "gaming", 3, 100), snap("a", "gaming", 1, 150)];

        let entries = hot_categories(&snapshots, None, 20);

        assert_eq!(entries[0].aggregate_score, 150);
        assert_eq!(entries[0].sample_count, 1);
    }

    #[test]
    fn equal_scores_break_ties_by_category_name() {
        let snapshots = vec![snap("a", "music", 1, 100), snap("b", "gaming", 1, 100)];

        let entries = hot_categories(&snapshots, None, 20);

        assert_eq!(entries[0].category, "gaming");
        assert_eq!(entries[1].category, "music");
    }

    #[test]
    fn limit_truncates_after_ordering() {
        let snapshots = vec![
            snap("a", "gaming", 1, 100),
            snap("b", "music", 1, 300),
            snap("c", "news", 1, 200),
        ];

        let entries = hot_categories(&snapshots, Some("youtube"), 2);

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].category, "music");
        assert_eq!(entries[1].category, "news");
        assert_eq!(entries[1].platform.as_deref(), Some("youtube"));
    }
}
