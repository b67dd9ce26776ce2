use chrono::{DateTime, Utc};
use serde::Serialize;

/// One timestamped measurement of a content item's view count.
///
/// Population: external collectors write one row per (platform, content)
/// per collection pass. Rows are immutable once written and retained for
/// at least the longest supported lookback window (90 days).
///
/// Query Patterns:
///   - "All snapshots for category X in the last N days"
///   - "Latest snapshot per content for ranking"
///   - "Latest vs. N-days-ago snapshot for surge detection"
#[derive(Debug, Clone, Serialize)]
pub struct MetricSnapshot {
    pub content_id: String,
    pub category: String,
    pub platform: String,
    pub collected_at: DateTime<Utc>,
    /// Cumulative view count at collection time. Never negative.
    pub view_count: i64,
}
