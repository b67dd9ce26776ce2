use serde::Serialize;

/// One row of an in-category recommendation ranking.
#[derive(Debug, Clone, Serialize)]
pub struct ContentRecommendation {
    pub content_id: String,
    pub category: String,
    /// Freshness-discounted magnitude. Non-negative and deterministic for
    /// identical inputs.
    pub score: f64,
    /// Whole days between the query instant and the latest snapshot,
    /// fraction truncated, never negative.
    pub freshness_days: i64,
    /// Dense 1-based position consistent with the sort key.
    pub rank: u32,
}
