use serde::Serialize;

/// One row of the short-term surge ranking.
///
/// Computed from two reference snapshots per content: the most recent one
/// and the one closest to (but not after) the start of the velocity window.
#[derive(Debug, Clone, Serialize)]
pub struct SurgeEntry {
    pub content_id: String,
    /// View count of the most recent snapshot in the window.
    pub latest_views: i64,
    /// View count of the baseline snapshot.
    pub baseline_views: i64,
    /// `latest_views - baseline_views`. The type admits negative values but
    /// non-positive deltas never reach a ranked list.
    pub delta_views_window: i64,
    /// Delta relative to the baseline count, floored to avoid division by
    /// zero. Always finite and non-negative in ranked output.
    pub growth_rate_window: f64,
    /// Ranking key. Currently the raw growth rate; kept as its own field so
    /// the policy can move to a weighted delta/rate combination without
    /// changing the record shape.
    pub surge_score: f64,
    /// Dense 1-based position consistent with the sort key.
    pub rank: u32,
}
