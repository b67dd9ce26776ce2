use serde::Serialize;

/// One row of the "hot categories" ranking.
///
/// Derived per query from the latest snapshot of every content in the
/// window; never persisted.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryTrendEntry {
    pub category: String,
    /// Platform filter the ranking was computed under, if any.
    pub platform: Option<String>,
    /// Dense 1-based position consistent with the sort key.
    pub rank: u32,
    /// Sum of the latest view count of each distinct content in the category.
    pub aggregate_score: i64,
    /// Distinct contents that contributed to the score.
    pub sample_count: u64,
}
