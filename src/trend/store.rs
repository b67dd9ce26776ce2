use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::db::models::MetricSnapshot;

/// Arguments for a windowed snapshot fetch.
#[derive(Debug, Clone)]
pub struct SnapshotQuery {
    /// Lowercased category filter, if any.
    pub category: Option<String>,
    /// Lowercased platform filter, if any.
    pub platform: Option<String>,
    pub since: DateTime<Utc>,
    pub until: DateTime<Utc>,
}

/// Read-only port over the persisted snapshot time series.
///
/// Implementations must return rows ordered by `collected_at` ascending and
/// be deterministic for identical arguments. Failures mean the store is
/// unreachable; the core treats them as fatal for the call and does not
/// retry.
#[async_trait]
pub trait MetricSnapshotStore: Send + Sync {
    async fn query(&self, query: &SnapshotQuery) -> anyhow::Result<Vec<MetricSnapshot>>;

    /// Distinct category labels, most recently collected first.
    async fn list_categories(&self, limit: usize) -> anyhow::Result<Vec<String>>;
}
