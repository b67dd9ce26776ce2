use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rustc_hash::FxHashSet;
use tokio_postgres::Row;

use crate::db::models::MetricSnapshot;
use crate::db::postgres::PostgresClient;
use crate::stopwords::StopwordStore;
use crate::trend::{MetricSnapshotStore, SnapshotQuery};

impl PostgresClient {
    // ==================== SNAPSHOTS ====================

    /// Snapshots inside `[since, until]`, optionally filtered by category
    /// and platform, ordered by collection time ascending. The secondary
    /// order keys keep identical arguments returning identical row order.
    pub async fn get_snapshots(
        &self,
        query: &SnapshotQuery,
    ) -> anyhow::Result<Vec<MetricSnapshot>> {
        let client = self.pool.get().await?;
        let sql = r#"
            SELECT content_id, category, platform, collected_at, view_count
            FROM trends.metric_snapshots
            WHERE collected_at >= $1 AND collected_at <= $2
              AND ($3::text IS NULL OR lower(category) = $3)
              AND ($4::text IS NULL OR lower(platform) = $4)
            ORDER BY collected_at ASC, platform ASC, content_id ASC
        "#;

        let rows = client
            .query(
                sql,
                &[&query.since, &query.until, &query.category, &query.platform],
            )
            .await?;

        Ok(rows.iter().map(row_to_snapshot).collect())
    }

    /// Distinct category labels, most recently collected first.
    pub async fn get_categories(&self, limit: usize) -> anyhow::Result<Vec<String>> {
        let client = self.pool.get().await?;
        let sql = r#"
            SELECT category
            FROM trends.metric_snapshots
            GROUP BY category
            ORDER BY max(collected_at) DESC, category ASC
            LIMIT $1
        "#;

        let rows = client.query(sql, &[&(limit as i64)]).await?;
        Ok(rows.iter().map(|row| row.get("category")).collect())
    }

    /// Delete snapshots collected before the cutoff. Returns removed rows.
    pub async fn prune_snapshots(&self, older_than: DateTime<Utc>) -> anyhow::Result<u64> {
        let client = self.pool.get().await?;
        let deleted = client
            .execute(
                "DELETE FROM trends.metric_snapshots WHERE collected_at < $1",
                &[&older_than],
            )
            .await?;
        Ok(deleted)
    }

    // ==================== STOPWORDS ====================

    /// All enabled stopwords for a language.
    pub async fn get_stopwords(&self, lang: &str) -> anyhow::Result<FxHashSet<String>> {
        let client = self.pool.get().await?;
        let rows = client
            .query(
                "SELECT word FROM trends.stopwords WHERE lang = $1 AND enabled",
                &[&lang],
            )
            .await?;

        Ok(rows.iter().map(|row| row.get("word")).collect())
    }
}

fn row_to_snapshot(row: &Row) -> MetricSnapshot {
    let view_count: i64 = row.get("view_count");
    MetricSnapshot {
        content_id: row.get("content_id"),
        category: row.get("category"),
        platform: row.get("platform"),
        collected_at: row.get("collected_at"),
        // The schema forbids negatives; clamp anyway so the scoring core
        // never sees one.
        view_count: view_count.max(0),
    }
}

#[async_trait]
impl MetricSnapshotStore for PostgresClient {
    async fn query(&self, query: &SnapshotQuery) -> anyhow::Result<Vec<MetricSnapshot>> {
        self.get_snapshots(query).await
    }

    async fn list_categories(&self, limit: usize) -> anyhow::Result<Vec<String>> {
        self.get_categories(limit).await
    }
}

#[async_trait]
impl StopwordStore for PostgresClient {
    async fn get_stopwords(&self, lang: &str) -> anyhow::Result<FxHashSet<String>> {
        PostgresClient::get_stopwords(self, lang).await
    }
}
