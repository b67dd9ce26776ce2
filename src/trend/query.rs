use std::sync::Arc;

use chrono::{Duration, Utc};

use super::error::TrendError;
use super::filters::{
    self, CATEGORY_LIMIT_MAX, LIMIT_MAX, RECOMMEND_DAYS_MAX, SURGE_DAYS_MAX,
};
use super::store::{MetricSnapshotStore, SnapshotQuery};
use super::{aggregator, ranker, surge};
use crate::config::TrendSettings;
use crate::db::models::{CategoryTrendEntry, ContentRecommendation, SurgeEntry};
use crate::stopwords::StopwordFilter;
use crate::utils::{normalize_label, normalize_platform};

/// Single entry point for trend queries.
///
/// Normalizes and validates caller filters, fetches one snapshot window per
/// call from the store, and delegates scoring to the pure ranking
/// components. Holds no cross-call mutable state; concurrent queries need no
/// coordination.
pub struct TrendQuery {
    store: Arc<dyn MetricSnapshotStore>,
    stopwords: StopwordFilter,
    settings: TrendSettings,
}

impl TrendQuery {
    pub fn new(
        store: Arc<dyn MetricSnapshotStore>,
        stopwords: StopwordFilter,
        settings: TrendSettings,
    ) -> Self {
        Self {
            store,
            stopwords,
            settings,
        }
    }

    /// Category ranking over the most recent collection window
    /// (`trend.hot_window_days`).
    pub async fn hot_categories(
        &self,
        platform: Option<&str>,
        limit: usize,
    ) -> Result<Vec<CategoryTrendEntry>, TrendError> {
        filters::validate_limit(limit, LIMIT_MAX)?;
        let platform = normalize_platform(platform);

        let now = Utc::now();
        let snapshots = self
            .fetch(SnapshotQuery {
                category: None,
                platform: platform.clone(),
                since: now - Duration::days(i64::from(self.settings.hot_window_days)),
                until: now,
            })
            .await?;

        Ok(aggregator::hot_categories(
            &snapshots,
            platform.as_deref(),
            limit,
        ))
    }

    /// In-category recommendations over the trailing `days` window.
    pub async fn recommend(
        &self,
        category: &str,
        platform: Option<&str>,
        days: u32,
        limit: usize,
    ) -> Result<Vec<ContentRecommendation>, TrendError> {
        filters::validate_limit(limit, LIMIT_MAX)?;
        filters::validate_window(days, RECOMMEND_DAYS_MAX)?;
        let category = normalize_label(category);
        if category.is_empty() {
            return Err(TrendError::EmptyCategory);
        }
        let platform = normalize_platform(platform);

        let now = Utc::now();
        let snapshots = self
            .fetch(SnapshotQuery {
                category: Some(category),
                platform,
                since: now - Duration::days(i64::from(days)),
                until: now,
            })
            .await?;

        Ok(ranker::recommend(&snapshots, now, limit))
    }

    /// Surging contents over the trailing `days` window, compared against
    /// `velocity_days` ago.
    pub async fn surge(
        &self,
        platform: Option<&str>,
        days: u32,
        velocity_days: u32,
        limit: usize,
    ) -> Result<Vec<SurgeEntry>, TrendError> {
        filters::validate_limit(limit, LIMIT_MAX)?;
        filters::validate_window(days, SURGE_DAYS_MAX)?;
        filters::validate_velocity(days, velocity_days)?;
        let platform = normalize_platform(platform);

        let now = Utc::now();
        let snapshots = self
            .fetch(SnapshotQuery {
                category: None,
                platform,
                since: now - Duration::days(i64::from(days)),
                until: now,
            })
            .await?;

        Ok(surge::detect(&snapshots, now, velocity_days, limit))
    }

    /// Distinct category labels for interest registration, most recently
    /// collected first. Labels that are stopwords in the configured language
    /// are dropped.
    pub async fn categories(&self, limit: usize) -> Result<Vec<String>, TrendError> {
        filters::validate_limit(limit, CATEGORY_LIMIT_MAX)?;

        let labels = self
            .store
            .list_categories(limit)
            .await
            .map_err(TrendError::DataUnavailable)?;

        let mut categories = Vec::with_capacity(labels.len());
        for label in labels {
            let label = normalize_label(&label);
            if label.is_empty()
                || self
                    .stopwords
                    .contains(&label, &self.settings.stopword_lang)
                    .await
            {
                continue;
            }
            categories.push(label);
        }
        Ok(categories)
    }

    async fn fetch(
        &self,
        query: SnapshotQuery,
    ) -> Result<Vec<crate::db::models::MetricSnapshot>, TrendError> {
        self.store
            .query(&query)
            .await
            .map_err(TrendError::DataUnavailable)
    }
}
