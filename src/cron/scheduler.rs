//! Cron scheduler for periodic maintenance tasks.
//!
//! Runs jobs like:
//! - Pruning metric snapshots past the retention window

use std::sync::Arc;

use anyhow::Result;
use log::{error, info};
use tokio_cron_scheduler::{Job, JobScheduler};
use tokio_util::sync::CancellationToken;

use crate::config::CronSettings;
use crate::db::PostgresClient;

use super::jobs;

/// Cron scheduler that manages periodic background jobs.
pub struct CronScheduler {
    db: Arc<PostgresClient>,
    settings: Arc<CronSettings>,
}

impl CronScheduler {
    pub fn new(db: Arc<PostgresClient>, settings: CronSettings) -> Self {
        Self {
            db,
            settings: Arc::new(settings),
        }
    }

    /// Starts the cron scheduler and runs until cancellation.
    pub async fn run(&self, cancellation_token: CancellationToken) -> Result<()> {
        let mut scheduler = JobScheduler::new().await?;

        self.register_prune_snapshots_job(&scheduler).await?;

        scheduler.start().await?;
        info!("Cron scheduler started with {} jobs", 1);

        cancellation_token.cancelled().await;
        info!("Cron scheduler shutting down...");

        scheduler.shutdown().await?;
        Ok(())
    }

    async fn register_prune_snapshots_job(&self, scheduler: &JobScheduler) -> Result<()> {
        let db = self.db.clone();
        let retention_days = self.settings.retention_days;
        let interval = self.settings.prune_interval_secs;

        let job = Job::new_repeated_async(
            std::time::Duration::from_secs(interval),
            move |_uuid, _lock| {
                let db = db.clone();
                Box::pin(async move {
                    if let Err(e) = jobs::prune_snapshots::run(&db, retention_days).await {
                        error!("Failed to prune snapshots: {:#}", e);
                    }
                })
            },
        )?;

        scheduler.add(job).await?;
        Ok(())
    }
}
