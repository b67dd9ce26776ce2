//! Job to prune metric snapshots past the retention window.
//!
//! The snapshot table only needs to cover the longest supported lookback
//! window (90 days for recommendations); older rows just slow down every
//! windowed scan.

use anyhow::Result;
use chrono::{Duration, Utc};
use log::info;

use crate::db::PostgresClient;

/// Deletes snapshots collected more than `retention_days` ago.
pub async fn run(db: &PostgresClient, retention_days: u32) -> Result<()> {
    info!("Starting prune_snapshots job...");

    let start = std::time::Instant::now();
    let cutoff = Utc::now() - Duration::days(i64::from(retention_days));

    let deleted = db.prune_snapshots(cutoff).await?;

    if deleted == 0 {
        info!("No snapshots past retention ({} days)", retention_days);
    } else {
        info!(
            "Completed prune_snapshots job in {:?} ({} rows older than {} days)",
            start.elapsed(),
            deleted,
            retention_days
        );
    }
    Ok(())
}
