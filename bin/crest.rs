use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use jemallocator::Jemalloc;
use log::{error, info, LevelFilter};
use simple_logger::SimpleLogger;
use tokio_util::sync::CancellationToken;

#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

use crest::{CronScheduler, PostgresClient, Settings, StopwordFilter, TrendQuery};

#[tokio::main()]
async fn main() -> anyhow::Result<()> {
    SimpleLogger::new()
        .with_level(LevelFilter::Info)
        .init()
        .unwrap();

    // Load configuration
    let settings =
        Settings::new().context("Failed to load config.yaml. Please ensure it exists and is valid")?;

    let db = Arc::new(
        PostgresClient::new(settings.postgres.clone())
            .await
            .context("Failed to initialize database connection")?,
    );
    db.migrate().await.context("Failed to apply database schema")?;

    // The query facade is what an HTTP adapter embeds; this binary wires it
    // up, probes it once, and keeps the maintenance jobs running.
    let stopwords = StopwordFilter::new(
        db.clone(),
        Duration::from_secs(settings.trend.stopword_ttl_secs),
    );
    let trends = TrendQuery::new(db.clone(), stopwords, settings.trend.clone());

    match trends.hot_categories(None, 5).await {
        Ok(entries) => info!(
            "Trend engine ready ({} hot categories in current window)",
            entries.len()
        ),
        Err(e) => error!("Trend engine startup probe failed: {:#}", e),
    }

    let cancellation_token = CancellationToken::new();

    let cron_scheduler = CronScheduler::new(db.clone(), settings.cron.clone());
    let cron_token = cancellation_token.child_token();
    let cron_handle = tokio::spawn(async move {
        if let Err(e) = cron_scheduler.run(cron_token).await {
            error!("Cron scheduler failed: {:#}", e);
        }
    });

    info!("Cron scheduler started - maintenance jobs will run periodically");

    #[cfg(unix)]
    let mut sigterm_stream = {
        use tokio::signal::unix::{signal, SignalKind};
        signal(SignalKind::terminate()).context("Failed to install SIGTERM handler")?
    };

    info!("Crest running. Press Ctrl+C to stop.");

    #[cfg(unix)]
    {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {
                info!("Received shutdown signal (Ctrl+C), exiting gracefully...");
            },
            _ = sigterm_stream.recv() => {
                info!("Received SIGTERM, exiting gracefully...");
            },
        };
    }

    #[cfg(not(unix))]
    {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {
                info!("Received shutdown signal (Ctrl+C), exiting gracefully...");
            },
        };
    }

    info!("Finishing all tasks...");
    cancellation_token.cancel();

    info!("Waiting for cron scheduler to stop...");
    let _ = cron_handle.await;

    info!("All tasks stopped");
    Ok(())
}
