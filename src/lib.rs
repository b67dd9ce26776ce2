pub mod config;
pub mod cron;
pub mod db;
pub mod stopwords;
pub mod trend;
pub mod utils;

pub use config::{CronSettings, Settings};
pub use cron::CronScheduler;
pub use db::PostgresClient;
pub use stopwords::{StopwordFilter, StopwordStore};
pub use trend::{MetricSnapshotStore, SnapshotQuery, TrendError, TrendQuery};
