mod config;

pub use config::{CronSettings, PostgresSettings, Settings, TrendSettings};
