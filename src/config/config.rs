use config::{Config, ConfigError, File};
use serde::Deserialize;

/// PostgreSQL database connection configuration.
///
/// The database holds:
/// - Metric snapshots collected from external platforms
/// - The stopword lookup table
#[derive(Debug, Deserialize, Clone)]
pub struct PostgresSettings {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub database: String,
    #[serde(default = "default_pool_size")]
    pub pool_size: usize,
}

fn default_pool_size() -> usize {
    16
}

/// Trend query tuning.
#[derive(Debug, Deserialize, Clone)]
pub struct TrendSettings {
    /// Lookback window for the hot-categories ranking, in days.
    #[serde(default = "default_hot_window_days")]
    pub hot_window_days: u32,
    /// Language of the stopword set applied to category labels.
    #[serde(default = "default_stopword_lang")]
    pub stopword_lang: String,
    /// How long a fetched stopword set stays cached.
    #[serde(default = "default_stopword_ttl_secs")]
    pub stopword_ttl_secs: u64,
}

impl Default for TrendSettings {
    fn default() -> Self {
        Self {
            hot_window_days: default_hot_window_days(),
            stopword_lang: default_stopword_lang(),
            stopword_ttl_secs: default_stopword_ttl_secs(),
        }
    }
}

fn default_hot_window_days() -> u32 {
    7
}

fn default_stopword_lang() -> String {
    "ko".to_string()
}

fn default_stopword_ttl_secs() -> u64 {
    600
}

/// Background maintenance configuration.
#[derive(Debug, Deserialize, Clone)]
pub struct CronSettings {
    /// Interval for pruning expired snapshots, in seconds.
    #[serde(default = "default_prune_interval_secs")]
    pub prune_interval_secs: u64,
    /// Snapshots older than this many days are deleted. The default keeps
    /// the 90-day recommendation window fully covered.
    #[serde(default = "default_retention_days")]
    pub retention_days: u32,
}

impl Default for CronSettings {
    fn default() -> Self {
        Self {
            prune_interval_secs: default_prune_interval_secs(),
            retention_days: default_retention_days(),
        }
    }
}

fn default_prune_interval_secs() -> u64 {
    3600
}

fn default_retention_days() -> u32 {
    120
}

/// Root application configuration.
///
/// Loaded from `config.yaml` at startup.
#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    pub postgres: PostgresSettings,
    #[serde(default)]
    pub trend: TrendSettings,
    #[serde(default)]
    pub cron: CronSettings,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let s = Config::builder()
            .add_source(File::with_name("config"))
            .build()?;

        let settings: Settings = s.try_deserialize()?;

        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // serde defaults behave the same through any format, so JSON stands in
    // for the YAML file here.
    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let raw = r#"{
            "postgres": {
                "host": "localhost",
                "port": 5432,
                "user": "crest",
                "password": "crest",
                "database": "crest"
            }
        }"#;

        let settings: Settings = serde_json::from_str(raw).unwrap();

        assert_eq!(settings.postgres.pool_size, 16);
        assert_eq!(settings.trend.hot_window_days, 7);
        assert_eq!(settings.trend.stopword_lang, "ko");
        assert_eq!(settings.cron.prune_interval_secs, 3600);
        assert_eq!(settings.cron.retention_days, 120);
    }

    #[test]
    fn cron_overrides_apply_per_field() {
        let raw = r#"{
            "postgres": {
                "host": "localhost",
                "port": 5432,
                "user": "crest",
                "password": "crest",
                "database": "crest"
            },
            "cron": { "retention_days": 200 }
        }"#;

        let settings: Settings = serde_json::from_str(raw).unwrap();

        assert_eq!(settings.cron.retention_days, 200);
        assert_eq!(settings.cron.prune_interval_secs, 3600);
    }
}
