pub mod category_trend;
pub mod metric_snapshot;
pub mod recommendation;
pub mod surge;

pub use category_trend::CategoryTrendEntry;
pub use metric_snapshot::MetricSnapshot;
pub use recommendation::ContentRecommendation;
pub use surge::SurgeEntry;
