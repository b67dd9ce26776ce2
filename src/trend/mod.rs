//! The trend/surge scoring core.
//!
//! Pure ranking components ([`aggregator`], [`ranker`], [`surge`]) compute
//! over an already-fetched snapshot window; [`TrendQuery`] composes them
//! against the [`MetricSnapshotStore`] port and caller-supplied filters.

pub mod aggregator;
pub mod ranker;
pub mod surge;

mod error;
mod filters;
mod query;
mod store;
mod window;

pub use error::TrendError;
pub use filters::{
    CATEGORY_LIMIT_MAX, LIMIT_MAX, LIMIT_MIN, RECOMMEND_DAYS_MAX, SURGE_DAYS_MAX,
    VELOCITY_DAYS_MAX,
};
pub use query::TrendQuery;
pub use store::{MetricSnapshotStore, SnapshotQuery};
