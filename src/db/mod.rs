//! Persistence layer.
//!
//! PostgreSQL holds the snapshot time series written by external collectors
//! and the stopword lookup table. The concrete [`PostgresClient`] adapts
//! both ports the core depends on.

pub mod models;
pub mod postgres;

pub use postgres::PostgresClient;
