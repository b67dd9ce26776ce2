use thiserror::Error;

/// Caller-facing failures for trend queries.
///
/// An empty result is never one of these: every query returns an empty list
/// when nothing matches, and translating emptiness into "not found" belongs
/// to the boundary layer.
#[derive(Debug, Error)]
pub enum TrendError {
    /// The snapshot store could not be reached or failed mid-query.
    /// Fatal for the call; the core does not retry.
    #[error("snapshot store unavailable: {0:#}")]
    DataUnavailable(#[source] anyhow::Error),

    #[error("limit {given} outside allowed range {min}..={max}")]
    LimitOutOfRange {
        given: usize,
        min: usize,
        max: usize,
    },

    #[error("window of {given} days outside allowed range {min}..={max}")]
    WindowOutOfRange { given: u32, min: u32, max: u32 },

    /// The comparison window reaches past the lookback window. Rejected
    /// rather than clamped: a clamped baseline reports misleading surge
    /// numbers.
    #[error(
        "velocity window of {velocity_days} days exceeds lookback window of {days} days"
    )]
    InvalidWindow { days: u32, velocity_days: u32 },

    #[error("category filter is blank")]
    EmptyCategory,
}
