//! Range bounds and validation for caller-supplied query filters.
//!
//! Bounds match the public query contract: rankings are capped at 100 rows,
//! the recommendation lookback at 90 days, the surge lookback at 30 days and
//! the velocity comparison at 7 days. Violations are reported, never
//! silently clamped.

use super::error::TrendError;

pub const LIMIT_MIN: usize = 1;
pub const LIMIT_MAX: usize = 100;

/// The category listing is a small catalog, not a ranking, so it allows a
/// larger page.
pub const CATEGORY_LIMIT_MAX: usize = 500;

pub const RECOMMEND_DAYS_MAX: u32 = 90;
pub const SURGE_DAYS_MAX: u32 = 30;
pub const VELOCITY_DAYS_MAX: u32 = 7;

pub fn validate_limit(given: usize, max: usize) -> Result<(), TrendError> {
    if given < LIMIT_MIN || given > max {
        return Err(TrendError::LimitOutOfRange {
            given,
            min: LIMIT_MIN,
            max,
        });
    }
    Ok(())
}

pub fn validate_window(given: u32, max: u32) -> Result<(), TrendError> {
    if given < 1 || given > max {
        return Err(TrendError::WindowOutOfRange { given, min: 1, max });
    }
    Ok(())
}

/// Velocity window must fit its own range and inside the lookback window.
pub fn validate_velocity(days: u32, velocity_days: u32) -> Result<(), TrendError> {
    validate_window(velocity_days, VELOCITY_DAYS_MAX)?;
    if velocity_days > days {
        return Err(TrendError::InvalidWindow {
            days,
            velocity_days,
        });
    }
    Ok(())
}
