//! Utility functions for the crest service.
//!
//! - [`text`] - filter and label normalization helpers

mod text;

pub use text::{normalize_label, normalize_platform};
