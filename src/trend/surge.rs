//! Short-term surge detection: windowed view deltas and growth rates.

use std::cmp::Ordering;

use chrono::{DateTime, Duration, Utc};
use rustc_hash::FxHashMap;

use super::window::ContentKey;
use crate::db::models::{MetricSnapshot, SurgeEntry};

/// Floor for the growth-rate denominator. A baseline of zero views would
/// otherwise divide by zero; with the floor a from-zero appearance scores
/// its raw delta, which is large but finite.
const BASELINE_FLOOR: f64 = 1.0;

/// Reference snapshots for one content inside the lookback window.
struct VelocityWindow<'a> {
    latest: &'a MetricSnapshot,
    baseline: Option<&'a MetricSnapshot>,
}

/// Rank contents by view growth over the trailing `velocity_days`.
///
/// For each content in the window, `latest` is its most recent snapshot at
/// or before `now` and `baseline` the snapshot closest to (but not after)
/// `now - velocity_days`. Contents without a baseline are excluded as
/// insufficient history instead of defaulting to zero, which would
/// manufacture false spikes for newly-seen content. Non-positive deltas are
/// dropped before ranking: a surge list never reports decline.
///
/// The surge score is currently the raw growth rate. Sorted descending by
/// score, ties broken by delta descending, then content id ascending.
pub fn detect(
    snapshots: &[MetricSnapshot],
    now: DateTime<Utc>,
    velocity_days: u32,
    limit: usize,
) -> Vec<SurgeEntry> {
    let baseline_instant = now - Duration::days(i64::from(velocity_days));

    let mut windows: FxHashMap<ContentKey<'_>, VelocityWindow<'_>> = FxHashMap::default();
    for snap in snapshots {
        if snap.collected_at > now {
            continue;
        }
        let window = windows
            .entry((snap.platform.as_str(), snap.content_id.as_str()))
            .or_insert(VelocityWindow {
                latest: snap,
                baseline: None,
            });
        if snap.collected_at > window.latest.collected_at {
            window.latest = snap;
        }
        if snap.collected_at <= baseline_instant {
            match window.baseline {
                Some(baseline) if baseline.collected_at >= snap.collected_at => {},
                _ => window.baseline = Some(snap),
            }
        }
    }

    let mut entries: Vec<SurgeEntry> = windows
        .into_values()
        .filter_map(|window| {
            let baseline = window.baseline?;
            let delta = window.latest.view_count - baseline.view_count;
            if delta <= 0 {
                return None;
            }
            let growth = delta as f64 / (baseline.view_count as f64).max(BASELINE_FLOOR);
            Some(SurgeEntry {
                content_id: window.latest.content_id.clone(),
                latest_views: window.latest.view_count,
                baseline_views: baseline.view_count,
                delta_views_window: delta,
                growth_rate_window: growth,
                surge_score: growth,
                rank: 0,
            })
        })
        .collect();

    entries.sort_by(|a, b| {
        b.surge_score
            .partial_cmp(&a.surge_score)
            .unwrap_or(Ordering::Equal)
            .then_with(|| b.delta_views_window.cmp(&a.delta_views_window))
            .then_with(|| a.content_id.cmp(&b.content_id))
    });
    entries.truncate(limit);
    for (i, entry) in entries.iter_mut().enumerate() {
        entry.rank = i as u32 + 1;
    }

    entries
}
