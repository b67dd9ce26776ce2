//! Shared helpers for windowed snapshot passes.

use rustc_hash::FxHashMap;

use crate::db::models::MetricSnapshot;

/// Content key inside a snapshot window. Content ids are only unique per
/// platform, so the platform is always part of the key.
pub(crate) type ContentKey<'a> = (&'a str, &'a str);

/// Latest snapshot per distinct content.
///
/// Re-collections of the same content must not double-count, so every
/// ranking starts from exactly one snapshot per (platform, content_id).
/// On equal timestamps the first row wins, which is deterministic because
/// the store orders rows deterministically.
pub(crate) fn latest_per_content(
    snapshots: &[MetricSnapshot],
) -> FxHashMap<ContentKey<'_>, &MetricSnapshot> {
    let mut latest: FxHashMap<ContentKey<'_>, &MetricSnapshot> = FxHashMap::default();
    for snap in snapshots {
        let key = (snap.platform.as_str(), snap.content_id.as_str());
        match latest.get(&key) {
            Some(current) if current.collected_at >= snap.collected_at => {},
            _ => {
                latest.insert(key, snap);
            },
        }
    }
    latest
}
