//! Stopword lookup with a per-language read-through cache.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use log::warn;
use moka::future::Cache;
use rustc_hash::FxHashSet;

/// Port over the persisted stopword table.
#[async_trait]
pub trait StopwordStore: Send + Sync {
    /// All enabled stopwords for a language. Unknown languages yield an
    /// empty set.
    async fn get_stopwords(&self, lang: &str) -> anyhow::Result<FxHashSet<String>>;
}

/// Set-membership filter used when normalizing category and keyword labels.
///
/// Each language's word set is fetched once and cached for the configured
/// TTL. A store failure degrades to "not a stopword" (logged) so label
/// queries never fail on this path.
#[derive(Clone)]
pub struct StopwordFilter {
    store: Arc<dyn StopwordStore>,
    cache: Cache<String, Arc<FxHashSet<String>>>,
}

impl StopwordFilter {
    pub fn new(store: Arc<dyn StopwordStore>, ttl: Duration) -> Self {
        Self {
            store,
            cache: Cache::builder().max_capacity(16).time_to_live(ttl).build(),
        }
    }

    pub async fn contains(&self, word: &str, lang: &str) -> bool {
        self.words(lang).await.contains(word)
    }

    async fn words(&self, lang: &str) -> Arc<FxHashSet<String>> {
        let store = self.store.clone();
        let lang = lang.to_string();
        self.cache
            .get_with(lang.clone(), async move {
                match store.get_stopwords(&lang).await {
                    Ok(words) => Arc::new(words),
                    Err(e) => {
                        warn!("Failed to load stopwords for lang '{}': {:#}", lang, e);
                        Arc::new(FxHashSet::default())
                    },
                }
            })
            .await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    struct CountingStore {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl StopwordStore for CountingStore {
        async fn get_stopwords(&self, lang: &str) -> anyhow::Result<FxHashSet<String>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let mut words = FxHashSet::default();
            if lang == "ko" {
                words.insert("기타".to_string());
                words.insert("etc".to_string());
            }
            Ok(words)
        }
    }

    struct BrokenStore;

    #[async_trait]
    impl StopwordStore for BrokenStore {
        async fn get_stopwords(&self, _lang: &str) -> anyhow::Result<FxHashSet<String>> {
            Err(anyhow::anyhow!("stopword table unreachable"))
        }
    }

    #[tokio::test]
    async fn membership_and_unknown_language() {
        let filter = StopwordFilter::new(
            Arc::new(CountingStore {
                calls: AtomicUsize::new(0),
            }),
            Duration::from_secs(60),
        );

        assert!(filter.contains("etc", "ko").await);
        assert!(!filter.contains("gaming", "ko").await);
        // Unknown language behaves as an empty set.
        assert!(!filter.contains("etc", "xx").await);
    }

    #[tokio::test]
    async fn word_set_is_fetched_once_per_language() {
        let store = Arc::new(CountingStore {
            calls: AtomicUsize::new(0),
        });
        let filter = StopwordFilter::new(store.clone(), Duration::from_secs(60));

        for _ in 0..5 {
            filter.contains("etc", "ko").await;
        }

        assert_eq!(store.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn store_failure_degrades_to_not_a_stopword() {
        let filter = StopwordFilter::new(Arc::new(BrokenStore), Duration::from_secs(60));

        assert!(!filter.contains("etc", "ko").await);
    }
}
