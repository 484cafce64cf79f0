//! In-memory ranking cache.
//!
//! Keyed by index period (`None` = current index). Entries expire after the
//! configured TTL; the map is bounded and evicts the oldest entry when full.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tiobe_common::{IndexPeriod, Language};
use tiobe_config::CacheConfig;
use tokio::sync::RwLock;
use tokio::time::Instant;
use tracing::debug;

pub type CacheKey = Option<IndexPeriod>;

struct CacheEntry {
    languages: Arc<Vec<Language>>,
    stored_at: Instant,
}

pub struct IndexCache {
    ttl: Duration,
    max_entries: usize,
    entries: RwLock<HashMap<CacheKey, CacheEntry>>,
}

impl IndexCache {
    pub fn new(ttl: Duration, max_entries: usize) -> Self {
        Self {
            ttl,
            max_entries,
            entries: RwLock::new(HashMap::new()),
        }
    }

    pub fn from_config(config: &CacheConfig) -> Self {
        Self::new(config.ttl(), config.max_entries)
    }

    pub fn is_enabled(&self) -> bool {
        !self.ttl.is_zero() && self.max_entries > 0
    }

    /// Fresh entry for `key`, if any.
    pub async fn get(&self, key: &CacheKey) -> Option<Arc<Vec<Language>>> {
        if !self.is_enabled() {
            return None;
        }
        let entries = self.entries.read().await;
        entries
            .get(key)
            .filter(|e| e.stored_at.elapsed() < self.ttl)
            .map(|e| Arc::clone(&e.languages))
    }

    pub async fn insert(&self, key: CacheKey, languages: Arc<Vec<Language>>) {
        if !self.is_enabled() {
            return;
        }
        let mut entries = self.entries.write().await;

        let ttl = self.ttl;
        entries.retain(|_, e| e.stored_at.elapsed() < ttl);

        if !entries.contains_key(&key) && entries.len() >= self.max_entries {
            if let Some(oldest) = entries
                .iter()
                .min_by_key(|(_, e)| e.stored_at)
                .map(|(k, _)| *k)
            {
                debug!(?oldest, "Evicting oldest cache entry");
                entries.remove(&oldest);
            }
        }

        entries.insert(key, CacheEntry { languages, stored_at: Instant::now() });
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    pub async fn clear(&self) {
        self.entries.write().await.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fallback::fallback_rankings;

    fn period(year: i32, month: u32) -> CacheKey {
        Some(IndexPeriod { year, month })
    }

    fn data() -> Arc<Vec<Language>> {
        Arc::new(fallback_rankings())
    }

    #[tokio::test(start_paused = true)]
    async fn test_hit_within_ttl_then_expires() {
        let cache = IndexCache::new(Duration::from_secs(60), 4);
        cache.insert(None, data()).await;
        assert!(cache.get(&None).await.is_some());

        tokio::time::advance(Duration::from_secs(59)).await;
        assert!(cache.get(&None).await.is_some());

        tokio::time::advance(Duration::from_secs(2)).await;
        assert!(cache.get(&None).await.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_evicts_oldest_when_full() {
        let cache = IndexCache::new(Duration::from_secs(600), 2);
        cache.insert(period(2020, 1), data()).await;
        tokio::time::advance(Duration::from_secs(1)).await;
        cache.insert(period(2021, 1), data()).await;
        tokio::time::advance(Duration::from_secs(1)).await;
        cache.insert(period(2022, 1), data()).await;

        assert_eq!(cache.len().await, 2);
        assert!(cache.get(&period(2020, 1)).await.is_none());
        assert!(cache.get(&period(2021, 1)).await.is_some());
        assert!(cache.get(&period(2022, 1)).await.is_some());
    }

    #[tokio::test]
    async fn test_reinsert_same_key_does_not_evict() {
        let cache = IndexCache::new(Duration::from_secs(600), 2);
        cache.insert(None, data()).await;
        cache.insert(period(2020, 1), data()).await;
        cache.insert(None, data()).await;
        assert_eq!(cache.len().await, 2);
        assert!(cache.get(&period(2020, 1)).await.is_some());
    }

    #[tokio::test]
    async fn test_zero_ttl_disables_cache() {
        let cache = IndexCache::new(Duration::ZERO, 8);
        cache.insert(None, data()).await;
        assert!(cache.is_empty().await);
        assert!(cache.get(&None).await.is_none());
    }

    #[tokio::test]
    async fn test_clear() {
        let cache = IndexCache::new(Duration::from_secs(60), 8);
        cache.insert(None, data()).await;
        cache.clear().await;
        assert!(cache.is_empty().await);
    }
}
