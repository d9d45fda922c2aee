use crate::cache::{CacheStats, WeatherCache};
use async_trait::async_trait;
use moka::future::Cache;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

/// In-memory weather cache backed by moka with TTL and bounded capacity.
pub struct MemoryCacheService {
    entries: Cache<String, String>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl MemoryCacheService {
    pub fn new(ttl_seconds: u64, max_capacity: u64) -> Self {
        let entries = Cache::builder()
            .time_to_live(Duration::from_secs(ttl_seconds))
            .max_capacity(max_capacity)
            .build();

        MemoryCacheService {
            entries,
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }
}

#[async_trait]
impl WeatherCache for MemoryCacheService {
    async fn get_raw(&self, key: &str) -> Option<String> {
        match self.entries.get(key).await {
            Some(json) => {
                self.hits.fetch_add(1, Ordering::Relaxed);
                tracing::debug!("Memory cache hit: {}", key);
                Some(json)
            }
            None => {
                self.misses.fetch_add(1, Ordering::Relaxed);
                tracing::debug!("Memory cache miss: {}", key);
                None
            }
        }
    }

    async fn put_raw(&self, key: &str, value: String) {
        self.entries.insert(key.to_string(), value).await;
        tracing::debug!("Memory cached: {}", key);
    }

    async fn get_stats(&self) -> CacheStats {
        CacheStats::from_counts(
            self.hits.load(Ordering::Relaxed),
            self.misses.load(Ordering::Relaxed),
            true,
        )
    }

    async fn health_check(&self) -> bool {
        true
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}
