pub mod memory;
pub mod provider;
pub mod redis;

pub use self::memory::MemoryCacheService;
pub use self::provider::CachedWeatherProvider;
pub use self::redis::RedisCacheService;

use async_trait::async_trait;
use serde::{de::DeserializeOwned, Deserialize, Serialize};

/// Storage for serialized weather responses. Implementations swallow their own
/// failures: a broken cache behaves like an empty one.
#[async_trait]
pub trait WeatherCache: Send + Sync {
    async fn get_raw(&self, key: &str) -> Option<String>;
    async fn put_raw(&self, key: &str, value: String);
    async fn get_stats(&self) -> CacheStats;
    async fn health_check(&self) -> bool;
    fn backend_name(&self) -> &'static str;
}

/// Typed view over the raw string cache.
pub async fn get_json<T: DeserializeOwned>(cache: &dyn WeatherCache, key: &str) -> Option<T> {
    let json = cache.get_raw(key).await?;
    match serde_json::from_str(&json) {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::warn!("Failed to deserialize cached entry {}: {}", key, e);
            None
        }
    }
}

pub async fn put_json<T: Serialize + Sync>(cache: &dyn WeatherCache, key: &str, value: &T) {
    match serde_json::to_string(value) {
        Ok(json) => cache.put_raw(key, json).await,
        Err(e) => tracing::warn!("Failed to serialize entry for cache {}: {}", key, e),
    }
}

/// Cache statistics for monitoring
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub hit_rate: f64,
    pub connected: bool,
}

impl CacheStats {
    pub fn from_counts(hits: u64, misses: u64, connected: bool) -> Self {
        let hit_rate = if hits + misses > 0 {
            (hits as f64 / (hits + misses) as f64) * 100.0
        } else {
            0.0
        };

        CacheStats {
            hits,
            misses,
            hit_rate,
            connected,
        }
    }
}
