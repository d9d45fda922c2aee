use crate::cache::{CacheStats, WeatherCache};
use crate::error::{AppError, Result};
use async_trait::async_trait;
use redis::aio::ConnectionManager;
use redis::AsyncCommands;

/// Redis-backed weather cache. `ConnectionManager` clones share one
/// multiplexed connection.
pub struct RedisCacheService {
    connection: ConnectionManager,
    ttl_seconds: u64,
}

impl RedisCacheService {
    pub async fn new(redis_url: &str, ttl_seconds: u64) -> Result<Self> {
        let client = redis::Client::open(redis_url)
            .map_err(|e| AppError::Cache(format!("Failed to create Redis client: {}", e)))?;

        let connection = ConnectionManager::new(client)
            .await
            .map_err(|e| AppError::Cache(format!("Failed to connect to Redis: {}", e)))?;

        Ok(RedisCacheService {
            connection,
            ttl_seconds,
        })
    }
}

#[async_trait]
impl WeatherCache for RedisCacheService {
    async fn get_raw(&self, key: &str) -> Option<String> {
        let mut conn = self.connection.clone();
        let result: redis::RedisResult<Option<String>> = conn.get(key).await;

        match result {
            Ok(Some(json)) => {
                tracing::debug!("Redis cache hit: {}", key);
                Some(json)
            }
            Ok(None) => {
                tracing::debug!("Redis cache miss: {}", key);
                None
            }
            Err(e) => {
                tracing::warn!("Redis error reading {}: {}", key, e);
                None
            }
        }
    }

    async fn put_raw(&self, key: &str, value: String) {
        let mut conn = self.connection.clone();
        let result: redis::RedisResult<()> = conn.set_ex(key, value, self.ttl_seconds).await;

        match result {
            Ok(()) => tracing::debug!("Redis cached with TTL {}s: {}", self.ttl_seconds, key),
            Err(e) => tracing::warn!("Failed to cache {}: {}", key, e),
        }
    }

    async fn get_stats(&self) -> CacheStats {
        let mut conn = self.connection.clone();
        let info: redis::RedisResult<String> =
            redis::cmd("INFO").arg("stats").query_async(&mut conn).await;

        match info {
            Ok(info_str) => CacheStats::from_counts(
                parse_info_value(&info_str, "keyspace_hits"),
                parse_info_value(&info_str, "keyspace_misses"),
                true,
            ),
            Err(_) => CacheStats::from_counts(0, 0, false),
        }
    }

    async fn health_check(&self) -> bool {
        let mut conn = self.connection.clone();
        let result: redis::RedisResult<String> = redis::cmd("PING").query_async(&mut conn).await;
        result.is_ok()
    }

    fn backend_name(&self) -> &'static str {
        "redis"
    }
}

fn parse_info_value(info: &str, key: &str) -> u64 {
    info.lines()
        .find(|line| line.starts_with(key))
        .and_then(|line| line.split(':').nth(1))
        .and_then(|val| val.trim().parse().ok())
        .unwrap_or(0)
}
