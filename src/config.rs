use crate::constants::*;
use std::env;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub openweather_api_key: String,
    pub openweather_base_url: String,
    pub redis_url: Option<String>, // Falls back to the in-memory cache when absent
    pub weather_cache_ttl: u64,
    pub weather_cache_max_entries: u64,
    pub upstream_timeout_secs: u64,
    pub analytics: AnalyticsConfig,
}

#[derive(Debug, Clone)]
pub struct AnalyticsConfig {
    /// Cities farther than this from the query city are never reported as nearby
    pub nearby_max_distance_km: f64,

    /// Candidate count requested from the provider's "find" endpoint
    pub nearby_search_count: u32,

    /// Maximum number of nearby cities returned
    pub nearby_result_limit: usize,

    /// Number of catalog matches enriched with live weather
    pub recommendation_limit: usize,

    /// Minimum number of cities accepted by the compare endpoint
    pub compare_min_cities: usize,

    /// Maximum number of cities accepted by the compare endpoint
    pub compare_max_cities: usize,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            nearby_max_distance_km: DEFAULT_NEARBY_MAX_DISTANCE_KM,
            nearby_search_count: DEFAULT_NEARBY_SEARCH_COUNT,
            nearby_result_limit: DEFAULT_NEARBY_RESULT_LIMIT,
            recommendation_limit: DEFAULT_RECOMMENDATION_LIMIT,
            compare_min_cities: DEFAULT_COMPARE_MIN_CITIES,
            compare_max_cities: DEFAULT_COMPARE_MAX_CITIES,
        }
    }
}

impl AnalyticsConfig {
    pub fn from_env() -> Result<Self, String> {
        let defaults = Self::default();

        let config = Self {
            nearby_max_distance_km: env::var("NEARBY_MAX_DISTANCE_KM")
                .unwrap_or_else(|_| defaults.nearby_max_distance_km.to_string())
                .parse()
                .map_err(|_| "Invalid NEARBY_MAX_DISTANCE_KM")?,

            nearby_search_count: env::var("NEARBY_SEARCH_COUNT")
                .unwrap_or_else(|_| defaults.nearby_search_count.to_string())
                .parse()
                .map_err(|_| "Invalid NEARBY_SEARCH_COUNT")?,

            nearby_result_limit: env::var("NEARBY_RESULT_LIMIT")
                .unwrap_or_else(|_| defaults.nearby_result_limit.to_string())
                .parse()
                .map_err(|_| "Invalid NEARBY_RESULT_LIMIT")?,

            recommendation_limit: env::var("RECOMMENDATION_LIMIT")
                .unwrap_or_else(|_| defaults.recommendation_limit.to_string())
                .parse()
                .map_err(|_| "Invalid RECOMMENDATION_LIMIT")?,

            compare_min_cities: env::var("COMPARE_MIN_CITIES")
                .unwrap_or_else(|_| defaults.compare_min_cities.to_string())
                .parse()
                .map_err(|_| "Invalid COMPARE_MIN_CITIES")?,

            compare_max_cities: env::var("COMPARE_MAX_CITIES")
                .unwrap_or_else(|_| defaults.compare_max_cities.to_string())
                .parse()
                .map_err(|_| "Invalid COMPARE_MAX_CITIES")?,
        };

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), String> {
        if !self.nearby_max_distance_km.is_finite() || self.nearby_max_distance_km <= 0.0 {
            return Err("NEARBY_MAX_DISTANCE_KM must be a positive number".to_string());
        }
        if self.nearby_search_count == 0 || self.nearby_search_count > 50 {
            // OpenWeatherMap caps `cnt` on the find endpoint at 50
            return Err("NEARBY_SEARCH_COUNT must be between 1 and 50".to_string());
        }
        if self.nearby_result_limit == 0 {
            return Err("NEARBY_RESULT_LIMIT must be at least 1".to_string());
        }
        if self.recommendation_limit == 0 {
            return Err("RECOMMENDATION_LIMIT must be at least 1".to_string());
        }
        if self.compare_min_cities < 1 || self.compare_min_cities > self.compare_max_cities {
            return Err(
                "COMPARE_MIN_CITIES must be at least 1 and not exceed COMPARE_MAX_CITIES"
                    .to_string(),
            );
        }
        Ok(())
    }
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        dotenv::dotenv().ok();

        let upstream_timeout_secs: u64 = env::var("UPSTREAM_TIMEOUT_SECS")
            .unwrap_or_else(|_| DEFAULT_UPSTREAM_TIMEOUT_SECONDS.to_string())
            .parse()
            .map_err(|_| "Invalid UPSTREAM_TIMEOUT_SECS")?;

        if upstream_timeout_secs == 0 || upstream_timeout_secs > 120 {
            return Err("UPSTREAM_TIMEOUT_SECS must be between 1 and 120 seconds".to_string());
        }

        Ok(Config {
            host: env::var("HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| DEFAULT_PORT.to_string())
                .parse()
                .map_err(|_| "Invalid PORT")?,
            openweather_api_key: env::var("OPENWEATHER_API_KEY")
                .map_err(|_| "OPENWEATHER_API_KEY must be set")?,
            openweather_base_url: env::var("OPENWEATHER_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_OPENWEATHER_BASE_URL.to_string()),
            redis_url: env::var("REDIS_URL").ok(),
            weather_cache_ttl: env::var("WEATHER_CACHE_TTL")
                .unwrap_or_else(|_| DEFAULT_WEATHER_CACHE_TTL_SECONDS.to_string())
                .parse()
                .map_err(|_| "Invalid WEATHER_CACHE_TTL")?,
            weather_cache_max_entries: env::var("WEATHER_CACHE_MAX_ENTRIES")
                .unwrap_or_else(|_| DEFAULT_MEMORY_CACHE_MAX_ENTRIES.to_string())
                .parse()
                .map_err(|_| "Invalid WEATHER_CACHE_MAX_ENTRIES")?,
            upstream_timeout_secs,
            analytics: AnalyticsConfig::from_env()?,
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn upstream_timeout(&self) -> Duration {
        Duration::from_secs(self.upstream_timeout_secs)
    }
}
