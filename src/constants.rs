//! Stable application-wide constants.
//!
//! Values here are structural invariants, scoring coefficients, and default
//! fallbacks for env-var-based configuration. They should rarely change.
//! Knobs that are worth tuning per deployment live in
//! [`AnalyticsConfig`](crate::config::AnalyticsConfig) instead.

// --- Server defaults (used when HOST / PORT env vars are absent) ---

/// Default bind address for the HTTP server.
pub const DEFAULT_HOST: &str = "0.0.0.0";
/// Default port for the HTTP server.
pub const DEFAULT_PORT: &str = "3000";

// --- Upstream weather provider ---

/// OpenWeatherMap API root. Overridden by `OPENWEATHER_BASE_URL`.
pub const DEFAULT_OPENWEATHER_BASE_URL: &str = "https://api.openweathermap.org";
/// Outbound request timeout. Overridden by `UPSTREAM_TIMEOUT_SECS`.
pub const DEFAULT_UPSTREAM_TIMEOUT_SECONDS: u64 = 10;

// --- Cache defaults ---

/// Weather response cache TTL: 10 minutes. Overridden by `WEATHER_CACHE_TTL`.
pub const DEFAULT_WEATHER_CACHE_TTL_SECONDS: u64 = 600;
/// Maximum entries for the in-memory weather cache.
/// Overridden by `WEATHER_CACHE_MAX_ENTRIES`.
pub const DEFAULT_MEMORY_CACHE_MAX_ENTRIES: u64 = 10_000;
/// Decimal places kept when coordinates are used in cache keys (~100m).
pub const CACHE_COORDINATE_PRECISION: u32 = 3;

// --- Travel score ---

/// Preferred temperature range (°C) when the caller supplies none.
pub const DEFAULT_PREFERRED_TEMP_MIN: f64 = 18.0;
pub const DEFAULT_PREFERRED_TEMP_MAX: f64 = 28.0;

/// Sub-score weights. They sum to 1.0, which keeps the overall score in [0, 10].
pub const WEIGHT_TEMPERATURE: f64 = 0.35;
pub const WEIGHT_HUMIDITY: f64 = 0.20;
pub const WEIGHT_WIND: f64 = 0.15;
pub const WEIGHT_CLOUDINESS: f64 = 0.15;
pub const WEIGHT_PRECIPITATION: f64 = 0.15;

// --- Analytics defaults (used when env vars are absent) ---

/// Great-circle cutoff for nearby cities. Overridden by `NEARBY_MAX_DISTANCE_KM`.
pub const DEFAULT_NEARBY_MAX_DISTANCE_KM: f64 = 100.0;
/// Number of candidates requested from the provider's "find" endpoint.
pub const DEFAULT_NEARBY_SEARCH_COUNT: u32 = 30;
/// Nearby cities returned per request.
pub const DEFAULT_NEARBY_RESULT_LIMIT: usize = 5;
/// Catalog matches enriched with live weather per recommendation request.
pub const DEFAULT_RECOMMENDATION_LIMIT: usize = 8;
/// Bounds on the number of cities accepted by the compare endpoint.
pub const DEFAULT_COMPARE_MIN_CITIES: usize = 2;
pub const DEFAULT_COMPARE_MAX_CITIES: usize = 5;

// --- Packing ---

/// Trip length assumed by the full packing list when `duration` is absent.
pub const DEFAULT_TRIP_DURATION_DAYS: u32 = 7;
/// Trip length assumed by the carry-on list when `duration` is absent.
pub const DEFAULT_MINIMAL_TRIP_DURATION_DAYS: u32 = 3;
/// Longest trip accepted by the packing endpoints.
pub const MAX_TRIP_DURATION_DAYS: u32 = 365;

/// Message attached to destinations whose live weather could not be fetched.
pub const WEATHER_UNAVAILABLE_MESSAGE: &str = "Weather data unavailable";
