use axum::Router;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use travelcast::cache::{
    CachedWeatherProvider, MemoryCacheService, RedisCacheService, WeatherCache,
};
use travelcast::config::Config;
use travelcast::services::{OpenWeatherClient, SystemClock, WeatherProvider};
use travelcast::AppState;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "travelcast=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env().map_err(|e| format!("Failed to load configuration: {}", e))?;

    tracing::info!("Starting Travelcast API server");
    tracing::info!("Configuration loaded successfully");

    // Initialize cache: try Redis, fall back to in-memory
    let memory_cache = || -> Arc<dyn WeatherCache> {
        Arc::new(MemoryCacheService::new(
            config.weather_cache_ttl,
            config.weather_cache_max_entries,
        ))
    };
    let cache: Arc<dyn WeatherCache> = if let Some(ref redis_url) = config.redis_url {
        tracing::info!("Connecting to Redis cache...");
        match RedisCacheService::new(redis_url, config.weather_cache_ttl).await {
            Ok(redis_cache) => {
                tracing::info!("Redis cache connection established");
                Arc::new(redis_cache)
            }
            Err(e) => {
                tracing::warn!(
                    "Failed to connect to Redis: {}. Falling back to in-memory cache.",
                    e
                );
                memory_cache()
            }
        }
    } else {
        tracing::info!("Redis URL not configured. Using in-memory cache.");
        memory_cache()
    };

    // Weather provider, read through the cache
    let openweather = OpenWeatherClient::new(
        config.openweather_api_key.clone(),
        config.openweather_base_url.clone(),
        config.upstream_timeout(),
    )?;
    let weather: Arc<dyn WeatherProvider> = Arc::new(CachedWeatherProvider::new(
        Arc::new(openweather),
        cache.clone(),
    ));

    // Create application state
    let state = Arc::new(AppState {
        weather,
        cache: Some(cache),
        clock: Arc::new(SystemClock),
        analytics: config.analytics.clone(),
    });

    // Build router with CORS and tracing
    let app = Router::new()
        .nest("/api", travelcast::routes::create_router(state))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http());

    // Start server
    let addr = config.server_address();
    tracing::info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
