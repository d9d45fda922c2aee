// Library exports for testing and reusability

pub mod cache;
pub mod catalog;
pub mod config;
pub mod constants;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use error::{AppError, Result};

use cache::WeatherCache;
use config::AnalyticsConfig;
use services::{Clock, WeatherProvider};
use std::sync::Arc;

// App state shared across handlers
pub struct AppState {
    /// Weather source, usually the OpenWeatherMap client behind the response cache
    pub weather: Arc<dyn WeatherProvider>,
    /// Same cache the provider reads through; exposed for health reporting
    pub cache: Option<Arc<dyn WeatherCache>>,
    pub clock: Arc<dyn Clock>,
    pub analytics: AnalyticsConfig,
}
