use crate::error::Result;
use crate::models::{Coordinates, Forecast, GeocodedCity, WeatherObservation};
use async_trait::async_trait;

/// Everything the analytics layer needs from a weather backend.
///
/// Implementations return validated observations with metric units. A city
/// the backend does not know must surface as `AppError::UpstreamNotFound`.
#[async_trait]
pub trait WeatherProvider: Send + Sync {
    async fn current_by_city(&self, city: &str) -> Result<WeatherObservation>;

    async fn current_by_coords(&self, coordinates: &Coordinates) -> Result<WeatherObservation>;

    /// 5-day forecast in 3-hour buckets, chronological
    async fn forecast_by_city(&self, city: &str) -> Result<Forecast>;

    /// Resolve a free-text name to the provider's best match
    async fn geocode(&self, city: &str) -> Result<GeocodedCity>;

    /// Up to `count` populated places around a point, with current weather
    async fn find_nearby(
        &self,
        center: &Coordinates,
        count: u32,
    ) -> Result<Vec<WeatherObservation>>;
}
