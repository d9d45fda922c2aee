use crate::cache::{get_json, put_json, WeatherCache};
use crate::constants::CACHE_COORDINATE_PRECISION;
use crate::error::Result;
use crate::models::{Coordinates, Forecast, GeocodedCity, WeatherObservation};
use crate::services::weather_provider::WeatherProvider;
use async_trait::async_trait;
use serde::{de::DeserializeOwned, Serialize};
use std::future::Future;
use std::sync::Arc;

/// Read-through cache in front of any provider. Only successful responses
/// are stored.
pub struct CachedWeatherProvider {
    inner: Arc<dyn WeatherProvider>,
    cache: Arc<dyn WeatherCache>,
}

impl CachedWeatherProvider {
    pub fn new(inner: Arc<dyn WeatherProvider>, cache: Arc<dyn WeatherCache>) -> Self {
        CachedWeatherProvider { inner, cache }
    }

    pub fn city_key(kind: &str, city: &str) -> String {
        format!("weather:{}:city:{}", kind, city.trim().to_lowercase())
    }

    /// Coordinates are rounded so nearby points (~100m) share an entry
    pub fn coords_key(kind: &str, coordinates: &Coordinates) -> String {
        let rounded = coordinates.snapped(CACHE_COORDINATE_PRECISION);
        format!("weather:{}:coords:{:.3},{:.3}", kind, rounded.lat, rounded.lng)
    }

    async fn cached<T, F>(&self, key: String, fetch: F) -> Result<T>
    where
        T: Serialize + DeserializeOwned + Sync,
        F: Future<Output = Result<T>>,
    {
        if let Some(hit) = get_json::<T>(self.cache.as_ref(), &key).await {
            return Ok(hit);
        }

        let value = fetch.await?;
        put_json(self.cache.as_ref(), &key, &value).await;
        Ok(value)
    }
}

#[async_trait]
impl WeatherProvider for CachedWeatherProvider {
    async fn current_by_city(&self, city: &str) -> Result<WeatherObservation> {
        self.cached(
            Self::city_key("current", city),
            self.inner.current_by_city(city),
        )
        .await
    }

    async fn current_by_coords(&self, coordinates: &Coordinates) -> Result<WeatherObservation> {
        self.cached(
            Self::coords_key("current", coordinates),
            self.inner.current_by_coords(coordinates),
        )
        .await
    }

    async fn forecast_by_city(&self, city: &str) -> Result<Forecast> {
        self.cached(
            Self::city_key("forecast", city),
            self.inner.forecast_by_city(city),
        )
        .await
    }

    async fn geocode(&self, city: &str) -> Result<GeocodedCity> {
        self.cached(Self::city_key("geo", city), self.inner.geocode(city))
            .await
    }

    async fn find_nearby(
        &self,
        center: &Coordinates,
        count: u32,
    ) -> Result<Vec<WeatherObservation>> {
        let key = format!("{}:{}", Self::coords_key("find", center), count);
        self.cached(key, self.inner.find_nearby(center, count)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::MemoryCacheService;
    use crate::error::AppError;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Counts upstream calls; "Atlantis" is unknown
    #[derive(Default)]
    struct CountingProvider {
        calls: AtomicUsize,
    }

    impl CountingProvider {
        fn observation(city: &str) -> WeatherObservation {
            WeatherObservation {
                city: city.to_string(),
                country: Some("FR".to_string()),
                coordinates: Coordinates::new(48.8566, 2.3522).unwrap(),
                temperature: 21.0,
                feels_like: 21.0,
                humidity: 45.0,
                pressure: None,
                wind_speed: 2.0,
                cloudiness: 10.0,
                rain: None,
                description: "clear sky".to_string(),
                icon: None,
                observed_at: 0,
            }
        }

        fn lookup(&self, city: &str) -> Result<WeatherObservation> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if city == "Atlantis" {
                Err(AppError::UpstreamNotFound(city.to_string()))
            } else {
                Ok(Self::observation(city))
            }
        }
    }

    #[async_trait]
    impl WeatherProvider for CountingProvider {
        async fn current_by_city(&self, city: &str) -> Result<WeatherObservation> {
            self.lookup(city)
        }

        async fn current_by_coords(&self, _: &Coordinates) -> Result<WeatherObservation> {
            self.lookup("Paris")
        }

        async fn forecast_by_city(&self, city: &str) -> Result<Forecast> {
            self.lookup(city)?;
            Ok(Forecast {
                city: city.to_string(),
                country: None,
                entries: vec![],
            })
        }

        async fn geocode(&self, city: &str) -> Result<GeocodedCity> {
            let obs = self.lookup(city)?;
            Ok(GeocodedCity {
                name: obs.city,
                country: obs.country,
                coordinates: obs.coordinates,
            })
        }

        async fn find_nearby(&self, _: &Coordinates, _: u32) -> Result<Vec<WeatherObservation>> {
            Ok(vec![self.lookup("Versailles")?])
        }
    }

    fn setup() -> (Arc<CountingProvider>, CachedWeatherProvider) {
        let inner = Arc::new(CountingProvider::default());
        let cache = Arc::new(MemoryCacheService::new(600, 100));
        let provider = CachedWeatherProvider::new(inner.clone(), cache);
        (inner, provider)
    }

    #[tokio::test]
    async fn repeated_lookups_hit_cache() {
        let (inner, provider) = setup();

        provider.current_by_city("Paris").await.unwrap();
        provider.current_by_city("  paris ").await.unwrap();

        assert_eq!(inner.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn errors_are_not_cached() {
        let (inner, provider) = setup();

        assert!(provider.current_by_city("Atlantis").await.is_err());
        assert!(provider.current_by_city("Atlantis").await.is_err());

        assert_eq!(inner.calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn kinds_do_not_share_entries() {
        let (inner, provider) = setup();

        provider.current_by_city("Paris").await.unwrap();
        provider.forecast_by_city("Paris").await.unwrap();
        provider.geocode("Paris").await.unwrap();

        assert_eq!(inner.calls.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn coords_key_rounds_to_three_decimals() {
        let a = Coordinates::new(48.85661, 2.35222).unwrap();
        let b = Coordinates::new(48.85659, 2.35218).unwrap();
        assert_eq!(
            CachedWeatherProvider::coords_key("current", &a),
            CachedWeatherProvider::coords_key("current", &b)
        );
        assert_eq!(
            CachedWeatherProvider::coords_key("current", &a),
            "weather:current:coords:48.857,2.352"
        );
    }
}
