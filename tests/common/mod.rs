use async_trait::async_trait;
use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use time::macros::datetime;
use time::OffsetDateTime;
use tower::ServiceExt;
use travelcast::cache::WeatherCache;
use travelcast::config::AnalyticsConfig;
use travelcast::models::{
    Coordinates, Forecast, ForecastEntry, GeocodedCity, Precipitation, WeatherObservation,
};
use travelcast::services::{FixedClock, WeatherProvider};
use travelcast::{AppError, AppState, Result};

/// Instant every test app runs at
#[allow(dead_code)]
pub const NOW: OffsetDateTime = datetime!(2026-10-16 12:00:00 UTC);

/// In-memory weather backend. Cities missing from the maps are unknown (404).
#[derive(Default)]
pub struct StubProvider {
    pub current: HashMap<String, WeatherObservation>,
    pub forecasts: HashMap<String, Forecast>,
    pub geocodes: HashMap<String, GeocodedCity>,
    /// `None` makes the nearby search fail
    pub nearby: Option<Vec<WeatherObservation>>,
    /// Template returned for coordinate lookups; `None` makes them fail
    pub by_coords: Option<WeatherObservation>,
    pub calls: AtomicUsize,
}

#[allow(dead_code)]
impl StubProvider {
    pub fn with_current(mut self, observation: WeatherObservation) -> Self {
        self.current
            .insert(observation.city.to_lowercase(), observation);
        self
    }

    pub fn with_forecast(mut self, forecast: Forecast) -> Self {
        self.forecasts.insert(forecast.city.to_lowercase(), forecast);
        self
    }

    pub fn with_geocode(mut self, name: &str, country: &str, lat: f64, lng: f64) -> Self {
        self.geocodes.insert(
            name.to_lowercase(),
            GeocodedCity {
                name: name.to_string(),
                country: Some(country.to_string()),
                coordinates: Coordinates::new(lat, lng).unwrap(),
            },
        );
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn record(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }
}

fn not_found(city: &str) -> AppError {
    AppError::UpstreamNotFound(city.to_string())
}

#[async_trait]
impl WeatherProvider for StubProvider {
    async fn current_by_city(&self, city: &str) -> Result<WeatherObservation> {
        self.record();
        self.current
            .get(&city.to_lowercase())
            .cloned()
            .ok_or_else(|| not_found(city))
    }

    async fn current_by_coords(&self, coordinates: &Coordinates) -> Result<WeatherObservation> {
        self.record();
        let mut observation = self
            .by_coords
            .clone()
            .ok_or_else(|| AppError::UpstreamUnavailable("HTTP 503".to_string()))?;
        observation.coordinates = *coordinates;
        Ok(observation)
    }

    async fn forecast_by_city(&self, city: &str) -> Result<Forecast> {
        self.record();
        self.forecasts
            .get(&city.to_lowercase())
            .cloned()
            .ok_or_else(|| not_found(city))
    }

    async fn geocode(&self, city: &str) -> Result<GeocodedCity> {
        self.record();
        self.geocodes
            .get(&city.to_lowercase())
            .cloned()
            .ok_or_else(|| not_found(city))
    }

    async fn find_nearby(&self, _: &Coordinates, _: u32) -> Result<Vec<WeatherObservation>> {
        self.record();
        self.nearby
            .clone()
            .ok_or_else(|| AppError::UpstreamUnavailable("HTTP 500".to_string()))
    }
}

/// Pleasant, dry reading that scores a perfect 10 with default preferences
#[allow(dead_code)]
pub fn observation(city: &str, country: &str, lat: f64, lng: f64) -> WeatherObservation {
    WeatherObservation {
        city: city.to_string(),
        country: Some(country.to_string()),
        coordinates: Coordinates::new(lat, lng).unwrap(),
        temperature: 22.0,
        feels_like: 21.5,
        humidity: 40.0,
        pressure: Some(1015.0),
        wind_speed: 3.0,
        cloudiness: 10.0,
        rain: None,
        description: "clear sky".to_string(),
        icon: Some("01d".to_string()),
        observed_at: NOW.unix_timestamp(),
    }
}

/// Cold, wet and windy
#[allow(dead_code)]
pub fn miserable(mut observation: WeatherObservation) -> WeatherObservation {
    observation.temperature = -5.0;
    observation.feels_like = -10.0;
    observation.humidity = 90.0;
    observation.wind_speed = 20.0;
    observation.cloudiness = 95.0;
    observation.rain = Some(Precipitation {
        one_hour: Some(5.0),
        three_hour: None,
    });
    observation.description = "heavy rain".to_string();
    observation
}

#[allow(dead_code)]
pub fn forecast_entry(base: &WeatherObservation, timestamp: &str, temp: f64) -> ForecastEntry {
    let mut observation = base.clone();
    observation.temperature = temp;
    observation.feels_like = temp;
    observation.description = format!("forecast {}", timestamp);
    ForecastEntry {
        timestamp: timestamp.to_string(),
        observation,
    }
}

/// Build a router over the stub with a frozen clock and default limits
#[allow(dead_code)]
pub fn test_app(provider: StubProvider) -> Router {
    test_app_with(Arc::new(provider), None)
}

#[allow(dead_code)]
pub fn test_app_with(
    provider: Arc<dyn WeatherProvider>,
    cache: Option<Arc<dyn WeatherCache>>,
) -> Router {
    let state = Arc::new(AppState {
        weather: provider,
        cache,
        clock: Arc::new(FixedClock(NOW)),
        analytics: AnalyticsConfig::default(),
    });

    travelcast::routes::create_router(state)
}

/// Issue a GET and decode the JSON body
#[allow(dead_code)]
pub async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = serde_json::from_slice(&body).unwrap_or(serde_json::Value::Null);
    (status, json)
}
