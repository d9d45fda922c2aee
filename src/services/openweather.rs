use crate::error::{AppError, Result};
use crate::models::{
    Coordinates, Forecast, ForecastEntry, GeocodedCity, Precipitation, WeatherObservation,
};
use crate::services::weather_provider::WeatherProvider;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::time::Duration;

/// OpenWeatherMap client. Every call is made in metric units.
#[derive(Clone)]
pub struct OpenWeatherClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl OpenWeatherClient {
    pub fn new(api_key: String, base_url: String, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::Internal(format!("Failed to build HTTP client: {}", e)))?;

        Ok(OpenWeatherClient {
            client,
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// GET `{base_url}{path}` and return the body. `subject` names what was
    /// asked for so a 404 can say which city was unknown.
    async fn fetch(&self, path: &str, params: &[(&str, String)], subject: &str) -> Result<String> {
        let url = format!("{}{}", self.base_url, path);

        tracing::debug!(path = %path, subject = %subject, "OpenWeatherMap request");

        let response = self
            .client
            .get(&url)
            .query(params)
            .query(&[("appid", self.api_key.as_str()), ("units", "metric")])
            .send()
            .await
            .map_err(|e| AppError::UpstreamUnavailable(format!("Request failed: {}", e)))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(AppError::UpstreamNotFound(subject.to_string()));
        }
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            tracing::warn!(
                status = %status,
                path = %path,
                "OpenWeatherMap HTTP error {}: {}",
                status, error_text
            );
            return Err(AppError::UpstreamUnavailable(format!(
                "HTTP {}: {}",
                status, error_text
            )));
        }

        response
            .text()
            .await
            .map_err(|e| AppError::UpstreamUnavailable(format!("Failed to read response: {}", e)))
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherClient {
    async fn current_by_city(&self, city: &str) -> Result<WeatherObservation> {
        let body = self
            .fetch("/data/2.5/weather", &[("q", city.to_string())], city)
            .await?;
        parse_current(&body, city)
    }

    async fn current_by_coords(&self, coordinates: &Coordinates) -> Result<WeatherObservation> {
        let subject = format!("{},{}", coordinates.lat, coordinates.lng);
        let body = self
            .fetch(
                "/data/2.5/weather",
                &[
                    ("lat", coordinates.lat.to_string()),
                    ("lon", coordinates.lng.to_string()),
                ],
                &subject,
            )
            .await?;
        parse_current(&body, &subject)
    }

    async fn forecast_by_city(&self, city: &str) -> Result<Forecast> {
        let body = self
            .fetch("/data/2.5/forecast", &[("q", city.to_string())], city)
            .await?;
        parse_forecast(&body, city)
    }

    async fn geocode(&self, city: &str) -> Result<GeocodedCity> {
        let body = self
            .fetch(
                "/geo/1.0/direct",
                &[("q", city.to_string()), ("limit", "1".to_string())],
                city,
            )
            .await?;
        parse_geocode(&body, city)
    }

    async fn find_nearby(
        &self,
        center: &Coordinates,
        count: u32,
    ) -> Result<Vec<WeatherObservation>> {
        let subject = format!("{},{}", center.lat, center.lng);
        let body = self
            .fetch(
                "/data/2.5/find",
                &[
                    ("lat", center.lat.to_string()),
                    ("lon", center.lng.to_string()),
                    ("cnt", count.to_string()),
                ],
                &subject,
            )
            .await?;
        parse_find(&body)
    }
}

// OpenWeatherMap payload shapes. Every numeric field is optional here and
// checked in `into_observation`.

#[derive(Debug, Deserialize)]
struct RawCoord {
    lat: f64,
    lon: f64,
}

#[derive(Debug, Deserialize)]
struct RawMain {
    temp: Option<f64>,
    feels_like: Option<f64>,
    humidity: Option<f64>,
    pressure: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct RawWind {
    speed: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct RawClouds {
    all: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct RawRain {
    #[serde(rename = "1h")]
    one_hour: Option<f64>,
    #[serde(rename = "3h")]
    three_hour: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct RawCondition {
    description: String,
    icon: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawSys {
    country: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawReading {
    name: Option<String>,
    coord: Option<RawCoord>,
    main: Option<RawMain>,
    wind: Option<RawWind>,
    clouds: Option<RawClouds>,
    rain: Option<RawRain>,
    #[serde(default)]
    weather: Vec<RawCondition>,
    #[serde(default)]
    dt: i64,
    dt_txt: Option<String>,
    sys: Option<RawSys>,
}

#[derive(Debug, Deserialize)]
struct RawForecastCity {
    name: Option<String>,
    country: Option<String>,
    coord: Option<RawCoord>,
}

#[derive(Debug, Deserialize)]
struct RawForecast {
    #[serde(default)]
    list: Vec<RawReading>,
    city: Option<RawForecastCity>,
}

#[derive(Debug, Deserialize)]
struct RawFind {
    #[serde(default)]
    list: Vec<RawReading>,
}

#[derive(Debug, Deserialize)]
struct RawGeocode {
    name: String,
    lat: f64,
    lon: f64,
    country: Option<String>,
}

fn required(value: Option<f64>, field: &str, subject: &str) -> Result<f64> {
    match value {
        Some(v) if v.is_finite() => Ok(v),
        Some(_) => Err(AppError::InvalidObservation(format!(
            "{} is not a finite number for {}",
            field, subject
        ))),
        None => Err(AppError::InvalidObservation(format!(
            "{} missing for {}",
            field, subject
        ))),
    }
}

fn to_coordinates(raw: &RawCoord, subject: &str) -> Result<Coordinates> {
    Coordinates::new(raw.lat, raw.lon)
        .map_err(|e| AppError::InvalidObservation(format!("{} for {}", e, subject)))
}

impl RawReading {
    /// Validate a reading. `fallback_coords` and `fallback_country` cover
    /// forecast buckets, which only carry them on the enclosing city.
    fn into_observation(
        self,
        subject: &str,
        fallback_coords: Option<Coordinates>,
        fallback_country: Option<&str>,
    ) -> Result<WeatherObservation> {
        let main = self.main.as_ref();
        let temperature = required(main.and_then(|m| m.temp), "main.temp", subject)?;
        let humidity = required(main.and_then(|m| m.humidity), "main.humidity", subject)?;
        let wind_speed = required(self.wind.as_ref().and_then(|w| w.speed), "wind.speed", subject)?;
        let cloudiness = required(self.clouds.as_ref().and_then(|c| c.all), "clouds.all", subject)?;

        let coordinates = match (&self.coord, fallback_coords) {
            (Some(raw), _) => to_coordinates(raw, subject)?,
            (None, Some(coords)) => coords,
            (None, None) => {
                return Err(AppError::InvalidObservation(format!(
                    "coord missing for {}",
                    subject
                )))
            }
        };

        let condition = self.weather.into_iter().next();
        let country = self
            .sys
            .and_then(|s| s.country)
            .filter(|c| !c.is_empty())
            .or_else(|| fallback_country.map(str::to_string));

        Ok(WeatherObservation {
            city: self
                .name
                .filter(|n| !n.is_empty())
                .unwrap_or_else(|| subject.to_string()),
            country,
            coordinates,
            temperature,
            feels_like: main
                .and_then(|m| m.feels_like)
                .filter(|v| v.is_finite())
                .unwrap_or(temperature),
            humidity,
            pressure: main.and_then(|m| m.pressure).filter(|v| v.is_finite()),
            wind_speed,
            cloudiness,
            rain: self.rain.map(|r| Precipitation {
                one_hour: r.one_hour.filter(|v| v.is_finite()),
                three_hour: r.three_hour.filter(|v| v.is_finite()),
            }),
            description: condition
                .as_ref()
                .map(|c| c.description.clone())
                .unwrap_or_default(),
            icon: condition.and_then(|c| c.icon),
            observed_at: self.dt,
        })
    }
}

fn parse_body<'a, T: Deserialize<'a>>(body: &'a str, subject: &str) -> Result<T> {
    serde_json::from_str(body).map_err(|e| {
        AppError::InvalidObservation(format!("Malformed payload for {}: {}", subject, e))
    })
}

pub(crate) fn parse_current(body: &str, subject: &str) -> Result<WeatherObservation> {
    let raw: RawReading = parse_body(body, subject)?;
    raw.into_observation(subject, None, None)
}

pub(crate) fn parse_forecast(body: &str, subject: &str) -> Result<Forecast> {
    let raw: RawForecast = parse_body(body, subject)?;

    let (city, country, coords) = match raw.city {
        Some(city) => {
            let coords = match city.coord {
                Some(ref c) => Some(to_coordinates(c, subject)?),
                None => None,
            };
            (
                city.name.unwrap_or_else(|| subject.to_string()),
                city.country,
                coords,
            )
        }
        None => (subject.to_string(), None, None),
    };

    let entries = raw
        .list
        .into_iter()
        .map(|mut reading| {
            let timestamp = reading.dt_txt.take().ok_or_else(|| {
                AppError::InvalidObservation(format!("dt_txt missing for {}", subject))
            })?;
            // Buckets carry no name of their own
            reading.name.get_or_insert_with(|| city.clone());
            let observation = reading.into_observation(subject, coords, country.as_deref())?;
            Ok(ForecastEntry {
                timestamp,
                observation,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(Forecast {
        city,
        country,
        entries,
    })
}

pub(crate) fn parse_geocode(body: &str, subject: &str) -> Result<GeocodedCity> {
    let matches: Vec<RawGeocode> = parse_body(body, subject)?;
    let first = matches
        .into_iter()
        .next()
        .ok_or_else(|| AppError::UpstreamNotFound(subject.to_string()))?;

    Ok(GeocodedCity {
        coordinates: to_coordinates(
            &RawCoord {
                lat: first.lat,
                lon: first.lon,
            },
            subject,
        )?,
        name: first.name,
        country: first.country,
    })
}

/// Readings that fail validation are skipped; one bad place should not hide
/// the rest of the neighbourhood.
pub(crate) fn parse_find(body: &str) -> Result<Vec<WeatherObservation>> {
    let raw: RawFind = parse_body(body, "nearby search")?;

    Ok(raw
        .list
        .into_iter()
        .filter_map(|reading| {
            let subject = reading.name.clone().unwrap_or_default();
            match reading.into_observation(&subject, None, None) {
                Ok(observation) => Some(observation),
                Err(e) => {
                    tracing::warn!("Skipping nearby place: {}", e);
                    None
                }
            }
        })
        .collect())
}
