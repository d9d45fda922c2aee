use crate::models::Coordinates;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Precipitation volumes as reported by the provider (mm).
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct Precipitation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub one_hour: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub three_hour: Option<f64>,
}

impl Precipitation {
    /// Hourly rate in mm/h. Prefers the 1h volume; a 3h bucket is spread evenly.
    pub fn hourly_rate(&self) -> f64 {
        match (self.one_hour, self.three_hour) {
            (Some(one_hour), _) => one_hour,
            (None, Some(three_hour)) => three_hour / 3.0,
            (None, None) => 0.0,
        }
    }
}

/// A single validated weather reading. Temperatures are always Celsius.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WeatherObservation {
    pub city: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    pub coordinates: Coordinates,
    pub temperature: f64,
    pub feels_like: f64,
    pub humidity: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pressure: Option<f64>,
    pub wind_speed: f64,
    pub cloudiness: f64,
    /// Present whenever the provider reported a rain object, even an empty one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rain: Option<Precipitation>,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Unix timestamp of the reading
    pub observed_at: i64,
}

impl WeatherObservation {
    /// Precipitation in mm/h, 0 when no rain was reported
    pub fn precipitation_rate(&self) -> f64 {
        self.rain.map(|r| r.hourly_rate()).unwrap_or(0.0)
    }

    pub fn is_raining(&self) -> bool {
        self.rain.is_some()
    }
}

/// One 3-hour forecast bucket.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ForecastEntry {
    /// Provider timestamp, "YYYY-MM-DD HH:MM:SS" in the provider's reporting zone
    pub timestamp: String,
    pub observation: WeatherObservation,
}

impl ForecastEntry {
    /// Calendar-day part of the timestamp
    pub fn day_key(&self) -> &str {
        self.timestamp
            .split_once(' ')
            .map(|(day, _)| day)
            .unwrap_or(&self.timestamp)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Forecast {
    pub city: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    pub entries: Vec<ForecastEntry>,
}

/// Result of resolving a free-text city name to a location.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeocodedCity {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    pub coordinates: Coordinates,
}

/// Compact current-conditions view embedded in analytics responses.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WeatherSnapshot {
    pub temp: f64,
    pub description: String,
    pub humidity: f64,
}

impl From<&WeatherObservation> for WeatherSnapshot {
    fn from(observation: &WeatherObservation) -> Self {
        WeatherSnapshot {
            temp: observation.temperature,
            description: observation.description.clone(),
            humidity: observation.humidity,
        }
    }
}

/// Display units requested by the caller. Scoring always happens in Celsius.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Units {
    #[default]
    Metric,
    Imperial,
}

impl Units {
    pub fn convert_temperature(&self, celsius: f64) -> f64 {
        match self {
            Units::Metric => celsius,
            Units::Imperial => celsius * 9.0 / 5.0 + 32.0,
        }
    }
}

impl fmt::Display for Units {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Units::Metric => write!(f, "metric"),
            Units::Imperial => write!(f, "imperial"),
        }
    }
}

impl FromStr for Units {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "metric" | "celsius" => Ok(Units::Metric),
            "imperial" | "fahrenheit" => Ok(Units::Imperial),
            _ => Err(format!("Invalid units: '{}'. Use 'metric' or 'imperial'", s)),
        }
    }
}

/// Round to one decimal place, the precision used for every exposed average.
/// Halves go up, so -0.25 becomes -0.2.
pub fn round1(value: f64) -> f64 {
    (value * 10.0 + 0.5).floor() / 10.0
}
