use crate::models::WeatherSnapshot;
use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct TemperatureRange {
    pub min: f64,
    pub max: f64,
}

/// Curated catalog entry. Catalog data is compiled in and never mutated.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Destination {
    pub city: &'static str,
    pub country: &'static str,
    pub climate: &'static str,
    pub optimal_temp: TemperatureRange,
    pub activities: &'static [&'static str],
    pub best_months: &'static [u8],
    pub tags: &'static [&'static str],
}

impl Destination {
    pub fn has_activity(&self, activity: &str) -> bool {
        let wanted = activity.trim();
        self.activities.iter().any(|a| a.eq_ignore_ascii_case(wanted))
    }

    pub fn is_best_month(&self, month: u8) -> bool {
        self.best_months.contains(&month)
    }
}

/// Destination matching preferences for the recommendation engine.
#[derive(Debug, Clone, PartialEq)]
pub struct DestinationPreferences {
    pub climate: Option<String>,
    pub activities: Vec<String>,
    pub temp_min: f64,
    pub temp_max: f64,
    /// Month of travel, 1..=12
    pub month: u8,
}

/// Catalog entry enriched with live weather.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DestinationRecommendation {
    #[serde(flatten)]
    pub destination: Destination,
    pub match_score: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_weather: Option<WeatherSnapshot>,
    /// `None` when live weather could not be fetched
    pub travel_score: Option<f64>,
    pub recommendation: String,
}
