use crate::models::{Coordinates, SubScores, TravelScore, Units};
use serde::Serialize;

/// Current conditions block of the city analysis.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CurrentConditions {
    pub temp: f64,
    pub feels_like: f64,
    pub humidity: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pressure: Option<f64>,
    pub wind_speed: f64,
    pub cloudiness: f64,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BestTimeAnalysis {
    pub score: f64,
    pub recommendation: String,
    pub details: SubScores,
    pub best_for: Vec<&'static str>,
    pub warnings: Vec<&'static str>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CityAnalysis {
    pub city: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    pub coordinates: Coordinates,
    pub units: Units,
    pub current_weather: CurrentConditions,
    pub travel_score: TravelScore,
    pub analysis: BestTimeAnalysis,
}

/// One row of a multi-city comparison.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(untagged)]
pub enum CityComparison {
    #[serde(rename_all = "camelCase")]
    Scored {
        city: String,
        score: f64,
        temp: f64,
        conditions: String,
        recommendation: String,
    },
    Unavailable {
        city: String,
        error: String,
    },
}

impl CityComparison {
    /// Score used for ranking; unavailable cities rank as 0
    pub fn ranking_score(&self) -> f64 {
        match self {
            CityComparison::Scored { score, .. } => *score,
            CityComparison::Unavailable { .. } => 0.0,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ComparisonResponse {
    pub units: Units,
    pub comparison: Vec<CityComparison>,
    pub winner: Option<CityComparison>,
}
