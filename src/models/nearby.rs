use crate::models::{Coordinates, WeatherSnapshot};
use serde::Serialize;

/// Which path produced a nearby-city result.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum NearbySource {
    Provider,
    Curated,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NearbyCity {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    pub coordinates: Coordinates,
    pub distance_km: f64,
    pub current_weather: WeatherSnapshot,
    pub travel_score: f64,
    pub recommendation: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NearbyCities {
    pub city: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    pub source: NearbySource,
    pub nearby: Vec<NearbyCity>,
}
