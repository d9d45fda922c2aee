use crate::models::{round1, Recommendation, Units};
use serde::Serialize;

/// One scored forecast sample inside a day.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ForecastSample {
    pub date: String,
    pub temp: f64,
    pub description: String,
    pub humidity: f64,
    pub wind_speed: f64,
    pub travel_score: f64,
    pub recommendation: Recommendation,
    /// Set on the synthetic sample built from the live reading
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub is_current: bool,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DailyForecastSummary {
    pub date: String,
    pub avg_temp: f64,
    pub avg_travel_score: f64,
    pub conditions: String,
    pub recommendation: Recommendation,
    pub hourly_data: Vec<ForecastSample>,
}

impl DailyForecastSummary {
    /// Convert displayed temperatures. Scores are untouched.
    pub fn in_units(mut self, units: Units) -> Self {
        if units == Units::Metric {
            return self;
        }
        self.avg_temp = round1(units.convert_temperature(self.avg_temp));
        for sample in &mut self.hourly_data {
            sample.temp = units.convert_temperature(sample.temp);
        }
        self
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastResponse {
    pub city: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    pub units: Units,
    pub daily_forecasts: Vec<DailyForecastSummary>,
    pub best_day: Option<DailyForecastSummary>,
}
