use crate::error::{AppError, Result};
use crate::models::{round1, CityAnalysis, ComparisonResponse, CurrentConditions, ScorePreferences};
use crate::routes::{parse_list, parse_number, parse_units, validate_city};
use crate::services::recommendation::{analyze_best_travel_time, compare_destinations};
use crate::services::travel_score::calculate_travel_score;
use crate::AppState;
use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use std::sync::Arc;

#[derive(Debug, Default, Deserialize)]
pub struct CompareParams {
    /// Comma-separated city names
    pub cities: Option<String>,
    pub units: Option<String>,
}

/// GET /analytics/compare - Score several cities side by side
pub async fn compare_cities(
    State(state): State<Arc<AppState>>,
    Query(params): Query<CompareParams>,
) -> Result<Json<ComparisonResponse>> {
    let cities = parse_list(params.cities.as_deref());
    let units = parse_units(params.units.as_deref())?;
    let (min, max) = (
        state.analytics.compare_min_cities,
        state.analytics.compare_max_cities,
    );

    if cities.len() < min {
        return Err(AppError::InvalidRequest(format!(
            "Please provide at least {} cities to compare",
            min
        )));
    }
    if cities.len() > max {
        return Err(AppError::InvalidRequest(format!(
            "Maximum {} cities can be compared at once",
            max
        )));
    }

    tracing::info!(cities = ?cities, "City comparison requested");

    Ok(Json(
        compare_destinations(state.weather.as_ref(), &cities, units).await,
    ))
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CityAnalysisParams {
    pub temp_min: Option<String>,
    pub temp_max: Option<String>,
    pub units: Option<String>,
}

/// GET /analytics/city/{city} - Current conditions with score breakdown
pub async fn city_analysis(
    State(state): State<Arc<AppState>>,
    Path(city): Path<String>,
    Query(params): Query<CityAnalysisParams>,
) -> Result<Json<CityAnalysis>> {
    let city = validate_city(&city)?;
    let units = parse_units(params.units.as_deref())?;
    let preferences = ScorePreferences::from_bounds(
        parse_number("tempMin", params.temp_min.as_deref())?,
        parse_number("tempMax", params.temp_max.as_deref())?,
    )
    .map_err(AppError::InvalidRequest)?;

    tracing::info!(city = %city, "City analysis requested");

    let observation = state.weather.current_by_city(city).await?;
    let travel_score = calculate_travel_score(&observation, &preferences);
    let analysis = analyze_best_travel_time(&observation, &preferences);

    Ok(Json(CityAnalysis {
        current_weather: CurrentConditions {
            temp: round1(units.convert_temperature(observation.temperature)),
            feels_like: round1(units.convert_temperature(observation.feels_like)),
            humidity: observation.humidity,
            pressure: observation.pressure,
            wind_speed: observation.wind_speed,
            cloudiness: observation.cloudiness,
            description: observation.description,
            icon: observation.icon,
        },
        city: observation.city,
        country: observation.country,
        coordinates: observation.coordinates,
        units,
        travel_score,
        analysis,
    }))
}
