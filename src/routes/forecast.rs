use crate::error::Result;
use crate::models::ForecastResponse;
use crate::routes::{parse_units, validate_city};
use crate::services::forecast_aggregator::{aggregate_forecast, best_day};
use crate::AppState;
use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use std::sync::Arc;

#[derive(Debug, Deserialize)]
pub struct ForecastParams {
    /// "metric" (default) or "imperial"
    pub units: Option<String>,
}

/// GET /analytics/forecast/{city} - Daily summaries of the 5-day forecast
pub async fn get_forecast(
    State(state): State<Arc<AppState>>,
    Path(city): Path<String>,
    Query(params): Query<ForecastParams>,
) -> Result<Json<ForecastResponse>> {
    let city = validate_city(&city)?;
    let units = parse_units(params.units.as_deref())?;

    tracing::info!(city = %city, units = %units, "Forecast requested");

    let (current, forecast) = futures::join!(
        state.weather.current_by_city(city),
        state.weather.forecast_by_city(city)
    );
    let forecast = forecast?;

    // The forecast alone is still useful without the live reading
    let current = match current {
        Ok(observation) => Some(observation),
        Err(e) => {
            tracing::warn!(city = %city, "Live reading unavailable for forecast: {}", e);
            None
        }
    };

    let days = aggregate_forecast(current.as_ref(), &forecast.entries, state.clock.now());
    let best = best_day(&days).cloned();

    Ok(Json(ForecastResponse {
        city: forecast.city,
        country: forecast.country,
        units,
        daily_forecasts: days.into_iter().map(|d| d.in_units(units)).collect(),
        best_day: best.map(|d| d.in_units(units)),
    }))
}
