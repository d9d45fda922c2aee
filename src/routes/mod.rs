pub mod analysis;
pub mod forecast;
pub mod health;
pub mod nearby;
pub mod packing;
pub mod recommendations;

use axum::{routing::get, Router};
use std::str::FromStr;
use std::sync::Arc;

use crate::error::{AppError, Result};
use crate::models::Units;
use crate::AppState;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .route(
            "/analytics/recommendations",
            get(recommendations::get_recommendations),
        )
        .route("/analytics/compare", get(analysis::compare_cities))
        .route("/analytics/city/{city}", get(analysis::city_analysis))
        .route("/analytics/forecast/{city}", get(forecast::get_forecast))
        .route(
            "/analytics/nearby-cities/{city}",
            get(nearby::get_nearby_cities),
        )
        .route("/analytics/packing/{city}", get(packing::get_packing_list))
        .route(
            "/analytics/packing/{city}/minimal",
            get(packing::get_minimal_packing_list),
        )
        .route(
            "/analytics/packing/{city}/checklist",
            get(packing::get_packing_checklist),
        )
        .with_state(state)
}

/// Split a comma-separated query value, dropping blanks
pub(crate) fn parse_list(raw: Option<&str>) -> Vec<String> {
    raw.map(|s| {
        s.split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect()
    })
    .unwrap_or_default()
}

pub(crate) fn parse_units(raw: Option<&str>) -> Result<Units> {
    match raw.map(str::trim).filter(|s| !s.is_empty()) {
        None => Ok(Units::default()),
        Some(s) => s.parse().map_err(AppError::InvalidRequest),
    }
}

/// Parse an optional numeric query value. Blank counts as absent.
pub(crate) fn parse_number<T: FromStr>(name: &str, raw: Option<&str>) -> Result<Option<T>> {
    match raw.map(str::trim).filter(|s| !s.is_empty()) {
        None => Ok(None),
        Some(s) => s
            .parse()
            .map(Some)
            .map_err(|_| AppError::InvalidRequest(format!("Invalid {}: '{}'", name, s))),
    }
}

pub(crate) fn validate_city(city: &str) -> Result<&str> {
    let city = city.trim();
    if city.is_empty() {
        return Err(AppError::InvalidRequest("city must not be empty".to_string()));
    }
    Ok(city)
}
