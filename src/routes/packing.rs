use crate::constants::{
    DEFAULT_MINIMAL_TRIP_DURATION_DAYS, DEFAULT_TRIP_DURATION_DAYS, MAX_TRIP_DURATION_DAYS,
};
use crate::error::{AppError, Result};
use crate::models::{ChecklistSection, MinimalPackingList, PackingList, TripDetails};
use crate::routes::{parse_list, parse_number, validate_city};
use crate::services::packing::{
    destination_tips, generate_minimal_list, generate_packing_list, minimal_mode,
    packing_checklist,
};
use crate::AppState;
use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PackingMode {
    #[default]
    Full,
    Minimal,
}

/// Query parameters shared by the full list and the checklist
#[derive(Debug, Default, Deserialize)]
pub struct PackingParams {
    /// "full" (default) or "minimal"
    pub mode: Option<String>,
    /// Trip length in days (default: 7)
    pub duration: Option<String>,
    /// Comma-separated activities, e.g. "beach,hiking"
    pub activities: Option<String>,
    pub style: Option<String>,
}

fn validate_duration(raw: Option<&str>, default: u32) -> Result<u32> {
    let duration = parse_number("duration", raw)?.unwrap_or(default);
    if duration == 0 || duration > MAX_TRIP_DURATION_DAYS {
        return Err(AppError::InvalidRequest(format!(
            "duration must be between 1 and {} days",
            MAX_TRIP_DURATION_DAYS
        )));
    }
    Ok(duration)
}

impl PackingParams {
    pub fn mode(&self) -> Result<PackingMode> {
        match self.mode.as_deref().map(|m| m.trim().to_lowercase()).as_deref() {
            None | Some("") | Some("full") => Ok(PackingMode::Full),
            Some("minimal") => Ok(PackingMode::Minimal),
            Some(other) => Err(AppError::InvalidRequest(format!(
                "Invalid mode: '{}'. Use 'full' or 'minimal'",
                other
            ))),
        }
    }

    pub fn trip_details(&self) -> Result<TripDetails> {
        Ok(TripDetails {
            duration: validate_duration(self.duration.as_deref(), DEFAULT_TRIP_DURATION_DAYS)?,
            activities: parse_list(self.activities.as_deref()),
            style: self
                .style
                .as_deref()
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .unwrap_or("casual")
                .to_string(),
        })
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PackingResponse {
    pub city: String,
    pub mode: PackingMode,
    pub trip_details: TripDetails,
    pub packing_list: PackingList,
    pub destination_tips: Vec<&'static str>,
}

/// GET /analytics/packing/{city} - Weather-driven packing list
pub async fn get_packing_list(
    State(state): State<Arc<AppState>>,
    Path(city): Path<String>,
    Query(params): Query<PackingParams>,
) -> Result<Json<PackingResponse>> {
    let city = validate_city(&city)?;
    let mode = params.mode()?;
    let trip = params.trip_details()?;

    tracing::info!(
        city = %city,
        mode = ?mode,
        duration = trip.duration,
        "Packing list requested"
    );

    let observation = state.weather.current_by_city(city).await?;
    let list = generate_packing_list(&observation, &trip);
    let packing_list = match mode {
        PackingMode::Full => list,
        PackingMode::Minimal => minimal_mode(list),
    };

    Ok(Json(PackingResponse {
        destination_tips: destination_tips(&observation),
        city: observation.city,
        mode,
        trip_details: trip,
        packing_list,
    }))
}

#[derive(Debug, Default, Deserialize)]
pub struct MinimalPackingParams {
    /// Trip length in days (default: 3)
    pub duration: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MinimalPackingResponse {
    pub city: String,
    pub duration: u32,
    pub packing_list: MinimalPackingList,
    pub note: &'static str,
}

/// GET /analytics/packing/{city}/minimal - Carry-on packing list
pub async fn get_minimal_packing_list(
    State(state): State<Arc<AppState>>,
    Path(city): Path<String>,
    Query(params): Query<MinimalPackingParams>,
) -> Result<Json<MinimalPackingResponse>> {
    let city = validate_city(&city)?;
    let duration = validate_duration(
        params.duration.as_deref(),
        DEFAULT_MINIMAL_TRIP_DURATION_DAYS,
    )?;

    tracing::info!(city = %city, duration, "Carry-on packing list requested");

    let observation = state.weather.current_by_city(city).await?;

    Ok(Json(MinimalPackingResponse {
        packing_list: generate_minimal_list(&observation, duration),
        city: observation.city,
        duration,
        note: "Carry-on only packing list",
    }))
}

#[derive(Debug, Serialize)]
pub struct ChecklistResponse {
    pub city: String,
    pub checklist: Vec<ChecklistSection>,
}

/// GET /analytics/packing/{city}/checklist - Full list as unchecked sections
pub async fn get_packing_checklist(
    State(state): State<Arc<AppState>>,
    Path(city): Path<String>,
    Query(params): Query<PackingParams>,
) -> Result<Json<ChecklistResponse>> {
    let city = validate_city(&city)?;
    let trip = params.trip_details()?;

    tracing::info!(city = %city, duration = trip.duration, "Packing checklist requested");

    let observation = state.weather.current_by_city(city).await?;
    let list = generate_packing_list(&observation, &trip);

    Ok(Json(ChecklistResponse {
        city: observation.city,
        checklist: packing_checklist(&list),
    }))
}
