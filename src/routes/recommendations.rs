use crate::error::{AppError, Result};
use crate::models::{DestinationPreferences, DestinationRecommendation, ScorePreferences};
use crate::routes::{parse_list, parse_number};
use crate::services::recommendation::get_smart_recommendations;
use crate::AppState;
use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Query parameters for destination recommendations
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationParams {
    /// Climate keyword matched against the catalog, e.g. "tropical"
    pub climate: Option<String>,
    /// Comma-separated activity tags
    pub activities: Option<String>,
    pub temp_min: Option<String>,
    pub temp_max: Option<String>,
    /// Month of travel (1-12), defaults to the current month
    pub month: Option<String>,
}

impl RecommendationParams {
    pub fn into_preferences(self, current_month: u8) -> Result<DestinationPreferences> {
        let range = ScorePreferences::from_bounds(
            parse_number("tempMin", self.temp_min.as_deref())?,
            parse_number("tempMax", self.temp_max.as_deref())?,
        )
        .map_err(AppError::InvalidRequest)?;

        let month = parse_number("month", self.month.as_deref())?.unwrap_or(current_month);
        if !(1..=12).contains(&month) {
            return Err(AppError::InvalidRequest(
                "month must be between 1 and 12".to_string(),
            ));
        }

        Ok(DestinationPreferences {
            climate: self.climate,
            activities: parse_list(self.activities.as_deref()),
            temp_min: range.temp_min,
            temp_max: range.temp_max,
            month,
        })
    }
}

#[derive(Debug, Serialize)]
pub struct RecommendationResponse {
    pub count: usize,
    pub month: u8,
    pub recommendations: Vec<DestinationRecommendation>,
}

/// GET /analytics/recommendations - Catalog destinations ranked by live weather
pub async fn get_recommendations(
    State(state): State<Arc<AppState>>,
    Query(params): Query<RecommendationParams>,
) -> Result<Json<RecommendationResponse>> {
    let current_month = u8::from(state.clock.now().month());
    let preferences = params.into_preferences(current_month)?;

    tracing::info!(
        climate = ?preferences.climate,
        activities = ?preferences.activities,
        month = preferences.month,
        "Destination recommendations requested"
    );

    let recommendations = get_smart_recommendations(
        state.weather.as_ref(),
        &preferences,
        state.analytics.recommendation_limit,
    )
    .await;

    Ok(Json(RecommendationResponse {
        count: recommendations.len(),
        month: preferences.month,
        recommendations,
    }))
}
