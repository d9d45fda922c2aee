use crate::error::Result;
use crate::models::NearbyCities;
use crate::routes::validate_city;
use crate::services::nearby::get_nearest_cities;
use crate::AppState;
use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;

/// GET /analytics/nearby-cities/{city}
pub async fn get_nearby_cities(
    State(state): State<Arc<AppState>>,
    Path(city): Path<String>,
) -> Result<Json<NearbyCities>> {
    let city = validate_city(&city)?;
    tracing::info!(city = %city, "Nearby cities requested");

    let result = get_nearest_cities(state.weather.as_ref(), city, &state.analytics).await?;

    tracing::debug!(
        city = %city,
        source = ?result.source,
        found = result.nearby.len(),
        "Nearby search finished"
    );
    Ok(Json(result))
}
