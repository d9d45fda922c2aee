use crate::AppState;
use axum::{extract::State, Json};
use serde_json::{json, Value};
use std::sync::Arc;

/// GET /health - Liveness plus cache backend status
pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<Value> {
    let mut status = json!({
        "status": "ok",
        "checks": {}
    });

    match &state.cache {
        Some(cache) => {
            let healthy = cache.health_check().await;
            let stats = cache.get_stats().await;
            status["checks"]["cache"] = json!({
                "backend": cache.backend_name(),
                "healthy": healthy,
                "stats": stats,
            });
            if !healthy {
                status["status"] = json!("degraded");
            }
        }
        None => {
            status["checks"]["cache"] = json!("disabled");
        }
    }

    Json(status)
}
