use std::sync::Arc;

use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::Value;

use crate::AppState;

use super::models::{ErrorResponse, HealthResponse, WeatherQuery};

/// Proxies the city lookup to the weather API and relays the JSON body
/// verbatim. Upstream failures keep the upstream's status code with a fixed
/// message; local transport or decode failures map to 500 and surface the
/// failure's own message.
pub async fn get_weather(
    State(state): State<Arc<AppState>>,
    Query(params): Query<WeatherQuery>,
) -> Result<Json<Value>, (StatusCode, Json<ErrorResponse>)> {
    state
        .weather
        .fetch(params.city.as_deref())
        .await
        .map(Json)
        .map_err(|err| {
            let status = err.status_code();
            tracing::warn!(%status, error = %err, city = ?params.city, "weather lookup failed");
            (
                status,
                Json(ErrorResponse {
                    error: err.to_string(),
                }),
            )
        })
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

pub async fn not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            error: "Not found".to_string(),
        }),
    )
        .into_response()
}
