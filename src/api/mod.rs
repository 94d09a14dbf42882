mod handlers;
mod models;

use std::sync::Arc;

use axum::{Router, routing::get};

use crate::AppState;

pub use handlers::{get_weather, health, not_found};
pub use models::{ErrorResponse, HealthResponse, WeatherQuery};

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/weather", get(get_weather))
        .route("/health", get(health))
        .fallback(not_found)
        .with_state(state)
}
