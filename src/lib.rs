//! Thin HTTP proxy in front of the OpenWeatherMap current-weather API.
//!
//! A client calls `GET /weather?city=London`; the service forwards the city
//! and a configured API key upstream and relays the JSON body verbatim, or
//! answers with a `{"error": ...}` envelope when the lookup fails. No
//! caching, no retries, no validation beyond presence of the parameter.

pub mod api;
pub mod config;
pub mod upstream;

use std::sync::Arc;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

pub use config::AppConfig;
use upstream::WeatherClient;

pub struct AppState {
    pub weather: WeatherClient,
    pub config: AppConfig,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let weather = WeatherClient::new(config.base_url.clone(), config.api_key.clone());
        Self { weather, config }
    }
}

pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "weather_proxy=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

pub fn build_app(state: Arc<AppState>) -> Router {
    let enable_cors = state.config.enable_cors;
    let mut app = api::router(state).layer(TraceLayer::new_for_http());

    // When enabled, the permissive layer wraps the whole router, so the
    // headers land on every path: success, upstream failure, local failure
    // and the 404 fallback alike.
    if enable_cors {
        app = app.layer(CorsLayer::permissive());
    }

    app
}

pub async fn run_server(app: Router, port: u16) {
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port))
        .await
        .expect("bind failed");

    tracing::info!(port, "listening");
    axum::serve(listener, app).await.expect("server failed");
}
