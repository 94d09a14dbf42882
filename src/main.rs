use std::sync::Arc;

use weather_proxy::{AppConfig, AppState, build_app, init_tracing, run_server};

#[tokio::main]
async fn main() {
    init_tracing();

    let config = AppConfig::from_env();
    if config.api_key.is_empty() {
        tracing::warn!("OPENWEATHER_API_KEY is not set; upstream lookups will be rejected");
    }

    let port = config.port;
    let app = build_app(Arc::new(AppState::new(config)));

    run_server(app, port).await;
}
