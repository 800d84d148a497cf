mod config;
mod routes;
mod services;
mod state;

use std::sync::Arc;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = config::ServerConfig::from_env().expect("invalid configuration");
    match config.stream_url.as_deref() {
        Some(url) => tracing::info!(%url, "camera stream configured"),
        None => tracing::warn!("STREAM_URL not set; /color_video_stream will answer 404"),
    }

    let detector = Arc::new(services::detector::IdleDetector::default());
    let state = state::AppState::new(detector, config.stream_url.clone());

    let app = routes::app(state);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port))
        .await
        .expect("failed to bind");

    tracing::info!(port = config.port, "parkwatch listening");
    axum::serve(listener, app).await.expect("server failed");
}
