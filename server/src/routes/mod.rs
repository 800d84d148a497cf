//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module binds the area endpoints at the root (the method name is the
//! path) and stitches them with Leptos SSR rendering under a single Axum
//! router. When no Leptos configuration is present the API is served alone.

pub mod areas;

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Area endpoints used by the browser client.
fn api_routes(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/snapshot_empty_state", get(areas::snapshot_empty_state))
        .route("/add_area", get(areas::add_area))
        .route("/clear_areas", get(areas::clear_areas))
        .route("/obscured_areas", get(areas::obscured_areas))
        .route("/get_areas", get(areas::get_areas))
        .route("/color_video_stream", get(areas::color_video_stream))
        .route("/healthz", get(healthz))
        .layer(cors)
        .with_state(state)
}

/// Leptos SSR frontend plus its `/pkg` assets.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing
/// `LEPTOS_*` environment or `[package.metadata.leptos]` section).
fn leptos_app() -> Result<Router, String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);
    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    Ok(Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg"))))
}

/// Full application router.
pub fn app(state: AppState) -> Router {
    let router = match leptos_app() {
        Ok(frontend) => api_routes(state).merge(frontend),
        Err(e) => {
            tracing::warn!(error = %e, "frontend not configured; serving API only");
            api_routes(state)
        }
    };
    router.layer(TraceLayer::new_for_http())
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
