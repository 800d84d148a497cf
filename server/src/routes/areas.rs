//! Area endpoints.
//!
//! Every endpoint is a GET named after its method, with arguments in the
//! query string. Mutating calls answer `200` with an empty body.

#[cfg(test)]
#[path = "areas_test.rs"]
mod areas_test;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{Json, Redirect};
use client::net::types::{AreaList, ObscuredAreas};

use crate::services::areas::{self, AddAreaParams, AreaError};
use crate::state::AppState;

/// `GET /snapshot_empty_state`: ask the detector to re-capture the empty lot.
pub async fn snapshot_empty_state(State(state): State<AppState>) -> StatusCode {
    areas::snapshot_empty_state(&state);
    StatusCode::OK
}

/// `GET /add_area?name=&left=&right=&top=&bottom=`: register an area.
pub async fn add_area(
    State(state): State<AppState>,
    Query(params): Query<AddAreaParams>,
) -> Result<StatusCode, StatusCode> {
    areas::add_area(&state, params).await.map_err(|e| {
        tracing::warn!(error = %e, "add_area rejected");
        area_error_to_status(&e)
    })?;
    Ok(StatusCode::OK)
}

/// `GET /clear_areas`: drop every area.
pub async fn clear_areas(State(state): State<AppState>) -> StatusCode {
    areas::clear_areas(&state).await;
    StatusCode::OK
}

/// `GET /obscured_areas`: occupancy of every registered area.
pub async fn obscured_areas(State(state): State<AppState>) -> Json<ObscuredAreas> {
    Json(ObscuredAreas { areas: areas::obscured_areas(&state).await })
}

/// `GET /get_areas`: every registered area in insertion order.
pub async fn get_areas(State(state): State<AppState>) -> Json<AreaList> {
    Json(AreaList { areas: areas::list_areas(&state).await })
}

/// `GET /color_video_stream`: redirect to the configured camera stream.
pub async fn color_video_stream(State(state): State<AppState>) -> Result<Redirect, StatusCode> {
    state
        .stream_url
        .as_deref()
        .map(Redirect::temporary)
        .ok_or(StatusCode::NOT_FOUND)
}

pub(crate) fn area_error_to_status(err: &AreaError) -> StatusCode {
    match err {
        AreaError::MissingArgument(_) | AreaError::InvalidCoordinate { .. } => StatusCode::BAD_REQUEST,
    }
}
