//! HTTP calls to the area service.
//!
//! Client-side (hydrate): real requests via `gloo-net`. Every call is a GET to
//! `/<method>` with query-string arguments.
//! Server-side (SSR): stubs returning an error since these endpoints are only
//! meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! There is one failure kind, `ApiError`, covering transport errors, non-2xx
//! statuses and undecodable bodies alike. Callers route results through
//! `settle`, the single place that logs a failure; nothing is retried.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::collections::BTreeMap;

use super::types::Area;

pub const SNAPSHOT_EMPTY_STATE: &str = "snapshot_empty_state";
pub const ADD_AREA: &str = "add_area";
pub const CLEAR_AREAS: &str = "clear_areas";
pub const OBSCURED_AREAS: &str = "obscured_areas";
pub const GET_AREAS: &str = "get_areas";

/// A backend call that did not succeed.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{method} failed: {reason}")]
pub struct ApiError {
    pub method: &'static str,
    pub reason: String,
}

impl ApiError {
    #[must_use]
    pub fn new(method: &'static str, reason: impl Into<String>) -> Self {
        Self { method, reason: reason.into() }
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn endpoint(method: &str) -> String {
    format!("/{method}")
}

#[cfg(any(test, feature = "hydrate"))]
fn status_failed_message(status: u16) -> String {
    format!("status {status}")
}

#[cfg(not(feature = "hydrate"))]
fn unavailable(method: &'static str) -> ApiError {
    ApiError::new(method, "not available on server")
}

#[cfg(feature = "hydrate")]
async fn call(method: &'static str, query: &[(&'static str, String)]) -> Result<gloo_net::http::Response, ApiError> {
    let resp = gloo_net::http::Request::get(&endpoint(method))
        .query(query.iter().map(|(k, v)| (*k, v)))
        .send()
        .await
        .map_err(|e| ApiError::new(method, e.to_string()))?;
    if !resp.ok() {
        return Err(ApiError::new(method, status_failed_message(resp.status())));
    }
    Ok(resp)
}

/// Ask the service to capture the current frame as the empty reference.
///
/// # Errors
///
/// Returns `ApiError` if the request fails or the service answers non-2xx.
pub async fn snapshot_empty_state() -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        call(SNAPSHOT_EMPTY_STATE, &[]).await.map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(unavailable(SNAPSHOT_EMPTY_STATE))
    }
}

/// Register a new area with the service.
///
/// # Errors
///
/// Returns `ApiError` if the request fails or the service answers non-2xx.
pub async fn add_area(area: &Area) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        call(ADD_AREA, &area.query_pairs()).await.map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = area;
        Err(unavailable(ADD_AREA))
    }
}

/// Drop every area the service knows about.
///
/// # Errors
///
/// Returns `ApiError` if the request fails or the service answers non-2xx.
pub async fn clear_areas() -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        call(CLEAR_AREAS, &[]).await.map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(unavailable(CLEAR_AREAS))
    }
}

/// Fetch the current occupancy map.
///
/// # Errors
///
/// Returns `ApiError` if the request fails, the service answers non-2xx, or
/// the body is not `{"areas": {name: bool}}`.
pub async fn obscured_areas() -> Result<BTreeMap<String, bool>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = call(OBSCURED_AREAS, &[]).await?;
        let body: super::types::ObscuredAreas =
            resp.json().await.map_err(|e| ApiError::new(OBSCURED_AREAS, e.to_string()))?;
        Ok(body.areas)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(unavailable(OBSCURED_AREAS))
    }
}

/// Fetch every registered area.
///
/// # Errors
///
/// Returns `ApiError` if the request fails, the service answers non-2xx, or
/// the body is not `{"areas": [...]}`.
pub async fn get_areas() -> Result<Vec<Area>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = call(GET_AREAS, &[]).await?;
        let body: super::types::AreaList = resp.json().await.map_err(|e| ApiError::new(GET_AREAS, e.to_string()))?;
        Ok(body.areas)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(unavailable(GET_AREAS))
    }
}

/// Resolve a call result, logging the failure if there is one.
pub fn settle<T>(result: Result<T, ApiError>) -> Option<T> {
    settle_with(result, log_failure)
}

/// Resolve a call result, handing any failure to `on_error` exactly once.
pub fn settle_with<T>(result: Result<T, ApiError>, mut on_error: impl FnMut(&ApiError)) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            on_error(&e);
            None
        }
    }
}

/// The shared failure handler: every failed call is logged here.
pub fn log_failure(err: &ApiError) {
    leptos::logging::error!("{err}");
}

/// Run a call whose success value is not needed, logging any failure.
#[cfg(feature = "hydrate")]
pub fn fire<F>(call: F)
where
    F: std::future::Future<Output = Result<(), ApiError>> + 'static,
{
    leptos::task::spawn_local(async move {
        let _ = settle(call.await);
    });
}
