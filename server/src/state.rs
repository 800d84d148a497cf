//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! It holds the area registry and the occupancy detector. The registry is
//! the only mutable shared data and sits behind a `tokio` `RwLock`.

#[cfg(test)]
#[path = "state_test.rs"]
mod state_test;

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::services::areas::AreaRegistry;
use crate::services::detector::Detector;

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum; all inner fields are Arc-wrapped or Clone.
#[derive(Clone)]
pub struct AppState {
    pub areas: Arc<RwLock<AreaRegistry>>,
    pub detector: Arc<dyn Detector>,
    pub stream_url: Option<String>,
}

impl AppState {
    #[must_use]
    pub fn new(detector: Arc<dyn Detector>, stream_url: Option<String>) -> Self {
        Self { areas: Arc::new(RwLock::new(AreaRegistry::new())), detector, stream_url }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================
