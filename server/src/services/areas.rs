//! Area registry service.
//!
//! DESIGN
//! ======
//! Areas are kept in memory in insertion order, which is the order
//! `get_areas` returns them. Duplicate names are stored as separate entries;
//! the client treats a name as a selector, so both stay addressable.
//!
//! ERROR HANDLING
//! ==============
//! Only `add_area` can fail, and only on malformed arguments. Everything
//! else operates on the in-memory registry and is infallible.

#[cfg(test)]
#[path = "areas_test.rs"]
mod areas_test;

use std::collections::BTreeMap;

use serde::Deserialize;
use tracing::info;

use crate::state::AppState;

pub use client::net::types::Area;

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum AreaError {
    #[error("missing argument: {0}")]
    MissingArgument(&'static str),
    #[error("invalid {field}: {value:?}")]
    InvalidCoordinate { field: &'static str, value: String },
}

/// Raw `add_area` query arguments, before validation.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct AddAreaParams {
    pub name: Option<String>,
    pub left: Option<String>,
    pub right: Option<String>,
    pub top: Option<String>,
    pub bottom: Option<String>,
}

impl AddAreaParams {
    /// Validate into an `Area`. The name may be empty; coordinates must be
    /// integers but are not required to be ordered.
    ///
    /// # Errors
    ///
    /// Returns `AreaError` when an argument is missing or a coordinate does
    /// not parse as an integer.
    pub fn into_area(self) -> Result<Area, AreaError> {
        let name = self.name.ok_or(AreaError::MissingArgument("name"))?;
        Ok(Area {
            name,
            left: parse_coordinate("left", self.left)?,
            right: parse_coordinate("right", self.right)?,
            top: parse_coordinate("top", self.top)?,
            bottom: parse_coordinate("bottom", self.bottom)?,
        })
    }
}

fn parse_coordinate(field: &'static str, raw: Option<String>) -> Result<i32, AreaError> {
    let raw = raw.ok_or(AreaError::MissingArgument(field))?;
    raw.trim().parse::<i32>().map_err(|_| AreaError::InvalidCoordinate { field, value: raw })
}

/// In-memory list of registered areas.
#[derive(Debug, Default)]
pub struct AreaRegistry {
    areas: Vec<Area>,
}

impl AreaRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, area: Area) {
        self.areas.push(area);
    }

    #[must_use]
    pub fn areas(&self) -> &[Area] {
        &self.areas
    }

    /// Drop every area. Returns how many were removed.
    pub fn clear(&mut self) -> usize {
        let removed = self.areas.len();
        self.areas.clear();
        removed
    }
}

// =============================================================================
// OPERATIONS
// =============================================================================

/// Validate and register an area.
///
/// # Errors
///
/// Returns `AreaError` if the arguments are malformed; nothing is stored.
pub async fn add_area(state: &AppState, params: AddAreaParams) -> Result<Area, AreaError> {
    let area = params.into_area()?;
    let mut registry = state.areas.write().await;
    registry.add(area.clone());
    info!(name = %area.name, left = area.left, right = area.right, top = area.top, bottom = area.bottom, "area added");
    Ok(area)
}

pub async fn list_areas(state: &AppState) -> Vec<Area> {
    state.areas.read().await.areas().to_vec()
}

pub async fn clear_areas(state: &AppState) -> usize {
    let removed = state.areas.write().await.clear();
    info!(removed, "areas cleared");
    removed
}

/// Occupancy of every registered area, as reported by the detector.
pub async fn obscured_areas(state: &AppState) -> BTreeMap<String, bool> {
    let registry = state.areas.read().await;
    state.detector.obscured(registry.areas())
}

pub fn snapshot_empty_state(state: &AppState) {
    state.detector.request_empty_snapshot();
    info!("empty-state snapshot requested");
}
