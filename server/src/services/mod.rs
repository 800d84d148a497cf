//! Domain services used by HTTP routes.
//!
//! ARCHITECTURE
//! ============
//! Service modules own the area registry and the detector seam so route
//! handlers can stay focused on query parsing and response shapes.

pub mod areas;
pub mod detector;
