//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the stream, its overlays and the toolbar while reading
//! and writing the shared `OverlayState` from Leptos context.

pub mod overlay_layer;
pub mod stream_view;
pub mod toolbar;
