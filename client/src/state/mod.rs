//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `gesture` is the two-click state machine; `overlay` owns the rendered
//! areas, their occupancy and poll sequencing. Both are plain data so they
//! can be tested without a browser.

pub mod gesture;
pub mod overlay;
