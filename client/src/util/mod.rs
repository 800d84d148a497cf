//! Shared helpers for coordinate mapping and stream input.
//!
//! SYSTEM CONTEXT
//! ==============
//! `geometry` is pure and tested natively; `stream_input` touches the DOM and
//! only compiles for the browser.

pub mod geometry;
pub mod stream_input;
