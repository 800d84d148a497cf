//! Networking modules for the area service.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` wraps the five HTTP calls, `occupancy_poll` drives the periodic
//! occupancy refresh, and `types` defines the wire schema.

pub mod api;
pub mod occupancy_poll;
pub mod types;
