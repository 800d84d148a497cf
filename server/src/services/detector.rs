//! Occupancy detector seam.
//!
//! DESIGN
//! ======
//! Turning camera frames into "is this area obscured" lives behind the
//! `Detector` trait. The service only ever asks it two things: re-capture the
//! empty reference, and report occupancy for the current areas.
//! `IdleDetector` is the implementation used when no sensor is attached.

#[cfg(test)]
#[path = "detector_test.rs"]
mod detector_test;

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::services::areas::Area;

pub trait Detector: Send + Sync {
    /// Capture the next frame as the empty-lot reference.
    fn request_empty_snapshot(&self);

    /// Occupancy for `areas`, keyed by area name.
    fn obscured(&self, areas: &[Area]) -> BTreeMap<String, bool>;
}

/// Reports every area as free and counts snapshot requests.
#[derive(Debug, Default)]
pub struct IdleDetector {
    snapshot_requests: AtomicU64,
}

impl IdleDetector {
    #[cfg(test)]
    #[must_use]
    pub fn snapshot_requests(&self) -> u64 {
        self.snapshot_requests.load(Ordering::Relaxed)
    }
}

impl Detector for IdleDetector {
    fn request_empty_snapshot(&self) {
        let requests = self.snapshot_requests.fetch_add(1, Ordering::Relaxed) + 1;
        tracing::debug!(requests, "no sensor attached; empty-state snapshot ignored");
    }

    fn obscured(&self, areas: &[Area]) -> BTreeMap<String, bool> {
        areas.iter().map(|a| (a.name.clone(), false)).collect()
    }
}
