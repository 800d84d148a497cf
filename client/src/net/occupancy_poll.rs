//! Fixed-cadence occupancy polling.
//!
//! DESIGN
//! ======
//! A single cooperative task sleeps `POLL_INTERVAL` between ticks and starts
//! one `obscured_areas` request per tick without waiting for the previous
//! one, so the cadence does not drift with server latency. Each request is
//! stamped with a `PollTicket`; `OverlayState::complete_poll` logs failures
//! and drops results that arrive after a newer one.
//!
//! Cancelling the `PollHandle` stops the loop at its next tick and discards
//! any response still in flight.

#[cfg(test)]
#[path = "occupancy_poll_test.rs"]
mod occupancy_poll_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use crate::state::overlay::PollOutcome;

pub const POLL_INTERVAL: Duration = Duration::from_millis(500);

/// Whether a settled poll changed anything the overlay layer renders.
#[must_use]
pub fn redraws(outcome: Option<PollOutcome>) -> bool {
    matches!(outcome, Some(PollOutcome::Applied(_)))
}

/// Cancellation token shared between the poll loop and its owner.
#[derive(Clone, Debug)]
pub struct PollHandle {
    alive: Arc<AtomicBool>,
}

impl PollHandle {
    #[must_use]
    pub fn new() -> Self {
        Self { alive: Arc::new(AtomicBool::new(true)) }
    }

    pub fn cancel(&self) {
        self.alive.store(false, Ordering::Relaxed);
    }

    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.alive.load(Ordering::Relaxed)
    }
}

impl Default for PollHandle {
    fn default() -> Self {
        Self::new()
    }
}

/// Spawn the poll loop against `overlay`. The loop runs until the returned
/// handle is cancelled or the signal is disposed.
#[cfg(feature = "hydrate")]
pub fn spawn_occupancy_poll(overlay: leptos::prelude::RwSignal<crate::state::overlay::OverlayState>) -> PollHandle {
    use leptos::prelude::{Update, UpdateUntracked};

    use crate::net::api;
    use crate::state::overlay::OverlayState;

    let handle = PollHandle::new();
    let loop_handle = handle.clone();

    leptos::task::spawn_local(async move {
        loop {
            gloo_timers::future::sleep(POLL_INTERVAL).await;
            if !loop_handle.is_alive() {
                break;
            }
            // The ticket counter is not rendered; bumping it must not redraw the overlays.
            let Some(ticket) = overlay.try_update_untracked(OverlayState::begin_poll) else {
                break;
            };

            let request_handle = loop_handle.clone();
            leptos::task::spawn_local(async move {
                let result = api::obscured_areas().await;
                if !request_handle.is_alive() {
                    return;
                }
                let outcome = overlay
                    .try_maybe_update(|s| {
                        let outcome = s.complete_poll(ticket, result, api::log_failure);
                        (redraws(outcome), outcome)
                    })
                    .flatten();
                if let Some(PollOutcome::Stale) = outcome {
                    log::debug!("dropped stale occupancy poll {ticket:?}");
                }
            });
        }
    });

    handle
}
