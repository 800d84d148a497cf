//! Overlay store: the areas drawn over the stream and their occupancy.
//!
//! DESIGN
//! ======
//! Overlays are keyed by area name the same way a `[data-area-name="..."]`
//! selector would match them: duplicate names are kept as separate overlays
//! and an occupancy update touches every overlay with that name. Names the
//! store has never seen are ignored.
//!
//! Poll results carry a `PollTicket`. A result is applied only when its
//! ticket is newer than the last applied one, so a slow response can never
//! overwrite a fresher one.

#[cfg(test)]
#[path = "overlay_test.rs"]
mod overlay_test;

use std::collections::BTreeMap;

use crate::net::api::{ApiError, settle_with};
use crate::net::types::Area;
use crate::state::gesture::Gesture;
use crate::util::geometry::{OverlayBox, PageOffset, Point, area_from_corners};

pub const AREA_CLASS: &str = "parking-area";
pub const BUSY_CLASS: &str = "parking-busy";
pub const FREE_CLASS: &str = "parking-free";

/// Presentation state of one overlay.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Occupancy {
    /// No poll has mentioned this area yet.
    #[default]
    Unknown,
    Busy,
    Free,
}

impl Occupancy {
    #[must_use]
    pub fn from_obscured(is_obscured: bool) -> Self {
        if is_obscured { Self::Busy } else { Self::Free }
    }

    #[must_use]
    pub fn class(self) -> Option<&'static str> {
        match self {
            Self::Unknown => None,
            Self::Busy => Some(BUSY_CLASS),
            Self::Free => Some(FREE_CLASS),
        }
    }
}

/// One rendered area.
#[derive(Clone, Debug, PartialEq)]
pub struct Overlay {
    pub id: u64,
    pub area: Area,
    /// Stream page offset captured when the overlay was created.
    pub origin: PageOffset,
    pub occupancy: Occupancy,
}

impl Overlay {
    #[must_use]
    pub fn class_list(&self) -> String {
        match self.occupancy.class() {
            Some(state) => format!("{AREA_CLASS} {state}"),
            None => AREA_CLASS.to_owned(),
        }
    }

    #[must_use]
    pub fn placement(&self) -> OverlayBox {
        OverlayBox::place(&self.area, self.origin)
    }

    #[must_use]
    pub fn style(&self) -> String {
        self.placement().to_style()
    }
}

/// Sequence number stamped on each occupancy poll when it starts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct PollTicket(u64);

/// What happened to a finished poll.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PollOutcome {
    /// Applied; carries the number of overlays whose entry was present.
    Applied(usize),
    /// A newer poll already landed.
    Stale,
}

#[derive(Clone, Debug, Default)]
pub struct OverlayState {
    pub overlays: Vec<Overlay>,
    pub gesture: Gesture,
    next_overlay_id: u64,
    next_ticket: u64,
    last_applied: Option<PollTicket>,
}

impl OverlayState {
    /// Render `area` as a new overlay positioned relative to `origin`.
    pub fn place(&mut self, area: Area, origin: PageOffset) -> u64 {
        let id = self.next_overlay_id;
        self.next_overlay_id += 1;
        self.overlays.push(Overlay { id, area, origin, occupancy: Occupancy::Unknown });
        id
    }

    /// Render every area from the initial `get_areas` load.
    pub fn load(&mut self, areas: Vec<Area>, origin: PageOffset) -> usize {
        let count = areas.len();
        for area in areas {
            self.place(area, origin);
        }
        count
    }

    /// Feed a stream click into the gesture.
    ///
    /// When the click completes a rectangle, `name` is asked for the area's
    /// name, the overlay is drawn at once and the area to submit is returned.
    pub fn click(&mut self, point: Point, origin: PageOffset, name: impl FnOnce() -> String) -> Option<Area> {
        let (first, second) = self.gesture.click(point)?;
        let area = area_from_corners(name(), first, second);
        self.place(area.clone(), origin);
        Some(area)
    }

    /// Remove every overlay. Returns how many were removed.
    pub fn clear(&mut self) -> usize {
        let removed = self.overlays.len();
        self.overlays.clear();
        removed
    }

    #[must_use]
    pub fn get(&self, id: u64) -> Option<&Overlay> {
        self.overlays.iter().find(|o| o.id == id)
    }

    pub fn named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Overlay> + 'a {
        self.overlays.iter().filter(move |o| o.area.name == name)
    }

    pub fn begin_poll(&mut self) -> PollTicket {
        self.next_ticket += 1;
        PollTicket(self.next_ticket)
    }

    /// Apply the occupancy map returned for `ticket`, unless a newer poll
    /// already landed.
    pub fn finish_poll(&mut self, ticket: PollTicket, areas: &BTreeMap<String, bool>) -> PollOutcome {
        if self.last_applied.is_some_and(|last| ticket <= last) {
            return PollOutcome::Stale;
        }
        self.last_applied = Some(ticket);
        PollOutcome::Applied(self.apply_occupancy(areas))
    }

    /// Settle the response for `ticket`. A failure goes to `on_error` once and
    /// leaves the store untouched, including the last applied ticket.
    pub fn complete_poll(
        &mut self,
        ticket: PollTicket,
        result: Result<BTreeMap<String, bool>, ApiError>,
        on_error: impl FnMut(&ApiError),
    ) -> Option<PollOutcome> {
        let areas = settle_with(result, on_error)?;
        Some(self.finish_poll(ticket, &areas))
    }

    fn apply_occupancy(&mut self, areas: &BTreeMap<String, bool>) -> usize {
        let mut touched = 0;
        for overlay in &mut self.overlays {
            if let Some(&is_obscured) = areas.get(&overlay.area.name) {
                overlay.occupancy = Occupancy::from_obscured(is_obscured);
                touched += 1;
            }
        }
        touched
    }
}
