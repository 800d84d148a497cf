//! Browser-side helpers for reading clicks and positions off the stream element.

#[cfg(test)]
#[path = "stream_input_test.rs"]
mod stream_input_test;

use crate::util::geometry::{Point, REFERENCE_RESOLUTION, scale_click};
#[cfg(feature = "hydrate")]
use crate::util::geometry::PageOffset;

pub const AREA_NAME_PROMPT: &str = "What's the name of this area?";

/// Rescale a click offset against the element's client box.
///
/// `offset` is measured from the padding edge, so the size it is scaled
/// against must be the padding box (`clientWidth`/`clientHeight`), not the
/// border box.
#[must_use]
pub fn scale_offset(offset: (i32, i32), client_size: (i32, i32)) -> Option<Point> {
    scale_click(
        f64::from(offset.0),
        f64::from(offset.1),
        f64::from(client_size.0),
        f64::from(client_size.1),
        REFERENCE_RESOLUTION,
    )
}

/// Click position on `element`, rescaled to the reference resolution.
#[cfg(feature = "hydrate")]
pub fn click_point(ev: &leptos::ev::MouseEvent, element: &web_sys::Element) -> Option<Point> {
    scale_offset((ev.offset_x(), ev.offset_y()), (element.client_width(), element.client_height()))
}

/// Document-relative offset of `element`, including page scroll.
#[cfg(feature = "hydrate")]
pub fn page_offset(element: &web_sys::Element) -> PageOffset {
    let rect = element.get_bounding_client_rect();
    let (scroll_x, scroll_y) = web_sys::window()
        .map(|w| (w.scroll_x().unwrap_or(0.0), w.scroll_y().unwrap_or(0.0)))
        .unwrap_or_default();
    PageOffset { left: rect.left() + scroll_x, top: rect.top() + scroll_y }
}

/// Ask the user to name a new area. A cancelled prompt yields an empty name.
#[cfg(feature = "hydrate")]
pub fn prompt_area_name() -> String {
    web_sys::window()
        .and_then(|w| w.prompt_with_message_and_default(AREA_NAME_PROMPT, "").ok())
        .flatten()
        .unwrap_or_default()
}
