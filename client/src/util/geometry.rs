//! Coordinate mapping between the rendered stream and the reference resolution.
//!
//! DESIGN
//! ======
//! Area geometry travels over the wire in a fixed 640x480 space regardless of
//! how large the stream element is drawn. Clicks are rescaled into that space;
//! overlays are positioned from the stream's page offset plus the raw
//! reference coordinates.

#[cfg(test)]
#[path = "geometry_test.rs"]
mod geometry_test;

use crate::net::types::Area;

/// Fixed coordinate space the area service expects geometry in.
pub const REFERENCE_RESOLUTION: Resolution = Resolution { width: 640, height: 480 };

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Resolution {
    pub width: u32,
    pub height: u32,
}

/// A click position in reference-resolution pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    #[must_use]
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Document-relative position of the stream element's top-left corner.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PageOffset {
    pub left: f64,
    pub top: f64,
}

/// Rescale a click offset inside the rendered stream onto `resolution`,
/// truncating toward zero.
///
/// Returns `None` when the element has no rendered area, since no finite
/// coordinate exists in that case.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn scale_click(
    offset_x: f64,
    offset_y: f64,
    rendered_width: f64,
    rendered_height: f64,
    resolution: Resolution,
) -> Option<Point> {
    if !(rendered_width > 0.0 && rendered_height > 0.0) {
        return None;
    }
    let x = (offset_x / rendered_width) * f64::from(resolution.width);
    let y = (offset_y / rendered_height) * f64::from(resolution.height);
    if !x.is_finite() || !y.is_finite() {
        return None;
    }
    Some(Point::new(x.trunc() as i32, y.trunc() as i32))
}

/// Build the wire rectangle for a completed two-click gesture.
///
/// Corners are taken in click order: the first click supplies `left`/`top`
/// and the second `right`/`bottom`, unsorted.
#[must_use]
pub fn area_from_corners(name: impl Into<String>, first: Point, second: Point) -> Area {
    Area { name: name.into(), left: first.x, right: second.x, top: first.y, bottom: second.y }
}

/// Absolute on-page box for one overlay element.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OverlayBox {
    pub left: f64,
    pub top: f64,
    pub width: i32,
    pub height: i32,
}

impl OverlayBox {
    /// Place `area` relative to `origin`.
    ///
    /// Drawn from the min/max of each axis so a gesture made bottom-right
    /// first still renders with a non-negative size.
    #[must_use]
    pub fn place(area: &Area, origin: PageOffset) -> Self {
        let (min_x, max_x) = ordered(area.left, area.right);
        let (min_y, max_y) = ordered(area.top, area.bottom);
        Self {
            left: origin.left + f64::from(min_x),
            top: origin.top + f64::from(min_y),
            width: max_x - min_x,
            height: max_y - min_y,
        }
    }

    /// Inline CSS for the overlay `div`.
    #[must_use]
    pub fn to_style(self) -> String {
        format!(
            "position: absolute; top: {}px; left: {}px; height: {}px; width: {}px;",
            self.top, self.left, self.height, self.width
        )
    }
}

fn ordered(a: i32, b: i32) -> (i32, i32) {
    if a <= b { (a, b) } else { (b, a) }
}
