#[cfg(test)]
#[path = "gesture_test.rs"]
mod gesture_test;

use crate::util::geometry::Point;

/// Two-click region-definition gesture.
///
/// A half-finished gesture has no timeout and stays pending until the next
/// click on the stream.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Gesture {
    #[default]
    Idle,
    AwaitingSecondClick(Point),
}

impl Gesture {
    /// Feed one click into the gesture.
    ///
    /// The first click is stored and yields `None`. The second yields both
    /// corners in click order and returns the gesture to `Idle`.
    pub fn click(&mut self, point: Point) -> Option<(Point, Point)> {
        match std::mem::take(self) {
            Self::Idle => {
                *self = Self::AwaitingSecondClick(point);
                None
            }
            Self::AwaitingSecondClick(first) => Some((first, point)),
        }
    }

    #[must_use]
    pub fn pending(&self) -> Option<Point> {
        match self {
            Self::Idle => None,
            Self::AwaitingSecondClick(p) => Some(*p),
        }
    }
}
