use super::*;

#[test]
fn gesture_default_is_idle() {
    assert_eq!(Gesture::default(), Gesture::Idle);
    assert_eq!(Gesture::default().pending(), None);
}

#[test]
fn first_click_is_stored_as_pending() {
    let mut g = Gesture::default();
    assert_eq!(g.click(Point::new(10, 20)), None);
    assert_eq!(g, Gesture::AwaitingSecondClick(Point::new(10, 20)));
    assert_eq!(g.pending(), Some(Point::new(10, 20)));
}

#[test]
fn second_click_completes_in_click_order() {
    let mut g = Gesture::default();
    g.click(Point::new(10, 20));
    let corners = g.click(Point::new(5, 90));
    assert_eq!(corners, Some((Point::new(10, 20), Point::new(5, 90))));
}

#[test]
fn completed_gesture_returns_to_idle() {
    let mut g = Gesture::default();
    g.click(Point::new(1, 1));
    g.click(Point::new(2, 2));
    assert_eq!(g, Gesture::Idle);
    assert_eq!(g.pending(), None);
}

#[test]
fn third_click_starts_a_new_gesture() {
    let mut g = Gesture::default();
    g.click(Point::new(1, 1));
    g.click(Point::new(2, 2));
    assert_eq!(g.click(Point::new(3, 3)), None);
    assert_eq!(g.pending(), Some(Point::new(3, 3)));
    assert_eq!(g.click(Point::new(4, 4)), Some((Point::new(3, 3), Point::new(4, 4))));
}

#[test]
fn same_point_twice_still_completes() {
    let mut g = Gesture::default();
    g.click(Point::new(7, 7));
    assert_eq!(g.click(Point::new(7, 7)), Some((Point::new(7, 7), Point::new(7, 7))));
}
