use super::*;

#[test]
fn bordered_stream_scales_against_client_box() {
    // A 640x480 image with a 2px border has a 644x484 border box.
    assert_eq!(scale_offset((639, 479), (640, 480)), Some(Point::new(639, 479)));
    assert_ne!(scale_offset((639, 479), (644, 484)), Some(Point::new(639, 479)));
}

#[test]
fn half_size_client_box_doubles_click() {
    assert_eq!(scale_offset((160, 120), (320, 240)), Some(Point::new(320, 240)));
}

#[test]
fn collapsed_client_box_ignores_click() {
    assert_eq!(scale_offset((10, 10), (0, 480)), None);
    assert_eq!(scale_offset((10, 10), (640, 0)), None);
}
