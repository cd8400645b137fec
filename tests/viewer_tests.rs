// Session-level checks of the panorama viewer through the public API.

use flik_studio::viewer::{Pan, ViewerState, ZOOM_DEFAULT, ZOOM_MAX, ZOOM_MIN, ZoomDirection};

fn open_viewer() -> ViewerState {
    let mut viewer = ViewerState::new();
    viewer.open();
    viewer
}

#[test]
fn full_session_resets_on_reopen() {
    let mut viewer = open_viewer();
    viewer.pointer_moved(true, 100.0, -50.0);
    viewer.zoom_button(ZoomDirection::In);
    viewer.zoom_button(ZoomDirection::In);
    assert_eq!(viewer.pan(), Pan::new(100.0, -50.0));
    assert!((viewer.zoom() - 1.2).abs() < 1e-5);

    viewer.close();
    viewer.open();

    assert!(viewer.is_open());
    assert_eq!(viewer.pan(), Pan::ZERO);
    assert_eq!(viewer.zoom(), ZOOM_DEFAULT);
}

#[test]
fn zoom_stays_in_range_for_long_input_sequences() {
    let mut viewer = open_viewer();
    // Deterministic pseudo-random mix of wheel and button input.
    let mut seed: u32 = 0x2545_f491;
    for _ in 0..10_000 {
        seed ^= seed << 13;
        seed ^= seed >> 17;
        seed ^= seed << 5;
        match seed % 4 {
            0 => viewer.zoom_button(ZoomDirection::In),
            1 => viewer.zoom_button(ZoomDirection::Out),
            2 => viewer.wheel_zoom(-((seed % 500) as f32)),
            _ => viewer.wheel_zoom((seed % 500) as f32),
        }
        assert!((ZOOM_MIN..=ZOOM_MAX).contains(&viewer.zoom()));
    }
}

#[test]
fn zoom_saturates_at_both_ends() {
    let mut viewer = open_viewer();
    for _ in 0..50 {
        viewer.wheel_zoom(-1.0);
    }
    assert_eq!(viewer.zoom(), ZOOM_MAX);

    for _ in 0..50 {
        viewer.wheel_zoom(1.0);
    }
    assert_eq!(viewer.zoom(), ZOOM_MIN);
}

#[test]
fn opposite_drags_cancel_out() {
    let mut viewer = open_viewer();
    viewer.drag(37.0, 12.0);
    let start = viewer.pan();

    for (dx, dy) in [(250.0, -75.0), (-3.0, 1024.0), (0.5, -0.25)] {
        viewer.drag(dx, dy);
        viewer.drag(-dx, -dy);
        assert_eq!(viewer.pan(), start);
    }
}

#[test]
fn close_discards_vr_mode() {
    let mut viewer = open_viewer();
    viewer.toggle_vr_mode();
    assert!(viewer.is_vr_mode());

    viewer.close();
    viewer.open();
    assert!(!viewer.is_vr_mode());
}
