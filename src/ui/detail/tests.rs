// SPDX-License-Identifier: MPL-2.0

use super::*;
use crate::domain::overlay::OverlayPosition;
use crate::test_utils::{assert_abs_diff_eq, F32_EPSILON};

fn measured_state() -> State {
    let mut state = State::new(&Config::default(), AspectRatio::new(2.0));
    state.update(Message::CanvasMeasured(Size::new(340.0, 190.0)));
    state
}

#[test]
fn new_state_uses_configured_initial_scale() {
    let mut config = Config::default();
    config.overlay.initial_scale = 2.0;
    let state = State::new(&config, AspectRatio::new(2.0));

    assert_eq!(state.scale().value(), 2.0);
    assert!(!state.geometry().is_initialized());
    assert!(!state.is_dragging());
}

#[test]
fn measure_zoom_and_drag_scenario() {
    let mut state = measured_state();
    let bounds = state.bounds();
    assert_eq!((bounds.size.width(), bounds.size.height()), (50, 25));
    assert_eq!(bounds.position, OverlayPosition::new(145.0, 82.5));

    state.set_scale(ScaleFactor::new(3.0));
    let bounds = state.bounds();
    assert_eq!((bounds.size.width(), bounds.size.height()), (150, 75));
    assert_eq!(bounds.center(), (170.0, 95.0));
    assert_eq!(bounds.position, OverlayPosition::new(95.0, 57.5));

    state.drag_overlay_by(Vector::new(300.0, 0.0));
    assert_eq!(state.bounds().position, OverlayPosition::new(190.0, 57.5));
}

#[test]
fn slider_press_at_top_jumps_to_max_scale() {
    let mut state = measured_state();
    state.update(SliderMessage::Pressed { y: 0.0 }.into());

    assert!(state.is_slider_pressed());
    assert!(state.scale().is_max());
    assert_eq!(state.bounds().center(), (170.0, 95.0));
}

#[test]
fn slider_moves_track_pointer_until_release() {
    let mut state = measured_state();
    state.update(SliderMessage::Pressed { y: 0.0 }.into());
    state.update(SliderMessage::Moved { y: 160.0 }.into());
    assert!(state.scale().is_min());

    state.update(SliderMessage::Released.into());
    state.update(SliderMessage::Moved { y: 0.0 }.into());
    assert!(state.scale().is_min());
}

#[test]
fn slider_clamps_pointer_beyond_track() {
    let mut state = measured_state();
    state.update(SliderMessage::Pressed { y: -80.0 }.into());
    assert!(state.scale().is_max());
    state.update(SliderMessage::Moved { y: 500.0 }.into());
    assert!(state.scale().is_min());
}

#[test]
fn knob_offset_follows_scale() {
    let mut state = measured_state();
    state.update(SliderMessage::Pressed { y: 40.0 }.into());
    assert_abs_diff_eq!(state.knob_offset(), 31.0, epsilon = F32_EPSILON);
}

#[test]
fn press_outside_overlay_does_not_move_it() {
    let mut state = measured_state();
    state.update(
        CanvasMessage::Pressed {
            position: Point::new(5.0, 5.0),
        }
        .into(),
    );
    state.update(
        CanvasMessage::Moved {
            position: Point::new(200.0, 100.0),
        }
        .into(),
    );

    assert!(!state.is_dragging());
    assert_eq!(state.bounds().position, OverlayPosition::new(145.0, 82.5));
}

#[test]
fn drag_translation_is_relative_to_press_anchor() {
    let mut state = measured_state();
    state.update(
        CanvasMessage::Pressed {
            position: Point::new(150.0, 90.0),
        }
        .into(),
    );
    for step in 1..=10 {
        state.update(
            CanvasMessage::Dragged {
                translation: Vector::new(-step as f32 * 20.0, 0.0),
            }
            .into(),
        );
    }
    assert_eq!(state.bounds().position.x, 0.0);

    state.update(
        CanvasMessage::Dragged {
            translation: Vector::new(-5.0, 0.0),
        }
        .into(),
    );
    assert_eq!(state.bounds().position.x, 140.0);

    state.update(CanvasMessage::Released.into());
    assert!(!state.is_dragging());
}

#[test]
fn remeasure_reclamps_existing_position() {
    let mut state = measured_state();
    state.drag_overlay_by(Vector::new(100.0, 100.0));
    assert_eq!(state.bounds().position, OverlayPosition::new(245.0, 165.0));

    state.update(Message::CanvasMeasured(Size::new(200.0, 100.0)));
    assert_eq!(state.bounds().position, OverlayPosition::new(150.0, 75.0));
}

#[test]
fn share_request_freezes_current_geometry() {
    let mut state = measured_state();
    let snapshot = match state.update(Message::ShareRequested) {
        Event::ShareRequested(snapshot) => snapshot,
        other => panic!("expected share request, got {other:?}"),
    };
    assert_eq!(snapshot, state.snapshot());

    state.drag_overlay_by(Vector::new(10.0, 0.0));
    assert_ne!(snapshot, state.snapshot());
}

#[test]
fn overlay_rectangle_is_pixel_aligned() {
    let state = measured_state();
    let rect = state.overlay_rectangle();
    assert_eq!(rect.x, 145.0);
    assert_eq!(rect.y, 83.0);
    assert_eq!(rect.width, 50.0);
    assert_eq!(rect.height, 25.0);
}
