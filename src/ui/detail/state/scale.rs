// SPDX-License-Identifier: MPL-2.0
//! Vertical scale slider.
//!
//! The track is inverted: the top end maps to the largest scale and the
//! bottom end to the smallest. A press anywhere on the track jumps straight
//! to that position; the knob then follows the pointer until release.

use crate::domain::overlay::ScaleFactor;

/// Maps a pointer offset along the track to a scale.
///
/// A non-positive or non-finite track length is degenerate and always
/// yields the minimum scale.
#[must_use]
pub fn scale_from_gesture_position(y: f32, track_length: f32) -> ScaleFactor {
    if !track_length.is_finite() || track_length <= 0.0 {
        return ScaleFactor::from_normalized(0.0);
    }
    ScaleFactor::from_normalized(1.0 - y / track_length)
}

/// Exact inverse of [`scale_from_gesture_position`], used to place the knob.
#[must_use]
pub fn gesture_position_from_scale(scale: ScaleFactor, track_length: f32) -> f32 {
    if !track_length.is_finite() || track_length <= 0.0 {
        return 0.0;
    }
    (1.0 - scale.normalized()) * track_length
}

/// Press/drag state of the slider.
#[derive(Debug, Clone, PartialEq)]
pub struct ScaleSlider {
    track_length: f32,
    knob_size: f32,
    pressed: bool,
}

impl ScaleSlider {
    #[must_use]
    pub fn new(track_length: f32, knob_size: f32) -> Self {
        Self {
            track_length,
            knob_size,
            pressed: false,
        }
    }

    /// Starts an interaction and returns the scale under the pointer.
    pub fn press(&mut self, y: f32) -> ScaleFactor {
        self.pressed = true;
        self.scale_at(y)
    }

    /// Follows the pointer while pressed; moves without a press are ignored.
    pub fn drag_to(&mut self, y: f32) -> Option<ScaleFactor> {
        self.pressed.then(|| self.scale_at(y))
    }

    pub fn release(&mut self) {
        self.pressed = false;
    }

    #[must_use]
    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    #[must_use]
    pub fn track_length(&self) -> f32 {
        self.track_length
    }

    /// Top offset of the knob for the given scale, kept half a knob past
    /// either end of the track at most.
    #[must_use]
    pub fn knob_offset(&self, scale: ScaleFactor) -> f32 {
        let half = self.knob_size / 2.0;
        let top = gesture_position_from_scale(scale, self.track_length) - half;
        top.clamp(-half, (self.track_length - half).max(-half))
    }

    fn scale_at(&self, y: f32) -> ScaleFactor {
        let y = if y.is_nan() {
            0.0
        } else {
            y.clamp(0.0, self.track_length.max(0.0))
        };
        scale_from_gesture_position(y, self.track_length)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{MAX_SCALE, MIN_SCALE};
    use crate::test_utils::{assert_abs_diff_eq, F32_EPSILON};

    #[test]
    fn track_is_inverted() {
        assert_eq!(scale_from_gesture_position(0.0, 160.0).value(), MAX_SCALE);
        assert_eq!(scale_from_gesture_position(160.0, 160.0).value(), MIN_SCALE);
        assert_abs_diff_eq!(
            scale_from_gesture_position(80.0, 160.0).value(),
            1.8,
            epsilon = F32_EPSILON
        );
    }

    #[test]
    fn positions_outside_track_saturate() {
        assert_eq!(scale_from_gesture_position(-40.0, 160.0).value(), MAX_SCALE);
        assert_eq!(scale_from_gesture_position(900.0, 160.0).value(), MIN_SCALE);
    }

    #[test]
    fn scale_round_trips_through_track_position() {
        for length in [1.0_f32, 37.5, 160.0, 1024.0] {
            for step in 0..=48 {
                let scale = ScaleFactor::new(MIN_SCALE + step as f32 * 0.05);
                let y = gesture_position_from_scale(scale, length);
                let back = scale_from_gesture_position(y, length);
                assert_abs_diff_eq!(back.value(), scale.value(), epsilon = F32_EPSILON);
            }
        }
    }

    #[test]
    fn degenerate_track_maps_to_minimum() {
        assert_eq!(scale_from_gesture_position(10.0, 0.0).value(), MIN_SCALE);
        assert_eq!(scale_from_gesture_position(10.0, f32::NAN).value(), MIN_SCALE);
        assert_eq!(gesture_position_from_scale(ScaleFactor::new(2.0), -5.0), 0.0);
    }

    #[test]
    fn press_jumps_and_drag_tracks_until_release() {
        let mut slider = ScaleSlider::new(160.0, 18.0);
        assert_eq!(slider.drag_to(0.0), None);

        assert_eq!(slider.press(0.0).value(), MAX_SCALE);
        assert!(slider.is_pressed());
        assert_eq!(slider.drag_to(160.0).map(ScaleFactor::value), Some(MIN_SCALE));

        slider.release();
        assert!(!slider.is_pressed());
        assert_eq!(slider.drag_to(80.0), None);
    }

    #[test]
    fn knob_offset_is_centered_on_track_position() {
        let slider = ScaleSlider::new(160.0, 18.0);
        assert_eq!(slider.knob_offset(ScaleFactor::new(MAX_SCALE)), -9.0);
        assert_eq!(slider.knob_offset(ScaleFactor::new(MIN_SCALE)), 151.0);
    }
}
