// SPDX-License-Identifier: MPL-2.0
//! Detail-screen sub-state: canvas geometry, scale slider and overlay drag.

pub mod drag;
pub mod geometry;
pub mod scale;

pub use drag::OverlayDrag;
pub use geometry::CanvasGeometry;
pub use scale::{gesture_position_from_scale, scale_from_gesture_position, ScaleSlider};
