// SPDX-License-Identifier: MPL-2.0
//! Overlay drag state.
//!
//! Candidates are always computed from the anchor captured at press time plus
//! the cumulative pointer delta, so clamping during the gesture never makes
//! the overlay lag behind the pointer.

use crate::domain::overlay::{OverlayBounds, OverlayPosition};
use iced_core::{Point, Vector};

#[derive(Debug, Clone, Copy, PartialEq)]
struct Anchor {
    origin: OverlayPosition,
    start: Point,
}

/// Manages grab-and-drag state for the overlay.
#[derive(Debug, Clone, Default)]
pub struct OverlayDrag {
    anchor: Option<Anchor>,
}

impl OverlayDrag {
    /// Starts a drag if `pointer` lies within the overlay.
    ///
    /// Returns `false` (and leaves the state idle) for presses outside it.
    pub fn begin(&mut self, pointer: Point, bounds: &OverlayBounds) -> bool {
        if !bounds.contains(pointer.x, pointer.y) {
            return false;
        }
        self.anchor = Some(Anchor {
            origin: bounds.position,
            start: pointer,
        });
        true
    }

    /// Unclamped position for the current pointer location.
    #[must_use]
    pub fn candidate(&self, pointer: Point) -> Option<(f32, f32)> {
        let anchor = self.anchor?;
        Some(Self::offset(anchor.origin, pointer - anchor.start))
    }

    /// Same as [`OverlayDrag::candidate`] for sources that report the total
    /// translation since the press instead of absolute pointer positions.
    #[must_use]
    pub fn candidate_from_translation(&self, translation: Vector) -> Option<(f32, f32)> {
        let anchor = self.anchor?;
        Some(Self::offset(anchor.origin, translation))
    }

    pub fn end(&mut self) {
        self.anchor = None;
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.anchor.is_some()
    }

    fn offset(origin: OverlayPosition, delta: Vector) -> (f32, f32) {
        (origin.x + delta.x, origin.y + delta.y)
    }
}
