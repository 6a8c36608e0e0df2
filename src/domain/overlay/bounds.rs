// SPDX-License-Identifier: MPL-2.0
//! Overlay placement read model.
//!
//! [`OverlayBounds`] is what renderers consume; [`OverlaySnapshot`] freezes the
//! whole canvas state so an export can run without touching live state.

use super::newtypes::{CanvasSize, OverlayPosition, OverlaySize};

/// Current size and position of the overlay.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlayBounds {
    pub size: OverlaySize,
    pub position: OverlayPosition,
}

impl OverlayBounds {
    /// Geometric center of the overlay.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn center(&self) -> (f32, f32) {
        (
            self.position.x + self.size.width() as f32 / 2.0,
            self.position.y + self.size.height() as f32 / 2.0,
        )
    }

    /// Whether `(x, y)` falls inside the overlay's bounding box.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.position.x
            && y >= self.position.y
            && x <= self.position.x + self.size.width() as f32
            && y <= self.position.y + self.size.height() as f32
    }

    /// Position rounded to whole pixels, as drawn by the rasterizer.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn pixel_origin(&self) -> (i64, i64) {
        (
            self.position.x.round() as i64,
            self.position.y.round() as i64,
        )
    }
}

/// Immutable copy of everything the rasterizer needs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlaySnapshot {
    pub canvas: CanvasSize,
    pub overlay: OverlayBounds,
}
