// SPDX-License-Identifier: MPL-2.0
//! Canvas geometry model.
//!
//! Single source of truth for the canvas size, the overlay size and the
//! overlay position. Every mutation re-runs the clamp so the overlay never
//! leaves the canvas.

use crate::domain::overlay::{
    AspectRatio, CanvasSize, OverlayBounds, OverlayPosition, OverlaySize, OverlaySnapshot,
    ScaleFactor,
};

#[derive(Debug, Clone, PartialEq)]
pub struct CanvasGeometry {
    base_height: f32,
    aspect: AspectRatio,
    scale: ScaleFactor,
    canvas: CanvasSize,
    position: OverlayPosition,
    /// Set by the first layout measurement.
    initialized: bool,
}

impl CanvasGeometry {
    /// Creates a model with an unmeasured (zero) canvas.
    #[must_use]
    pub fn new(base_height: f32, aspect: AspectRatio, scale: ScaleFactor) -> Self {
        Self {
            base_height,
            aspect,
            scale,
            canvas: CanvasSize::ZERO,
            position: OverlayPosition::default(),
            initialized: false,
        }
    }

    /// Applies a layout measurement.
    ///
    /// The first measurement centers the overlay. Later ones only pull the
    /// existing position back inside the new bounds.
    pub fn set_canvas_size(&mut self, size: CanvasSize) {
        self.canvas = size;
        let overlay = self.overlay_size();

        if self.initialized {
            self.position =
                OverlayPosition::clamped(self.position.x, self.position.y, size, overlay);
            return;
        }

        self.initialized = true;
        #[allow(clippy::cast_precision_loss)]
        let (x, y) = (
            (size.width() - overlay.width() as f32) / 2.0,
            (size.height() - overlay.height() as f32) / 2.0,
        );
        self.position = OverlayPosition::clamped(x, y, size, overlay);
    }

    /// Changes the zoom, keeping the overlay's center where it was.
    #[allow(clippy::cast_precision_loss)]
    pub fn set_scale(&mut self, scale: ScaleFactor) {
        let previous = self.bounds();
        self.scale = scale;
        let size = self.overlay_size();
        if size == previous.size {
            return;
        }

        let (cx, cy) = previous.center();
        self.position = OverlayPosition::clamped(
            cx - size.width() as f32 / 2.0,
            cy - size.height() as f32 / 2.0,
            self.canvas,
            size,
        );
    }

    /// Stores a requested position after clamping it into bounds.
    pub fn set_position(&mut self, x: f32, y: f32) {
        self.position = OverlayPosition::clamped(x, y, self.canvas, self.overlay_size());
    }

    #[must_use]
    pub fn overlay_size(&self) -> OverlaySize {
        OverlaySize::derive(self.base_height, self.scale, self.aspect)
    }

    /// Current overlay size and position for rendering.
    #[must_use]
    pub fn bounds(&self) -> OverlayBounds {
        OverlayBounds {
            size: self.overlay_size(),
            position: self.position,
        }
    }

    #[must_use]
    pub fn snapshot(&self) -> OverlaySnapshot {
        OverlaySnapshot {
            canvas: self.canvas,
            overlay: self.bounds(),
        }
    }

    #[must_use]
    pub fn canvas(&self) -> CanvasSize {
        self.canvas
    }

    #[must_use]
    pub fn scale(&self) -> ScaleFactor {
        self.scale
    }

    #[must_use]
    pub fn position(&self) -> OverlayPosition {
        self.position
    }

    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    fn geometry() -> CanvasGeometry {
        CanvasGeometry::new(25.0, AspectRatio::new(2.0), ScaleFactor::new(1.0))
    }

    fn assert_within_bounds(g: &CanvasGeometry) {
        let b = g.bounds();
        let max_x = (g.canvas().width() - b.size.width() as f32).max(0.0);
        let max_y = (g.canvas().height() - b.size.height() as f32).max(0.0);
        assert!(b.position.x >= 0.0 && b.position.x <= max_x, "x out of bounds: {b:?}");
        assert!(b.position.y >= 0.0 && b.position.y <= max_y, "y out of bounds: {b:?}");
    }

    #[test]
    fn first_layout_centers_overlay() {
        let mut g = geometry();
        assert!(!g.is_initialized());
        g.set_canvas_size(CanvasSize::new(340.0, 190.0));

        assert!(g.is_initialized());
        assert_eq!(g.position(), OverlayPosition::new(145.0, 82.5));
    }

    #[test]
    fn later_layout_reclamps_without_recentering() {
        let mut g = geometry();
        g.set_canvas_size(CanvasSize::new(340.0, 190.0));
        g.set_position(10.0, 20.0);

        g.set_canvas_size(CanvasSize::new(400.0, 300.0));
        assert_eq!(g.position(), OverlayPosition::new(10.0, 20.0));

        g.set_position(280.0, 150.0);
        g.set_canvas_size(CanvasSize::new(200.0, 100.0));
        assert_eq!(g.position(), OverlayPosition::new(150.0, 75.0));
    }

    #[test]
    fn set_position_clamps_for_many_requests() {
        let canvases = [(340.0, 190.0), (50.0, 25.0), (10.0, 300.0), (0.0, 0.0)];
        let requests = [
            (-50.0, -50.0),
            (0.0, 0.0),
            (145.0, 82.5),
            (1e6, 1e6),
            (f32::NAN, f32::INFINITY),
        ];
        for scale in [0.6, 1.0, 2.2, 3.0] {
            for (w, h) in canvases {
                for (x, y) in requests {
                    let mut g = geometry();
                    g.set_scale(ScaleFactor::new(scale));
                    g.set_canvas_size(CanvasSize::new(w, h));
                    g.set_position(x, y);
                    assert_within_bounds(&g);
                }
            }
        }
    }

    #[test]
    fn zoom_keeps_center_when_bounds_allow() {
        let mut g = geometry();
        g.set_canvas_size(CanvasSize::new(340.0, 190.0));
        g.set_position(100.0, 60.0);
        let before = g.bounds().center();

        g.set_scale(ScaleFactor::new(2.0));
        let after = g.bounds().center();
        assert_abs_diff_eq!(before.0, after.0, epsilon = 1e-4);
        assert_abs_diff_eq!(before.1, after.1, epsilon = 1e-4);
    }

    #[test]
    fn zoom_near_edge_moves_center_minimally() {
        let mut g = geometry();
        g.set_canvas_size(CanvasSize::new(340.0, 190.0));
        g.set_position(0.0, 0.0);

        g.set_scale(ScaleFactor::new(3.0));
        // Unclamped would be (25 - 75, 12.5 - 37.5); the nearest valid spot is the corner.
        assert_eq!(g.position(), OverlayPosition::new(0.0, 0.0));
        assert_within_bounds(&g);
    }

    #[test]
    fn zoom_with_unchanged_rounded_size_keeps_position() {
        let mut g = geometry();
        g.set_canvas_size(CanvasSize::new(340.0, 190.0));
        g.set_position(33.3, 44.4);
        // 25.125 -> 25 and 50.25 -> 50, the same pixel size as scale 1.0
        g.set_scale(ScaleFactor::new(1.005));
        assert_eq!(g.overlay_size().height(), 25);
        assert_eq!(g.position(), OverlayPosition::new(33.3, 44.4));
    }

    #[test]
    fn overlay_larger_than_canvas_pins_to_origin() {
        let mut g = geometry();
        g.set_scale(ScaleFactor::new(3.0));
        g.set_canvas_size(CanvasSize::new(100.0, 50.0));
        assert_eq!(g.position(), OverlayPosition::new(0.0, 0.0));
        g.set_position(20.0, 20.0);
        assert_eq!(g.position(), OverlayPosition::new(0.0, 0.0));
    }

    #[test]
    fn position_before_layout_clamps_to_zero_canvas() {
        let mut g = geometry();
        g.set_position(40.0, 40.0);
        assert_eq!(g.position(), OverlayPosition::new(0.0, 0.0));
    }
}
