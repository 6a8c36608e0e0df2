// SPDX-License-Identifier: MPL-2.0
//! Overlay newtypes.
//!
//! Type-safe wrappers for the logo overlay geometry. Every constructor
//! coerces its input into the valid range instead of failing, so callers
//! never have to handle invalid geometry.

// =============================================================================
// Scale Bounds
// =============================================================================

/// Logo scale bounds (0.6x to 3.0x).
pub mod scale_bounds {
    /// Minimum logo scale.
    pub const MIN: f32 = 0.6;
    /// Maximum logo scale.
    pub const MAX: f32 = 3.0;
    /// Scale applied when the detail view opens.
    pub const DEFAULT: f32 = 1.0;
}

use scale_bounds::{DEFAULT as DEFAULT_SCALE, MAX as MAX_SCALE, MIN as MIN_SCALE};

/// Replaces NaN and negative values with zero; positive infinity is kept so
/// that callers can clamp it against an upper bound.
#[must_use]
pub fn non_negative(value: f32) -> f32 {
    if value.is_nan() || value < 0.0 {
        0.0
    } else {
        value
    }
}

/// Clamps `value` into `[0, max]`, mapping NaN to zero.
#[must_use]
pub fn clamp_to_range(value: f32, max: f32) -> f32 {
    non_negative(value).min(non_negative(max))
}

// =============================================================================
// ScaleFactor
// =============================================================================

/// Logo zoom factor, guaranteed to be within `[MIN_SCALE, MAX_SCALE]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleFactor(f32);

impl ScaleFactor {
    /// Creates a new scale factor, clamping the value to the valid range.
    /// NaN yields the default scale.
    #[must_use]
    pub fn new(value: f32) -> Self {
        if value.is_nan() {
            return Self::default();
        }
        Self(value.clamp(MIN_SCALE, MAX_SCALE))
    }

    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Position of this scale within the range, `0.0` at min and `1.0` at max.
    #[must_use]
    pub fn normalized(self) -> f32 {
        ((self.0 - MIN_SCALE) / (MAX_SCALE - MIN_SCALE)).clamp(0.0, 1.0)
    }

    /// Inverse of [`ScaleFactor::normalized`].
    #[must_use]
    pub fn from_normalized(t: f32) -> Self {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        Self::new(MIN_SCALE * (1.0 - t) + MAX_SCALE * t)
    }

    #[must_use]
    pub fn is_min(self) -> bool {
        self.0 <= MIN_SCALE
    }

    #[must_use]
    pub fn is_max(self) -> bool {
        self.0 >= MAX_SCALE
    }
}

impl Default for ScaleFactor {
    fn default() -> Self {
        Self(DEFAULT_SCALE)
    }
}

// =============================================================================
// AspectRatio
// =============================================================================

/// Intrinsic width/height ratio of the overlay asset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AspectRatio(f32);

impl AspectRatio {
    /// Creates a ratio, falling back to square for zero or non-finite input.
    #[must_use]
    pub fn new(ratio: f32) -> Self {
        if ratio.is_finite() && ratio > 0.0 {
            Self(ratio)
        } else {
            Self(1.0)
        }
    }

    /// Ratio of an image with the given pixel dimensions.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn of_dimensions(width: u32, height: u32) -> Self {
        if height == 0 {
            return Self::default();
        }
        Self::new(width as f32 / height as f32)
    }

    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }
}

impl Default for AspectRatio {
    fn default() -> Self {
        Self(1.0)
    }
}

// =============================================================================
// CanvasSize
// =============================================================================

/// Measured size of the composited surface, both dimensions `>= 0`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CanvasSize {
    width: f32,
    height: f32,
}

impl CanvasSize {
    pub const ZERO: Self = Self {
        width: 0.0,
        height: 0.0,
    };

    /// Creates a canvas size, coercing negative and non-finite values to zero.
    #[must_use]
    pub fn new(width: f32, height: f32) -> Self {
        let finite = |v: f32| if v.is_finite() { non_negative(v) } else { 0.0 };
        Self {
            width: finite(width),
            height: finite(height),
        }
    }

    #[must_use]
    pub fn width(self) -> f32 {
        self.width
    }

    #[must_use]
    pub fn height(self) -> f32 {
        self.height
    }

    /// Size in whole pixels, as captured by the rasterizer.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn pixel_dimensions(self) -> (u32, u32) {
        (self.width.round() as u32, self.height.round() as u32)
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        let (w, h) = self.pixel_dimensions();
        w == 0 || h == 0
    }
}

// =============================================================================
// OverlaySize
// =============================================================================

/// Displayed logo size in whole pixels.
///
/// Only obtainable through [`OverlaySize::derive`]; the size is a pure
/// function of the base height, the scale and the asset's aspect ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverlaySize {
    width: u32,
    height: u32,
}

impl OverlaySize {
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn derive(base_height: f32, scale: ScaleFactor, aspect: AspectRatio) -> Self {
        let height = non_negative(base_height) * scale.value();
        let width = height * aspect.value();
        Self {
            width: width.round() as u32,
            height: height.round() as u32,
        }
    }

    #[must_use]
    pub fn width(self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(self) -> u32 {
        self.height
    }
}

// =============================================================================
// OverlayPosition
// =============================================================================

/// Top-left offset of the overlay within the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct OverlayPosition {
    pub x: f32,
    pub y: f32,
}

impl OverlayPosition {
    #[must_use]
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Clamps a requested position so the overlay stays inside the canvas.
    ///
    /// When the overlay is larger than the canvas on an axis, the valid range
    /// on that axis collapses to `0`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn clamped(x: f32, y: f32, canvas: CanvasSize, overlay: OverlaySize) -> Self {
        let max_x = canvas.width() - overlay.width() as f32;
        let max_y = canvas.height() - overlay.height() as f32;
        Self {
            x: clamp_to_range(x, max_x),
            y: clamp_to_range(y, max_y),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scale_factor_clamps_to_range() {
        assert_eq!(ScaleFactor::new(0.1).value(), MIN_SCALE);
        assert_eq!(ScaleFactor::new(10.0).value(), MAX_SCALE);
        assert_eq!(ScaleFactor::new(1.5).value(), 1.5);
        assert!(ScaleFactor::new(f32::NEG_INFINITY).is_min());
        assert!(ScaleFactor::new(f32::INFINITY).is_max());
    }

    #[test]
    fn scale_factor_nan_falls_back_to_default() {
        assert_eq!(ScaleFactor::new(f32::NAN), ScaleFactor::default());
    }

    #[test]
    fn scale_factor_normalized_spans_unit_interval() {
        assert_eq!(ScaleFactor::new(MIN_SCALE).normalized(), 0.0);
        assert_eq!(ScaleFactor::new(MAX_SCALE).normalized(), 1.0);
        assert_eq!(ScaleFactor::from_normalized(1.0).value(), MAX_SCALE);
        assert_eq!(ScaleFactor::from_normalized(-3.0).value(), MIN_SCALE);
    }

    #[test]
    fn aspect_ratio_rejects_degenerate_values() {
        assert_eq!(AspectRatio::new(0.0).value(), 1.0);
        assert_eq!(AspectRatio::new(f32::NAN).value(), 1.0);
        assert_eq!(AspectRatio::of_dimensions(120, 0).value(), 1.0);
        assert_eq!(AspectRatio::of_dimensions(120, 60).value(), 2.0);
    }

    #[test]
    fn canvas_size_coerces_invalid_dimensions() {
        let size = CanvasSize::new(-5.0, f32::NAN);
        assert_eq!(size, CanvasSize::ZERO);
        let size = CanvasSize::new(f32::INFINITY, 10.0);
        assert_eq!(size.width(), 0.0);
        assert_eq!(size.height(), 10.0);
        assert!(size.is_empty());
    }

    #[test]
    fn overlay_size_is_rounded_from_scale_and_ratio() {
        let size = OverlaySize::derive(25.0, ScaleFactor::new(1.0), AspectRatio::new(2.0));
        assert_eq!((size.width(), size.height()), (50, 25));

        let size = OverlaySize::derive(25.0, ScaleFactor::new(1.5), AspectRatio::new(1.25));
        // 37.5 -> 38, 46.875 -> 47
        assert_eq!((size.width(), size.height()), (47, 38));
    }

    #[test]
    fn clamped_position_collapses_when_overlay_is_larger() {
        let canvas = CanvasSize::new(40.0, 20.0);
        let overlay = OverlaySize::derive(25.0, ScaleFactor::new(1.0), AspectRatio::new(2.0));
        let pos = OverlayPosition::clamped(30.0, 30.0, canvas, overlay);
        assert_eq!(pos, OverlayPosition::new(0.0, 0.0));
    }

    #[test]
    fn clamped_position_handles_non_finite_requests() {
        let canvas = CanvasSize::new(340.0, 190.0);
        let overlay = OverlaySize::derive(25.0, ScaleFactor::new(1.0), AspectRatio::new(2.0));
        let pos = OverlayPosition::clamped(f32::INFINITY, f32::NAN, canvas, overlay);
        assert_eq!(pos, OverlayPosition::new(290.0, 0.0));
        let pos = OverlayPosition::clamped(f32::NEG_INFINITY, -1.0, canvas, overlay);
        assert_eq!(pos, OverlayPosition::new(0.0, 0.0));
    }
}
