// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Overlay**: Logo base height and scale bounds
//! - **Slider**: Vertical scale track geometry
//! - **Canvas**: Reference canvas dimensions
//! - **Export**: Share artifact naming
//! - **API**: Backend endpoint and request defaults

use crate::domain::overlay::scale_bounds;

// ==========================================================================
// Overlay Defaults
// ==========================================================================

/// Displayed logo height at scale 1.0, in device-independent pixels.
pub const DEFAULT_BASE_OVERLAY_HEIGHT: f32 = 25.0;

/// Smallest logo scale the slider can reach.
pub const MIN_SCALE: f32 = scale_bounds::MIN;

/// Largest logo scale the slider can reach.
pub const MAX_SCALE: f32 = scale_bounds::MAX;

/// Scale applied when the detail view opens.
pub const DEFAULT_SCALE: f32 = scale_bounds::DEFAULT;

// ==========================================================================
// Slider Defaults
// ==========================================================================

/// Length of the vertical scale track.
pub const DEFAULT_TRACK_LENGTH: f32 = 160.0;

/// Diameter of the slider knob.
pub const DEFAULT_KNOB_SIZE: f32 = 18.0;

// ==========================================================================
// Canvas Defaults
// ==========================================================================

/// Reference window width the canvas is derived from.
pub const REFERENCE_SCREEN_WIDTH: f32 = 390.0;

/// Horizontal margin around the canvas (left + right).
pub const CANVAS_HORIZONTAL_MARGIN: f32 = 32.0;

/// Canvas height as a fraction of the screen width.
pub const DEFAULT_CANVAS_HEIGHT_RATIO: f32 = 0.56;

// ==========================================================================
// Export Defaults
// ==========================================================================

/// File name used when the artifact is saved to the cache directory.
pub const DEFAULT_SHARE_FILE_NAME: &str = "share.png";

// ==========================================================================
// API Defaults
// ==========================================================================

/// Backend base URL.
pub const DEFAULT_API_BASE_URL: &str = "https://staging.fastor.ai";

/// Dial code sent with phone registration and OTP login.
pub const DEFAULT_DIAL_CODE: &str = "+91";

/// City whose restaurants are listed.
pub const DEFAULT_CITY_ID: u32 = 118;

/// Required OTP length.
pub const OTP_LENGTH: usize = 6;

/// Maximum number of digits accepted for a phone number.
pub const MAX_PHONE_DIGITS: usize = 10;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(DEFAULT_BASE_OVERLAY_HEIGHT > 0.0);
    assert!(MIN_SCALE > 0.0);
    assert!(MAX_SCALE > MIN_SCALE);
    assert!(DEFAULT_SCALE >= MIN_SCALE);
    assert!(DEFAULT_SCALE <= MAX_SCALE);

    assert!(DEFAULT_TRACK_LENGTH > 0.0);
    assert!(DEFAULT_KNOB_SIZE > 0.0);
    assert!(DEFAULT_KNOB_SIZE < DEFAULT_TRACK_LENGTH);

    assert!(REFERENCE_SCREEN_WIDTH > CANVAS_HORIZONTAL_MARGIN);
    assert!(DEFAULT_CANVAS_HEIGHT_RATIO > 0.0);

    assert!(OTP_LENGTH > 0);
    assert!(MAX_PHONE_DIGITS > 0);
};
