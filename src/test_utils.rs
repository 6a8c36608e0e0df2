// SPDX-License-Identifier: MPL-2.0
//! Test utilities for float comparisons and other common test helpers.
//!
//! Re-exports the `approx` crate's assertion macro, which handles floating-point
//! precision issues that `assert_eq!` cannot.

pub use approx::assert_abs_diff_eq;

use image_rs::{Rgba, RgbaImage};

/// Default epsilon for f32 comparisons.
pub const F32_EPSILON: f32 = 1e-4;

/// Encodes a solid-colour PNG, for feeding the decoder in tests.
pub fn solid_png(width: u32, height: u32, color: [u8; 4]) -> Vec<u8> {
    let img = RgbaImage::from_pixel(width, height, Rgba(color));
    let mut bytes = Vec::new();
    img.write_to(
        &mut std::io::Cursor::new(&mut bytes),
        image_rs::ImageFormat::Png,
    )
    .expect("encode test png");
    bytes
}
