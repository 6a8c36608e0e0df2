// SPDX-License-Identifier: MPL-2.0
//! Canvas rasterizer.
//!
//! Flattens the base image and the logo into one RGBA buffer the size of the
//! canvas. The base image is cover-fit (scaled to fill, center-cropped); the
//! logo is contain-fit inside its overlay box. Slider chrome is never drawn.

use crate::domain::overlay::OverlaySnapshot;
use crate::error::{Error, Result};
use image_rs::imageops::{self, FilterType};
use image_rs::{ImageFormat, RgbaImage};
use std::io::Cursor;

/// Renders the canvas exactly as displayed for `snapshot`.
pub fn render(base: &RgbaImage, logo: &RgbaImage, snapshot: &OverlaySnapshot) -> Result<RgbaImage> {
    if snapshot.canvas.is_empty() {
        return Err(Error::Capture("canvas has not been laid out".to_string()));
    }
    let (width, height) = snapshot.canvas.pixel_dimensions();
    let mut canvas = cover(base, width, height)?;

    let size = snapshot.overlay.size;
    if let Some(fitted) = contain(logo, size.width(), size.height()) {
        let (x, y) = snapshot.overlay.pixel_origin();
        let inset_x = i64::from((size.width() - fitted.width()) / 2);
        let inset_y = i64::from((size.height() - fitted.height()) / 2);
        imageops::overlay(&mut canvas, &fitted, x + inset_x, y + inset_y);
    }
    Ok(canvas)
}

/// Encodes the rendered canvas as PNG.
pub fn encode_png(image: &RgbaImage) -> Result<Vec<u8>> {
    let mut bytes = Vec::new();
    image.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
    Ok(bytes)
}

#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
fn cover(base: &RgbaImage, width: u32, height: u32) -> Result<RgbaImage> {
    let (bw, bh) = base.dimensions();
    if bw == 0 || bh == 0 {
        return Err(Error::Capture("base image is empty".to_string()));
    }
    let factor = (width as f32 / bw as f32).max(height as f32 / bh as f32);
    let scaled_w = ((bw as f32 * factor).ceil() as u32).max(width);
    let scaled_h = ((bh as f32 * factor).ceil() as u32).max(height);

    let scaled = imageops::resize(base, scaled_w, scaled_h, FilterType::Triangle);
    let x = (scaled_w - width) / 2;
    let y = (scaled_h - height) / 2;
    Ok(imageops::crop_imm(&scaled, x, y, width, height).to_image())
}

/// Largest aspect-preserving fit of `logo` inside `width x height`.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
fn contain(logo: &RgbaImage, width: u32, height: u32) -> Option<RgbaImage> {
    let (lw, lh) = logo.dimensions();
    if width == 0 || height == 0 || lw == 0 || lh == 0 {
        return None;
    }
    let factor = (width as f32 / lw as f32).min(height as f32 / lh as f32);
    let fit_w = ((lw as f32 * factor).round() as u32).clamp(1, width);
    let fit_h = ((lh as f32 * factor).round() as u32).clamp(1, height);
    Some(imageops::resize(logo, fit_w, fit_h, FilterType::Triangle))
}
