// SPDX-License-Identifier: MPL-2.0
//! Image handling for the detail screen.
//!
//! - [`image`] - base image decode and placeholder fallback
//! - [`assets`] - bundled logo and placeholder
//! - [`export`] - rasterize, encode and deliver the composited canvas

pub mod assets;
pub mod export;
pub mod image;

pub use export::{ExportOutcome, ExportPipeline};
pub use image::{BaseImage, ImageSource};
