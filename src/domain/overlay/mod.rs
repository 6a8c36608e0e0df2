// SPDX-License-Identifier: MPL-2.0
//! Overlay domain types.
//!
//! Value objects describing where the logo sits on the restaurant photo:
//! - [`ScaleFactor`]: Bounded logo zoom
//! - [`CanvasSize`], [`OverlaySize`], [`OverlayPosition`]: Canvas geometry
//! - [`AspectRatio`]: Intrinsic ratio of the logo asset
//! - [`OverlayBounds`], [`OverlaySnapshot`]: Read models for rendering and export

pub mod bounds;
pub mod newtypes;

pub use bounds::{OverlayBounds, OverlaySnapshot};
pub use newtypes::{
    scale_bounds, AspectRatio, CanvasSize, OverlayPosition, OverlaySize, ScaleFactor,
};
