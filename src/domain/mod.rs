// SPDX-License-Identifier: MPL-2.0
//! Domain layer: pure value types with no I/O.
//!
//! - [`overlay`]: logo placement ([`ScaleFactor`](overlay::ScaleFactor),
//!   [`AspectRatio`](overlay::AspectRatio), [`OverlayBounds`](overlay::OverlayBounds))

pub mod overlay;
