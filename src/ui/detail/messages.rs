// SPDX-License-Identifier: MPL-2.0
//! Detail-screen message/event types re-exported by the facade.

use crate::domain::overlay::OverlaySnapshot;
use iced_core::{Point, Size, Vector};

/// Pointer messages for the composited canvas.
#[derive(Debug, Clone, PartialEq)]
pub enum CanvasMessage {
    /// Pointer pressed; a press outside the overlay is ignored.
    Pressed { position: Point },
    /// Pointer moved to an absolute canvas position.
    Moved { position: Point },
    /// Total translation since the press, for sources that report deltas.
    Dragged { translation: Vector },
    Released,
}

/// Pointer messages for the vertical scale track, in track coordinates.
#[derive(Debug, Clone, PartialEq)]
pub enum SliderMessage {
    Pressed { y: f32 },
    Moved { y: f32 },
    Released,
}

/// Messages emitted by the detail-screen widgets.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// Layout measured the canvas.
    CanvasMeasured(Size),
    Canvas(CanvasMessage),
    Slider(SliderMessage),
    ShareRequested,
}

impl From<CanvasMessage> for Message {
    fn from(message: CanvasMessage) -> Self {
        Message::Canvas(message)
    }
}

impl From<SliderMessage> for Message {
    fn from(message: SliderMessage) -> Self {
        Message::Slider(message)
    }
}

/// Events propagated to the parent for side effects.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    None,
    /// Export the frozen canvas state.
    ShareRequested(OverlaySnapshot),
}
