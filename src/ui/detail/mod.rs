// SPDX-License-Identifier: MPL-2.0
//! Restaurant detail screen: logo placement on the restaurant photo.
//!
//! This module follows the "state down, messages up" pattern. Pointer and
//! layout messages mutate a single [`CanvasGeometry`]; the only side effect
//! surfaced to the parent is [`Event::ShareRequested`], which carries a frozen
//! [`OverlaySnapshot`] for the export pipeline.

mod messages;
pub mod state;

#[cfg(test)]
mod tests;

use crate::config::Config;
use crate::domain::overlay::{
    AspectRatio, CanvasSize, OverlayBounds, OverlaySnapshot, ScaleFactor,
};
use iced_core::{Point, Rectangle, Size, Vector};

pub use messages::{CanvasMessage, Event, Message, SliderMessage};
pub use state::{CanvasGeometry, OverlayDrag, ScaleSlider};

/// Local UI state for the detail screen.
#[derive(Debug, Clone)]
pub struct State {
    geometry: CanvasGeometry,
    slider: ScaleSlider,
    drag: OverlayDrag,
}

impl State {
    /// Creates the screen state for a logo with the given aspect ratio.
    #[must_use]
    pub fn new(config: &Config, aspect: AspectRatio) -> Self {
        Self {
            geometry: CanvasGeometry::new(
                config.overlay.base_height,
                aspect,
                ScaleFactor::new(config.overlay.initial_scale),
            ),
            slider: ScaleSlider::new(config.slider.track_length, config.slider.knob_size),
            drag: OverlayDrag::default(),
        }
    }

    /// Update the state and emit an [`Event`] for the parent when needed.
    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::CanvasMeasured(size) => {
                self.geometry
                    .set_canvas_size(CanvasSize::new(size.width, size.height));
                Event::None
            }
            Message::Canvas(msg) => {
                self.handle_canvas_message(msg);
                Event::None
            }
            Message::Slider(msg) => {
                self.handle_slider_message(msg);
                Event::None
            }
            Message::ShareRequested => {
                let snapshot = self.geometry.snapshot();
                tracing::debug!(?snapshot, "share requested");
                Event::ShareRequested(snapshot)
            }
        }
    }

    fn handle_canvas_message(&mut self, message: CanvasMessage) {
        match message {
            CanvasMessage::Pressed { position } => {
                let bounds = self.geometry.bounds();
                self.drag.begin(position, &bounds);
            }
            CanvasMessage::Moved { position } => {
                if let Some((x, y)) = self.drag.candidate(position) {
                    self.geometry.set_position(x, y);
                }
            }
            CanvasMessage::Dragged { translation } => {
                if let Some((x, y)) = self.drag.candidate_from_translation(translation) {
                    self.geometry.set_position(x, y);
                }
            }
            CanvasMessage::Released => self.drag.end(),
        }
    }

    fn handle_slider_message(&mut self, message: SliderMessage) {
        match message {
            SliderMessage::Pressed { y } => {
                let scale = self.slider.press(y);
                self.geometry.set_scale(scale);
            }
            SliderMessage::Moved { y } => {
                if let Some(scale) = self.slider.drag_to(y) {
                    self.geometry.set_scale(scale);
                }
            }
            SliderMessage::Released => self.slider.release(),
        }
    }

    /// Sets the zoom directly, bypassing the slider gesture.
    pub fn set_scale(&mut self, scale: ScaleFactor) {
        self.geometry.set_scale(scale);
    }

    /// Convenience for scripted input: press at the overlay center, move by
    /// `delta`, release.
    pub fn drag_overlay_by(&mut self, delta: Vector) {
        let (cx, cy) = self.geometry.bounds().center();
        let start = Point::new(cx, cy);
        self.update(CanvasMessage::Pressed { position: start }.into());
        self.update(
            CanvasMessage::Moved {
                position: start + delta,
            }
            .into(),
        );
        self.update(CanvasMessage::Released.into());
    }

    #[must_use]
    pub fn bounds(&self) -> OverlayBounds {
        self.geometry.bounds()
    }

    #[must_use]
    pub fn snapshot(&self) -> OverlaySnapshot {
        self.geometry.snapshot()
    }

    #[must_use]
    pub fn scale(&self) -> ScaleFactor {
        self.geometry.scale()
    }

    #[must_use]
    pub fn geometry(&self) -> &CanvasGeometry {
        &self.geometry
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    #[must_use]
    pub fn is_slider_pressed(&self) -> bool {
        self.slider.is_pressed()
    }

    /// Top offset of the slider knob within its track.
    #[must_use]
    pub fn knob_offset(&self) -> f32 {
        self.slider.knob_offset(self.geometry.scale())
    }

    /// Overlay rectangle in canvas coordinates, rounded to whole pixels.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn overlay_rectangle(&self) -> Rectangle {
        let bounds = self.geometry.bounds();
        let (x, y) = bounds.pixel_origin();
        Rectangle::new(
            Point::new(x as f32, y as f32),
            Size::new(bounds.size.width() as f32, bounds.size.height() as f32),
        )
    }
}
