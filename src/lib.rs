//! restricted_slider - a range-and-value slider control
//!
//! A dual-purpose slider: a restricted interactive sub-range
//! `[lower_value, upper_value]` drawn over a full disabled track, plus a
//! single draggable thumb reporting `current_value`, constrained to that
//! sub-range.
//!
//! The crate is the value/geometry model and the touch-tracking state
//! machine; actual drawing is delegated to a host-provided
//! [`RenderAdapter`], and value changes are republished through a plain
//! observer list.

mod color;
mod error;
mod event;
mod geometry;
mod image;
mod model;
mod observer;
mod render;
mod slider;
mod style;
mod tracking;

pub use color::Color;
pub use error::ConfigError;
pub use event::GestureEvent;
pub use geometry::{Point, Rectangle, Size};
pub use image::ThumbImage;
pub use model::{SliderModel, TRACK_SIDE_PADDING};
pub use observer::{Observers, ValueObserver};
pub use render::{RenderAdapter, SliderFrame};
pub use slider::RestrictedRangeSlider;
pub use style::SliderStyle;
pub use tracking::TrackingController;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::color::Color;
    pub use crate::event::GestureEvent;
    pub use crate::geometry::{Point, Rectangle, Size};
    pub use crate::image::ThumbImage;
    pub use crate::render::{RenderAdapter, SliderFrame};
    pub use crate::slider::RestrictedRangeSlider;
    pub use crate::style::SliderStyle;
}
