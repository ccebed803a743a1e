//! Appearance configuration for the slider.

use serde::{Deserialize, Serialize};

use crate::Color;

/// Colors and track sizing for the slider.
///
/// Pure presentation inputs: changing any of these only triggers a redraw,
/// never a value change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SliderStyle {
    /// Color of the interactive (restricted interval) track segment
    pub track_tint_color: Color,
    /// Color of the disabled full-range track behind it
    pub disabled_tint_color: Color,
    /// Height of the track bar
    pub track_height: f32,
}

impl Default for SliderStyle {
    fn default() -> Self {
        Self {
            track_tint_color: Color::rgb(0.16, 0.20, 0.25),
            disabled_tint_color: Color::rgb(0.16, 0.20, 0.25),
            track_height: 2.0,
        }
    }
}

impl SliderStyle {
    /// Create a style with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the interactive track color.
    pub fn track_tint_color(mut self, color: Color) -> Self {
        self.track_tint_color = color;
        self
    }

    /// Set the disabled track color.
    pub fn disabled_tint_color(mut self, color: Color) -> Self {
        self.disabled_tint_color = color;
        self
    }

    /// Set the track bar height.
    pub fn track_height(mut self, height: f32) -> Self {
        self.track_height = height;
        self
    }
}
