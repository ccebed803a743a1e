//! Slider value and geometry state.
//!
//! `SliderModel` is the single source of truth for the control: range
//! bounds, the restricted interval, the current value, the control frame,
//! and appearance. Every mutating setter performs validation, any cascading
//! adjustment, and notification as one step, then marks the model dirty so
//! the next frame commit redraws exactly once.

use crate::{ConfigError, Observers, Point, Rectangle, SliderStyle, ThumbImage};

/// Fixed horizontal inset of the track from the control edges.
pub const TRACK_SIDE_PADDING: f32 = 2.0;

/// Value, interval, and geometry state of the restricted range slider.
#[derive(Debug)]
pub struct SliderModel {
    /// Full range lower bound
    minimum_value: f32,
    /// Full range upper bound
    maximum_value: f32,
    /// Restricted interval lower edge
    lower_value: f32,
    /// Restricted interval upper edge
    upper_value: f32,
    /// The reported value; kept inside [lower, upper] by the setter
    /// cascades and by tracking, but stored verbatim on direct assignment
    current_value: f32,
    /// Control frame; thumb width is derived from its height
    bounds: Rectangle,
    style: SliderStyle,
    thumb_image: Option<ThumbImage>,
    observers: Observers,
    needs_redraw: bool,
}

impl Default for SliderModel {
    fn default() -> Self {
        Self {
            minimum_value: 0.0,
            maximum_value: 1.0,
            lower_value: 0.2,
            upper_value: 0.8,
            current_value: 0.5,
            bounds: Rectangle::default(),
            style: SliderStyle::default(),
            thumb_image: None,
            observers: Observers::new(),
            needs_redraw: true,
        }
    }
}

impl SliderModel {
    /// Create a model with the default configuration:
    /// range [0, 1], interval [0.2, 0.8], current value 0.5.
    pub fn new() -> Self {
        Self::default()
    }

    // Accessors

    pub fn minimum_value(&self) -> f32 {
        self.minimum_value
    }

    pub fn maximum_value(&self) -> f32 {
        self.maximum_value
    }

    pub fn lower_value(&self) -> f32 {
        self.lower_value
    }

    pub fn upper_value(&self) -> f32 {
        self.upper_value
    }

    pub fn current_value(&self) -> f32 {
        self.current_value
    }

    pub fn bounds(&self) -> Rectangle {
        self.bounds
    }

    pub fn style(&self) -> &SliderStyle {
        &self.style
    }

    pub fn thumb_image(&self) -> Option<&ThumbImage> {
        self.thumb_image.as_ref()
    }

    /// The thumb is a square whose side equals the control height.
    pub fn thumb_width(&self) -> f32 {
        self.bounds.height
    }

    // Setters

    /// Update the full range lower bound.
    ///
    /// Does not reclamp the interval or current value; callers changing
    /// bounds after setup are expected to re-assign those themselves.
    pub fn set_minimum(&mut self, value: f32) {
        self.minimum_value = value;
        self.mark_redraw();
    }

    /// Update the full range upper bound. Same laxness as `set_minimum`.
    pub fn set_maximum(&mut self, value: f32) {
        self.maximum_value = value;
        self.mark_redraw();
    }

    /// Set the restricted interval's lower edge.
    ///
    /// Clamped up to `minimum_value`. If the stored edge ends up above
    /// `current_value`, the current value is pushed up to it and one
    /// value-changed notification fires.
    pub fn set_lower(&mut self, value: f32) {
        let clamped = if value < self.minimum_value {
            log::debug!(
                "lower value {} below minimum, clamping to {}",
                value,
                self.minimum_value
            );
            self.minimum_value
        } else {
            value
        };
        self.lower_value = clamped;

        if self.lower_value > self.current_value {
            self.current_value = self.lower_value;
            self.notify_value_changed();
        }
        self.mark_redraw();
    }

    /// Set the restricted interval's upper edge.
    ///
    /// Clamped down to `maximum_value`. If `current_value` ends up above
    /// the stored edge, it is pulled down and one value-changed
    /// notification fires.
    pub fn set_upper(&mut self, value: f32) {
        let clamped = if value > self.maximum_value {
            log::debug!(
                "upper value {} above maximum, clamping to {}",
                value,
                self.maximum_value
            );
            self.maximum_value
        } else {
            value
        };
        self.upper_value = clamped;

        if self.current_value > self.upper_value {
            self.current_value = self.upper_value;
            self.notify_value_changed();
        }
        self.mark_redraw();
    }

    /// Set the current value verbatim.
    ///
    /// No clamping and no notification: keeping the value inside
    /// [lower, upper] is the caller's job (tracking clamps before calling
    /// this; a host assigning directly takes the same responsibility).
    pub fn set_current(&mut self, value: f32) {
        self.current_value = value;
        self.mark_redraw();
    }

    /// Assign the control frame.
    pub fn set_bounds(&mut self, bounds: Rectangle) {
        self.bounds = bounds;
        self.mark_redraw();
    }

    /// Replace the appearance configuration.
    pub fn set_style(&mut self, style: SliderStyle) {
        self.style = style;
        self.mark_redraw();
    }

    /// Set or clear the thumb image.
    pub fn set_thumb_image(&mut self, image: Option<ThumbImage>) {
        self.thumb_image = image;
        self.mark_redraw();
    }

    // Geometry

    /// Map a value to its horizontal thumb-center position, in the
    /// control's local coordinates.
    ///
    /// With a degenerate range (`minimum == maximum`) every value maps to
    /// the left edge of travel instead of propagating NaN into rendering.
    pub fn position_for_value(&self, value: f32) -> f32 {
        let thumb_width = self.thumb_width();
        let left_edge = thumb_width / 2.0 - TRACK_SIDE_PADDING;
        let range = self.maximum_value - self.minimum_value;
        if range.abs() < f32::EPSILON {
            log::warn!("degenerate range (minimum == maximum), pinning thumb to left edge");
            return left_edge;
        }

        let available_width = self.bounds.width + 2.0 * TRACK_SIDE_PADDING - thumb_width;
        available_width * (value - self.minimum_value) / range + left_edge
    }

    /// The thumb's on-screen rectangle: a square of side = control height
    /// centered horizontally at `position_for_value(current_value)`.
    pub fn thumb_rect(&self) -> Rectangle {
        let thumb_width = self.thumb_width();
        let center_x = self.position_for_value(self.current_value);
        Rectangle::new(
            self.bounds.x + center_x - thumb_width / 2.0,
            self.bounds.y,
            thumb_width,
            thumb_width,
        )
    }

    /// Whether a point (in the control's coordinate space) hits the thumb.
    pub fn thumb_contains(&self, point: Point) -> bool {
        self.thumb_rect().contains(point)
    }

    /// Two-sided clamp. `low <= high` required.
    pub fn clamp(value: f32, low: f32, high: f32) -> f32 {
        value.max(low).min(high)
    }

    /// Check the configuration for problems that would make geometry or
    /// drag math undefined. Call after setup, before wiring up input.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.minimum_value > self.maximum_value {
            return Err(ConfigError::InvertedRange {
                minimum: self.minimum_value,
                maximum: self.maximum_value,
            });
        }
        if (self.maximum_value - self.minimum_value).abs() < f32::EPSILON {
            return Err(ConfigError::DegenerateRange {
                value: self.minimum_value,
            });
        }
        if self.bounds.width <= self.bounds.height {
            return Err(ConfigError::NoTravel {
                width: self.bounds.width,
                height: self.bounds.height,
            });
        }
        Ok(())
    }

    // Notifications and redraw

    /// Register a value-changed observer. It receives every notification
    /// from now on, synchronously, with the current value.
    pub fn register_observer<F>(&mut self, f: F)
    where
        F: Fn(f32) + 'static,
    {
        self.observers.register(f);
    }

    /// Dispatch one value-changed notification to all observers.
    pub(crate) fn notify_value_changed(&self) {
        self.observers.notify(self.current_value);
    }

    pub(crate) fn mark_redraw(&mut self) {
        self.needs_redraw = true;
    }

    /// Whether a redraw is pending.
    pub fn needs_redraw(&self) -> bool {
        self.needs_redraw
    }

    /// Consume the pending-redraw flag. Multiple mutations within one
    /// event turn collapse into a single `true` here.
    pub fn take_needs_redraw(&mut self) -> bool {
        std::mem::replace(&mut self.needs_redraw, false)
    }
}
