//! The restricted range slider control.
//!
//! Binds the value model and the tracking state machine together behind a
//! single type with a configuration surface, a pointer-event entry point,
//! and a coalesced draw call. Everything here is a thin delegation layer;
//! the semantics live in [`SliderModel`] and [`TrackingController`].

use crate::{
    Color, ConfigError, GestureEvent, Rectangle, RenderAdapter, SliderFrame, SliderModel,
    SliderStyle, ThumbImage, TrackingController,
};

/// A slider with a restricted interactive sub-range.
///
/// The full track `[minimum_value, maximum_value]` is drawn disabled; the
/// thumb reports `current_value` and can only be dragged within
/// `[lower_value, upper_value]`.
///
/// # Example
///
/// ```
/// use restricted_slider::{GestureEvent, Point, Rectangle, RestrictedRangeSlider};
///
/// let mut slider = RestrictedRangeSlider::new();
/// slider.set_bounds(Rectangle::new(0.0, 0.0, 120.0, 30.0));
/// slider.register_observer(|value| println!("value changed: {value}"));
///
/// let thumb = slider.thumb_rect().center();
/// slider.on_event(&GestureEvent::Began { position: thumb });
/// slider.on_event(&GestureEvent::Moved {
///     position: Point::new(thumb.x + 9.0, thumb.y),
/// });
/// slider.on_event(&GestureEvent::Ended);
/// ```
#[derive(Debug, Default)]
pub struct RestrictedRangeSlider {
    model: SliderModel,
    tracking: TrackingController,
}

impl RestrictedRangeSlider {
    /// Create a slider with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    // Configuration surface

    pub fn minimum_value(&self) -> f32 {
        self.model.minimum_value()
    }

    pub fn maximum_value(&self) -> f32 {
        self.model.maximum_value()
    }

    pub fn lower_value(&self) -> f32 {
        self.model.lower_value()
    }

    pub fn upper_value(&self) -> f32 {
        self.model.upper_value()
    }

    pub fn current_value(&self) -> f32 {
        self.model.current_value()
    }

    pub fn set_minimum(&mut self, value: f32) {
        self.model.set_minimum(value);
    }

    pub fn set_maximum(&mut self, value: f32) {
        self.model.set_maximum(value);
    }

    pub fn set_lower(&mut self, value: f32) {
        self.model.set_lower(value);
    }

    pub fn set_upper(&mut self, value: f32) {
        self.model.set_upper(value);
    }

    pub fn set_current(&mut self, value: f32) {
        self.model.set_current(value);
    }

    pub fn set_bounds(&mut self, bounds: Rectangle) {
        self.model.set_bounds(bounds);
    }

    pub fn bounds(&self) -> Rectangle {
        self.model.bounds()
    }

    pub fn set_style(&mut self, style: SliderStyle) {
        self.model.set_style(style);
    }

    pub fn set_track_tint_color(&mut self, color: Color) {
        let style = self.model.style().clone().track_tint_color(color);
        self.model.set_style(style);
    }

    pub fn set_disabled_tint_color(&mut self, color: Color) {
        let style = self.model.style().clone().disabled_tint_color(color);
        self.model.set_style(style);
    }

    pub fn set_track_height(&mut self, height: f32) {
        let style = self.model.style().clone().track_height(height);
        self.model.set_style(style);
    }

    pub fn set_thumb_image(&mut self, image: Option<ThumbImage>) {
        self.model.set_thumb_image(image);
    }

    /// Register a value-changed observer.
    pub fn register_observer<F>(&mut self, f: F)
    where
        F: Fn(f32) + 'static,
    {
        self.model.register_observer(f);
    }

    /// Validate the configuration. Call once after setup; tracking never
    /// raises errors on its own.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.model.validate()
    }

    /// Read access to the underlying model.
    pub fn model(&self) -> &SliderModel {
        &self.model
    }

    /// The thumb's current on-screen rectangle.
    pub fn thumb_rect(&self) -> Rectangle {
        self.model.thumb_rect()
    }

    /// Whether a drag gesture is in flight.
    pub fn is_tracking(&self) -> bool {
        self.tracking.is_tracking()
    }

    // Input and output

    /// Feed one pointer event to the control.
    ///
    /// Returns true if the control claims the gesture (the event landed in
    /// a tracked drag); a false from `Began` means the host should offer
    /// the gesture elsewhere.
    pub fn on_event(&mut self, event: &GestureEvent) -> bool {
        match event {
            GestureEvent::Began { position } => self.tracking.begin(&self.model, *position),
            GestureEvent::Moved { position } => self.tracking.moved(&mut self.model, *position),
            GestureEvent::Ended => {
                self.tracking.end(&mut self.model);
                false
            }
            GestureEvent::Cancelled => {
                self.tracking.cancel(&mut self.model);
                false
            }
        }
    }

    /// Commit one frame if anything changed since the last commit.
    ///
    /// Any number of mutations within one event turn collapse into a
    /// single `present`. Returns whether a frame was drawn.
    pub fn draw_if_needed(&mut self, adapter: &mut dyn RenderAdapter) -> bool {
        if !self.model.take_needs_redraw() {
            return false;
        }
        SliderFrame::compute(&self.model).present(adapter);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Point;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Default)]
    struct CountingAdapter {
        frames: usize,
    }

    impl RenderAdapter for CountingAdapter {
        fn render_track(
            &mut self,
            _disabled: Rectangle,
            _active: Rectangle,
            _disabled_color: Color,
            _active_color: Color,
        ) {
            self.frames += 1;
        }

        fn render_thumb(&mut self, _bounds: Rectangle, _image: Option<&ThumbImage>) {}
    }

    fn slider_120x30() -> RestrictedRangeSlider {
        let mut slider = RestrictedRangeSlider::new();
        slider.set_bounds(Rectangle::new(0.0, 0.0, 120.0, 30.0));
        let mut adapter = CountingAdapter::default();
        slider.draw_if_needed(&mut adapter);
        slider
    }

    #[test]
    fn test_full_gesture_through_events() {
        let mut slider = slider_120x30();
        let values: Rc<RefCell<Vec<f32>>> = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&values);
        slider.register_observer(move |v| sink.borrow_mut().push(v));

        let thumb = slider.thumb_rect().center();
        assert!(slider.on_event(&GestureEvent::Began { position: thumb }));
        assert!(slider.is_tracking());

        slider.on_event(&GestureEvent::Moved {
            position: Point::new(thumb.x + 9.0, thumb.y),
        });
        slider.on_event(&GestureEvent::Ended);

        assert!(!slider.is_tracking());
        assert!((slider.current_value() - 0.6).abs() < 1e-5);
        // One notification for the move, one final one on end.
        assert_eq!(values.borrow().len(), 2);
    }

    #[test]
    fn test_unclaimed_gesture_leaves_control_untouched() {
        let mut slider = slider_120x30();
        let mut adapter = CountingAdapter::default();

        assert!(!slider.on_event(&GestureEvent::Began {
            position: Point::new(2.0, 2.0),
        }));
        slider.on_event(&GestureEvent::Moved {
            position: Point::new(90.0, 15.0),
        });

        assert_eq!(slider.current_value(), 0.5);
        assert!(!slider.draw_if_needed(&mut adapter));
        assert_eq!(adapter.frames, 0);
    }

    #[test]
    fn test_redraws_coalesce_per_turn() {
        let mut slider = slider_120x30();
        let mut adapter = CountingAdapter::default();

        slider.set_lower(0.3);
        slider.set_upper(0.7);
        slider.set_current(0.5);
        slider.set_track_height(4.0);

        assert!(slider.draw_if_needed(&mut adapter));
        assert!(!slider.draw_if_needed(&mut adapter));
        assert_eq!(adapter.frames, 1);
    }

    #[test]
    fn test_upper_cascade_scenario() {
        // Bounds [0, 1], interval [0.2, 0.8], current 0.5; setting the
        // upper edge to 0.3 clamps current there with one notification.
        let mut slider = slider_120x30();
        let values: Rc<RefCell<Vec<f32>>> = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&values);
        slider.register_observer(move |v| sink.borrow_mut().push(v));

        slider.set_upper(0.3);

        assert_eq!(slider.current_value(), 0.3);
        assert_eq!(*values.borrow(), vec![0.3]);
    }

    #[test]
    fn test_cancel_mid_gesture_settles() {
        let mut slider = slider_120x30();

        let thumb = slider.thumb_rect().center();
        slider.on_event(&GestureEvent::Began { position: thumb });
        slider.on_event(&GestureEvent::Moved {
            position: Point::new(thumb.x - 45.0, thumb.y),
        });
        slider.on_event(&GestureEvent::Cancelled);

        assert!(!slider.is_tracking());
        assert_eq!(slider.current_value(), 0.2);
        assert!(slider.lower_value() <= slider.current_value());
        assert!(slider.current_value() <= slider.upper_value());
    }

    #[test]
    fn test_validate_surfaces_config_errors() {
        let mut slider = slider_120x30();
        assert!(slider.validate().is_ok());
        slider.set_maximum(-1.0);
        assert!(slider.validate().is_err());
    }
}
