//! Touch-tracking state machine.
//!
//! Two states: idle and tracking. A gesture is claimed only when it starts
//! on the thumb; from then on horizontal pointer deltas are translated into
//! value deltas and pushed through the model, clamped to the restricted
//! interval, until the gesture ends or is cancelled.

use crate::{Point, SliderModel};

/// Translates pointer events into model mutations.
///
/// The controller holds no reference to the model; the event entry points
/// borrow it per call, so the host decides where both live.
#[derive(Debug, Default)]
pub struct TrackingController {
    /// Pointer position at the previous event of the active gesture
    previous_location: Point,
    /// True while a claimed gesture is in flight
    highlighted: bool,
}

impl TrackingController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a gesture is currently being tracked.
    pub fn is_tracking(&self) -> bool {
        self.highlighted
    }

    /// Gesture began. Claims the gesture (and returns true) only if the
    /// start point lies within the thumb's on-screen rectangle.
    pub fn begin(&mut self, model: &SliderModel, location: Point) -> bool {
        self.previous_location = location;

        if model.thumb_contains(location) {
            self.highlighted = true;
            log::debug!("tracking began at ({}, {})", location.x, location.y);
        }

        self.highlighted
    }

    /// Pointer moved. Ignored while idle; while tracking, applies the
    /// value delta and emits one value-changed notification, even when the
    /// clamped value did not move.
    pub fn moved(&mut self, model: &mut SliderModel, location: Point) -> bool {
        if !self.highlighted {
            return false;
        }

        let delta_pixels = location.x - self.previous_location.x;
        self.previous_location = location;

        // Usable travel is the control width minus the thumb width (which
        // equals the control height). Zero travel means zero movement, not
        // a division by zero.
        let travel = model.bounds().width - model.bounds().height;
        let delta_value = if travel.abs() < f32::EPSILON {
            0.0
        } else {
            (model.maximum_value() - model.minimum_value()) * delta_pixels / travel
        };

        let next = SliderModel::clamp(
            model.current_value() + delta_value,
            model.lower_value(),
            model.upper_value(),
        );
        log::trace!(
            "tracking moved: delta_pixels={} delta_value={} next={}",
            delta_pixels,
            delta_value,
            next
        );
        model.set_current(next);
        model.notify_value_changed();

        true
    }

    /// Gesture ended. Clears the highlight and emits one final
    /// notification. A no-op while idle.
    pub fn end(&mut self, model: &mut SliderModel) {
        self.finish(model, "ended")
    }

    /// Gesture cancelled by the host. Identical in effect to `end`; any
    /// in-flight delta is simply discarded.
    pub fn cancel(&mut self, model: &mut SliderModel) {
        self.finish(model, "cancelled")
    }

    fn finish(&mut self, model: &mut SliderModel, reason: &str) {
        if !self.highlighted {
            return;
        }
        self.highlighted = false;
        log::debug!("tracking {} at value {}", reason, model.current_value());
        model.mark_redraw();
        model.notify_value_changed();
    }
}
