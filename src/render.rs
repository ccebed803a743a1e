//! The rendering seam.
//!
//! The core never draws. It computes a `SliderFrame` (rectangles plus
//! colors, all absolute) from the model and hands it to a `RenderAdapter`
//! supplied by the host. The adapter owns paths, textures, and compositing.

use crate::model::TRACK_SIDE_PADDING;
use crate::{Color, Rectangle, SliderModel, ThumbImage};

/// Drawing backend contract consumed by the slider.
///
/// One frame is exactly one `render_track` call followed by one
/// `render_thumb` call.
pub trait RenderAdapter {
    /// Draw the full-range disabled track and the restricted-interval
    /// active track over it.
    fn render_track(
        &mut self,
        disabled: Rectangle,
        active: Rectangle,
        disabled_color: Color,
        active_color: Color,
    );

    /// Draw the thumb within `bounds`. `image` is `None` when no thumb
    /// image is configured; the adapter picks its own fallback.
    fn render_thumb(&mut self, bounds: Rectangle, image: Option<&ThumbImage>);
}

/// An owned snapshot of everything one frame needs.
///
/// Computed from the model in one shot so that a single commit covers any
/// number of mutations that happened since the last one.
#[derive(Debug, Clone)]
pub struct SliderFrame {
    pub disabled_rect: Rectangle,
    pub active_rect: Rectangle,
    pub thumb_rect: Rectangle,
    pub disabled_color: Color,
    pub active_color: Color,
    pub thumb_image: Option<ThumbImage>,
}

impl SliderFrame {
    /// Compute the frame geometry for the model's current state.
    pub fn compute(model: &SliderModel) -> Self {
        let bounds = model.bounds();
        let style = model.style();

        // The track occupies the middle third of the control, with the
        // bar itself centered inside it.
        let track_layer = bounds.inset_by(0.0, bounds.height / 3.0);
        let bar_y = track_layer.y + track_layer.height / 2.0 - style.track_height / 2.0;
        let disabled_rect = Rectangle::new(
            bounds.x + TRACK_SIDE_PADDING,
            bar_y,
            (bounds.width - 2.0 * TRACK_SIDE_PADDING).max(0.0),
            style.track_height,
        );

        // When the interval edge sits on the range bound, the active
        // segment snaps to the track edge instead of the computed thumb
        // center, so the bar visually reaches all the way.
        let lower_position = if model.lower_value() == model.minimum_value() {
            TRACK_SIDE_PADDING
        } else {
            model.position_for_value(model.lower_value())
        };
        let upper_position = if model.upper_value() == model.maximum_value() {
            bounds.width - TRACK_SIDE_PADDING
        } else {
            model.position_for_value(model.upper_value())
        };
        let active_rect = Rectangle::new(
            bounds.x + lower_position,
            bar_y,
            (upper_position - lower_position).max(0.0),
            style.track_height,
        );

        Self {
            disabled_rect,
            active_rect,
            thumb_rect: model.thumb_rect(),
            disabled_color: style.disabled_tint_color,
            active_color: style.track_tint_color,
            thumb_image: model.thumb_image().cloned(),
        }
    }

    /// Commit this frame to the adapter: track first, thumb on top.
    pub fn present(&self, adapter: &mut dyn RenderAdapter) {
        adapter.render_track(
            self.disabled_rect,
            self.active_rect,
            self.disabled_color,
            self.active_color,
        );
        adapter.render_thumb(self.thumb_rect, self.thumb_image.as_ref());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct RecordingAdapter {
        tracks: Vec<(Rectangle, Rectangle)>,
        thumbs: Vec<Rectangle>,
    }

    impl RenderAdapter for RecordingAdapter {
        fn render_track(
            &mut self,
            disabled: Rectangle,
            active: Rectangle,
            _disabled_color: Color,
            _active_color: Color,
        ) {
            self.tracks.push((disabled, active));
        }

        fn render_thumb(&mut self, bounds: Rectangle, _image: Option<&ThumbImage>) {
            self.thumbs.push(bounds);
        }
    }

    fn model_120x30() -> SliderModel {
        let mut model = SliderModel::new();
        model.set_bounds(Rectangle::new(0.0, 0.0, 120.0, 30.0));
        model
    }

    #[test]
    fn test_disabled_rect_spans_padded_width() {
        let frame = SliderFrame::compute(&model_120x30());
        assert_eq!(frame.disabled_rect, Rectangle::new(2.0, 14.0, 116.0, 2.0));
    }

    #[test]
    fn test_active_rect_between_interval_positions() {
        let model = model_120x30();
        let frame = SliderFrame::compute(&model);

        let lower = model.position_for_value(0.2);
        let upper = model.position_for_value(0.8);
        assert_eq!(frame.active_rect.x, lower);
        assert!((frame.active_rect.width - (upper - lower)).abs() < 1e-4);
        assert_eq!(frame.active_rect.y, frame.disabled_rect.y);
    }

    #[test]
    fn test_interval_at_range_bounds_snaps_to_track_edges() {
        let mut model = model_120x30();
        model.set_lower(0.0);
        model.set_upper(1.0);
        let frame = SliderFrame::compute(&model);
        assert_eq!(frame.active_rect.x, 2.0);
        assert_eq!(frame.active_rect.width, 116.0);
    }

    #[test]
    fn test_inverted_interval_yields_zero_width_not_negative() {
        let mut model = model_120x30();
        // Hosts can misconfigure lower > upper; geometry must stay sane.
        model.set_upper(0.3);
        model.set_lower(0.6);
        let frame = SliderFrame::compute(&model);
        assert!(frame.active_rect.width >= 0.0);
    }

    #[test]
    fn test_present_draws_track_then_thumb_once() {
        let model = model_120x30();
        let mut adapter = RecordingAdapter::default();
        SliderFrame::compute(&model).present(&mut adapter);
        assert_eq!(adapter.tracks.len(), 1);
        assert_eq!(adapter.thumbs.len(), 1);
        assert_eq!(adapter.thumbs[0], model.thumb_rect());
    }

    #[test]
    fn test_frame_carries_style_colors() {
        let mut model = model_120x30();
        model.set_style(
            crate::SliderStyle::new()
                .track_tint_color(Color::rgb(0.1, 0.2, 0.3))
                .disabled_tint_color(Color::rgb(0.4, 0.5, 0.6)),
        );
        let frame = SliderFrame::compute(&model);
        assert_eq!(frame.active_color, Color::rgb(0.1, 0.2, 0.3));
        assert_eq!(frame.disabled_color, Color::rgb(0.4, 0.5, 0.6));
    }
}
