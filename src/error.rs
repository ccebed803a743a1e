use thiserror::Error;

/// Configuration problems detectable at setup time.
///
/// None of these are raised during tracking; malformed bounds are a
/// precondition violation the host should catch before wiring up input.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// `minimum_value` is greater than `maximum_value`.
    #[error("inverted range: minimum {minimum} > maximum {maximum}")]
    InvertedRange { minimum: f32, maximum: f32 },

    /// `minimum_value == maximum_value`: every value maps to the same
    /// position and drag deltas are meaningless.
    #[error("degenerate range: minimum == maximum == {value}")]
    DegenerateRange { value: f32 },

    /// The control is as tall as it is wide (or taller), leaving the thumb
    /// zero horizontal travel.
    #[error("no usable travel: width {width} <= height {height}")]
    NoTravel { width: f32, height: f32 },
}
