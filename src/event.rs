use crate::Point;

/// Pointer gesture events the slider responds to.
///
/// A well-formed gesture is a `Began`, a monotonic sequence of `Moved`, and
/// exactly one of `Ended` or `Cancelled`. All positions are in the same
/// coordinate space as the control's bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureEvent {
    /// Pointer went down.
    Began { position: Point },
    /// Pointer moved while down.
    Moved { position: Point },
    /// Pointer lifted normally.
    Ended,
    /// Gesture was taken over or aborted by the host.
    Cancelled,
}
