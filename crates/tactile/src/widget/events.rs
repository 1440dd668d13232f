//! Input events delivered to widgets.

use tactile_render::Point;

/// Phase of a touch point within a gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TouchPhase {
    /// A finger touched the surface.
    Started,
    /// A finger moved on the surface.
    Moved,
    /// A finger lifted from the surface.
    Ended,
    /// The system cancelled the touch (e.g. a parent took over the gesture).
    Cancelled,
}

/// A single touch point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchPoint {
    /// Platform identifier for the finger, stable for the duration of the touch.
    pub id: u64,
    /// Position in widget-local coordinates.
    pub position: Point,
    /// Phase of this point.
    pub phase: TouchPhase,
}

impl TouchPoint {
    /// Create a touch point.
    pub fn new(id: u64, position: Point, phase: TouchPhase) -> Self {
        Self {
            id,
            position,
            phase,
        }
    }
}

/// A touch event.
///
/// Single-finger widgets only look at the primary point.
#[derive(Debug, Clone, PartialEq)]
pub struct TouchEvent {
    /// Touch points in this event. Never empty.
    points: Vec<TouchPoint>,
}

impl TouchEvent {
    /// Create an event with one touch point.
    pub fn new(point: TouchPoint) -> Self {
        Self {
            points: vec![point],
        }
    }

    /// Create an event for the primary finger at `position`.
    pub fn primary(phase: TouchPhase, position: Point) -> Self {
        Self::new(TouchPoint::new(0, position, phase))
    }

    /// Shorthand for a touch-down at the origin.
    pub fn down() -> Self {
        Self::primary(TouchPhase::Started, Point::ZERO)
    }

    /// Shorthand for a touch-up at the origin.
    pub fn up() -> Self {
        Self::primary(TouchPhase::Ended, Point::ZERO)
    }

    /// Shorthand for a touch-cancel at the origin.
    pub fn cancel() -> Self {
        Self::primary(TouchPhase::Cancelled, Point::ZERO)
    }

    /// All touch points.
    pub fn points(&self) -> &[TouchPoint] {
        &self.points
    }

    /// The first touch point.
    pub fn primary_point(&self) -> &TouchPoint {
        &self.points[0]
    }

    /// Phase of the primary point.
    pub fn phase(&self) -> TouchPhase {
        self.primary_point().phase
    }
}

/// Whether a widget consumed an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResponse {
    /// The widget consumed the event and captures the rest of the gesture.
    Handled,
    /// The event should propagate to the parent.
    Ignored,
}

impl EventResponse {
    /// Check whether the event was handled.
    #[inline]
    pub fn is_handled(self) -> bool {
        matches!(self, Self::Handled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shorthand_events() {
        assert_eq!(TouchEvent::down().phase(), TouchPhase::Started);
        assert_eq!(TouchEvent::up().phase(), TouchPhase::Ended);
        assert_eq!(TouchEvent::cancel().phase(), TouchPhase::Cancelled);
        assert_eq!(TouchEvent::down().points().len(), 1);
    }

    #[test]
    fn test_event_response() {
        assert!(EventResponse::Handled.is_handled());
        assert!(!EventResponse::Ignored.is_handled());
    }
}
