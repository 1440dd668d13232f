//! Conversion from winit touch events.
//!
//! ```ignore
//! use tactile::widget::touch::touch_event_from_winit;
//!
//! // Inside a winit `WindowEvent::Touch(touch)` arm:
//! let event = touch_event_from_winit(touch, widget_origin);
//! button.handle_touch(&event);
//! ```

use winit::event::{Touch, TouchPhase as WinitTouchPhase};

use tactile_render::Point;

use super::events::{TouchEvent, TouchPhase, TouchPoint};

/// Converts a winit TouchPhase to a Tactile TouchPhase.
pub fn from_winit_touch_phase(phase: WinitTouchPhase) -> TouchPhase {
    match phase {
        WinitTouchPhase::Started => TouchPhase::Started,
        WinitTouchPhase::Moved => TouchPhase::Moved,
        WinitTouchPhase::Ended => TouchPhase::Ended,
        WinitTouchPhase::Cancelled => TouchPhase::Cancelled,
    }
}

/// Converts a winit touch into a widget-local [`TouchEvent`].
///
/// `widget_origin` is the widget's top-left corner in window coordinates.
pub fn touch_event_from_winit(touch: Touch, widget_origin: Point) -> TouchEvent {
    let position = Point::new(
        touch.location.x as f32 - widget_origin.x,
        touch.location.y as f32 - widget_origin.y,
    );
    TouchEvent::new(TouchPoint::new(
        touch.id,
        position,
        from_winit_touch_phase(touch.phase),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_conversion() {
        assert_eq!(from_winit_touch_phase(WinitTouchPhase::Started), TouchPhase::Started);
        assert_eq!(from_winit_touch_phase(WinitTouchPhase::Moved), TouchPhase::Moved);
        assert_eq!(from_winit_touch_phase(WinitTouchPhase::Ended), TouchPhase::Ended);
        assert_eq!(
            from_winit_touch_phase(WinitTouchPhase::Cancelled),
            TouchPhase::Cancelled
        );
    }
}
