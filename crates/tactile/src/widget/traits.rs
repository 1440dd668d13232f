//! Widget capability traits.
//!
//! A widget is not a subclass of some platform view. It implements the
//! capabilities it needs:
//!
//! - [`Drawable`] - paints itself through a [`PaintContext`]
//! - [`Touchable`] - reacts to [`TouchEvent`]s
//! - [`Accessible`](super::accessibility::Accessible) - describes itself to assistive technology
//!
//! The host window implements [`WidgetHost`] so widgets can ask for a redraw
//! or a haptic pulse without knowing what toolkit they live in.

use tactile_render::{Rect, Renderer, Size};

use super::events::{EventResponse, TouchEvent};
use super::haptics::HapticFeedback;

/// Rendering context passed to [`Drawable::paint`].
pub struct PaintContext<'a> {
    /// The renderer to draw with.
    renderer: &'a mut dyn Renderer,
    /// The widget's local rectangle (origin always 0,0).
    widget_rect: Rect,
}

impl<'a> PaintContext<'a> {
    /// Create a new paint context.
    pub fn new(renderer: &'a mut dyn Renderer, widget_rect: Rect) -> Self {
        Self {
            renderer,
            widget_rect,
        }
    }

    /// Get the renderer.
    #[inline]
    pub fn renderer(&mut self) -> &mut dyn Renderer {
        self.renderer
    }

    /// Get the widget's local rectangle.
    #[inline]
    pub fn rect(&self) -> Rect {
        self.widget_rect
    }

    /// Get the widget's width.
    #[inline]
    pub fn width(&self) -> f32 {
        self.widget_rect.width()
    }

    /// Get the widget's height.
    #[inline]
    pub fn height(&self) -> f32 {
        self.widget_rect.height()
    }

    /// Get the widget's size.
    #[inline]
    pub fn size(&self) -> Size {
        self.widget_rect.size
    }
}

impl std::fmt::Debug for PaintContext<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PaintContext")
            .field("widget_rect", &self.widget_rect)
            .finish_non_exhaustive()
    }
}

/// A widget that can paint itself.
pub trait Drawable {
    /// Paint the widget.
    ///
    /// Painting only reads widget state; it never advances animations.
    fn paint(&self, ctx: &mut PaintContext<'_>);
}

/// A widget that reacts to touch input.
pub trait Touchable {
    /// Handle a touch event.
    ///
    /// Returning [`EventResponse::Handled`] captures the rest of the gesture.
    fn handle_touch(&mut self, event: &TouchEvent) -> EventResponse;
}

/// Services a host provides to the widgets it contains.
pub trait WidgetHost {
    /// Schedule a repaint of the widget.
    fn request_redraw(&mut self);

    /// Pulse the device's haptic actuator.
    ///
    /// Returns `true` if the platform performed the feedback.
    fn perform_haptic_feedback(&mut self, feedback: HapticFeedback) -> bool;
}
