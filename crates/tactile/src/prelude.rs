//! Common imports for working with Tactile widgets.
//!
//! ```
//! use tactile::prelude::*;
//! ```

pub use tactile_core::{Clock, ManualClock, SharedClock, Signal, SystemClock};
pub use tactile_render::{Color, Point, Rect, RecordingRenderer, Renderer, Size};

pub use crate::config::PressHoldConfig;
pub use crate::host::HeadlessHost;
pub use crate::widget::{
    Accessible, AccessibleAction, AccessibleRole, Drawable, EventResponse, GestureEnd,
    HapticFeedback, LongPressListener, PaintContext, PressHoldButton, PressState, TouchEvent,
    TouchPhase, Touchable, WidgetHost,
};
