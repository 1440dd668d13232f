//! Widget system for Tactile.
//!
//! Widgets are plain structs that implement capability traits instead of
//! inheriting from a base view:
//!
//! - [`Drawable`] paints through a [`PaintContext`]
//! - [`Touchable`] consumes [`TouchEvent`]s
//! - [`Accessible`] reports role, name and actions
//!
//! They talk back to their host through [`WidgetHost`] and keep their
//! animations as [`animation::Interpolation`] data sampled on each tick.

pub mod accessibility;
pub mod animation;
mod events;
mod haptics;
#[cfg(feature = "winit")]
pub mod touch;
mod traits;
pub mod widgets;

pub use accessibility::{Accessible, AccessibleAction, AccessibleRole};
pub use events::{EventResponse, TouchEvent, TouchPhase, TouchPoint};
pub use haptics::HapticFeedback;
pub use traits::{Drawable, PaintContext, Touchable, WidgetHost};
pub use widgets::{GestureEnd, LongPressListener, PressHoldButton, PressState};
