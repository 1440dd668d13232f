//! Tactile - a press-and-hold button widget.
//!
//! [`PressHoldButton`](widget::PressHoldButton) draws a colored rectangle with
//! a centered label. A quick touch is a tap. Holding it down shrinks the
//! rectangle and shifts its color; once the hold duration elapses a
//! long-press listener runs, the host pulses haptic feedback and the button
//! springs back.
//!
//! The widget is toolkit-agnostic. It paints onto the
//! [`Renderer`](render::Renderer) trait, takes [`TouchEvent`](widget::TouchEvent)s,
//! asks its [`WidgetHost`](widget::WidgetHost) for redraws and haptics, and
//! reads time from a [`Clock`].
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use std::time::Duration;
//! use tactile::prelude::*;
//!
//! let clock = ManualClock::new();
//! let mut host = HeadlessHost::new();
//! let mut button = PressHoldButton::with_config(PressHoldConfig::default(), Arc::new(clock.clone()));
//! button.set_label("Done");
//!
//! button.handle_touch(&TouchEvent::down());
//! host.run_for(&mut button, &clock, Duration::from_millis(300), Duration::from_millis(16));
//! button.handle_touch(&TouchEvent::up());
//! host.drive_until_idle(&mut button, &clock, Duration::from_millis(16));
//!
//! assert_eq!(button.press_state(), PressState::Idle);
//! assert_eq!(button.scale_factor(), 1.0);
//! assert!(host.haptics().is_empty());
//! ```

pub use tactile_core::*;

/// Geometry, color and drawing surfaces.
pub mod render {
    pub use tactile_render::*;
}

pub mod config;
pub mod host;
pub mod prelude;
pub mod widget;

static_assertions::assert_impl_all!(config::PressHoldConfig: Clone, Send, Sync);
static_assertions::assert_impl_all!(widget::TouchEvent: Clone, Send, Sync);
static_assertions::assert_impl_all!(widget::HapticFeedback: Copy, Send, Sync);
