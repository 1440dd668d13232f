//! A button that distinguishes a tap from a long hold.
//!
//! While the finger is down the button shrinks and its fill shifts toward an
//! alert color. If the finger stays down for the whole hold duration the
//! long-press listener runs once, the host pulses its haptic actuator, and the
//! button animates back to rest. Lifting early just animates back.
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
//! button.set_label("Hold me");
//!
//! button.set_long_press_listener(Some(Box::new(|| println!("long press"))));
//!
//! button.handle_touch(&TouchEvent::down());
//! host.run_for(&mut button, &clock, Duration::from_millis(2100), Duration::from_millis(16));
//!
//! assert_eq!(button.press_state(), PressState::LongPressFired);
//! assert_eq!(host.haptics(), &[HapticFeedback::LongPress]);
//! ```

use std::sync::Arc;
use std::time::{Duration, Instant};

use tactile_core::logging::{span_names, targets};
use tactile_core::{PerfSpan, SharedClock, Signal, SystemClock, TimerId, TimerManager};
use tactile_render::{Color, Rect, TextStyle};

use crate::config::PressHoldConfig;
use crate::widget::accessibility::{Accessible, AccessibleAction, AccessibleRole};
use crate::widget::animation::{AnimationSlot, Direction, Interpolation};
use crate::widget::events::{EventResponse, TouchEvent, TouchPhase};
use crate::widget::haptics::HapticFeedback;
use crate::widget::traits::{Drawable, PaintContext, Touchable, WidgetHost};

/// Receiver for completed long-presses.
///
/// Implemented for every `FnMut()` closure, so most callers pass a closure.
pub trait LongPressListener {
    /// Called once when a hold reaches the long-press duration.
    fn on_long_press(&mut self);
}

impl<F: FnMut()> LongPressListener for F {
    fn on_long_press(&mut self) {
        self()
    }
}

/// Where the button is in a press gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PressState {
    /// No finger down.
    #[default]
    Idle,
    /// Finger down, hold duration not yet reached.
    Pressing,
    /// Finger still down, long-press already delivered.
    LongPressFired,
}

/// How a gesture ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GestureEnd {
    /// The finger lifted.
    Released,
    /// The system took the gesture away.
    Cancelled,
}

/// A press-and-hold button.
///
/// The button owns its animations and hold timer as data. Nothing moves until
/// the host calls [`advance`](Self::advance), which fires an expired hold
/// timer, samples the running interpolations and requests a redraw when the
/// appearance changed. Hosts schedule the next call with
/// [`next_wakeup`](Self::next_wakeup).
///
/// # Signals
///
/// - `pressed()`: a finger went down
/// - `released()`: the gesture ended (lift or cancel)
/// - `tapped()`: the finger lifted before the hold duration
/// - `long_pressed()`: the hold duration elapsed
/// - `label_changed(String)`: the label text changed
pub struct PressHoldButton {
    label: String,
    state: PressState,
    scale: f32,
    fill_color: Color,
    listener: Option<Box<dyn LongPressListener>>,
    timers: TimerManager,
    hold_timer: Option<TimerId>,
    scale_animation: AnimationSlot<f32>,
    color_animation: AnimationSlot<Color>,
    config: PressHoldConfig,
    clock: SharedClock,
    bounds: Rect,
    redraw_pending: bool,

    /// Emitted when a finger goes down.
    pub pressed: Signal<()>,
    /// Emitted when a gesture ends, whether by lift or cancel.
    pub released: Signal<()>,
    /// Emitted when the finger lifts before the hold duration elapses.
    pub tapped: Signal<()>,
    /// Emitted when the hold duration elapses.
    pub long_pressed: Signal<()>,
    /// Emitted with the new text when the label changes.
    pub label_changed: Signal<String>,
}

impl PressHoldButton {
    /// Create a button with the default configuration and the system clock.
    pub fn new(label: impl Into<String>) -> Self {
        let mut button = Self::with_config(PressHoldConfig::default(), Arc::new(SystemClock));
        button.label = label.into();
        button
    }

    /// Create a button from a configuration and a shared clock.
    pub fn with_config(config: PressHoldConfig, clock: SharedClock) -> Self {
        Self {
            label: String::new(),
            state: PressState::Idle,
            scale: 1.0,
            fill_color: config.base_color,
            listener: None,
            timers: TimerManager::new(),
            hold_timer: None,
            scale_animation: AnimationSlot::new(),
            color_animation: AnimationSlot::new(),
            config,
            clock,
            bounds: Rect::ZERO,
            redraw_pending: false,
            pressed: Signal::new(),
            released: Signal::new(),
            tapped: Signal::new(),
            long_pressed: Signal::new(),
            label_changed: Signal::new(),
        }
    }

    // =========================================================================
    // Properties
    // =========================================================================

    /// The label text.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Replace the label text.
    ///
    /// The new text is drawn on the next paint and becomes the accessible name.
    pub fn set_label(&mut self, text: impl Into<String>) {
        let text = text.into();
        self.redraw_pending = true;
        if self.label == text {
            return;
        }
        tracing::debug!(target: targets::WIDGET, label = %text, "label changed");
        self.label = text;
        self.label_changed.emit(self.label.clone());
    }

    /// Register or clear the long-press listener.
    ///
    /// Only one listener is kept; registering replaces the previous one.
    pub fn set_long_press_listener(&mut self, listener: Option<Box<dyn LongPressListener>>) {
        self.listener = listener;
    }

    /// Check whether a long-press listener is registered.
    pub fn has_long_press_listener(&self) -> bool {
        self.listener.is_some()
    }

    /// The widget's rectangle in its parent.
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Set the widget's rectangle in its parent.
    pub fn set_bounds(&mut self, bounds: Rect) {
        if self.bounds != bounds {
            self.bounds = bounds;
            self.redraw_pending = true;
        }
    }

    /// The widget's rectangle in its own coordinates.
    pub fn local_rect(&self) -> Rect {
        Rect::new(0.0, 0.0, self.bounds.width(), self.bounds.height())
    }

    /// The configuration the button was built with.
    pub fn config(&self) -> &PressHoldConfig {
        &self.config
    }

    /// Current gesture state.
    pub fn press_state(&self) -> PressState {
        self.state
    }

    /// Current shrink factor, 1.0 at rest.
    pub fn scale_factor(&self) -> f32 {
        self.scale
    }

    /// Current fill color.
    pub fn fill_color(&self) -> Color {
        self.fill_color
    }

    /// How long a hold must last to count as a long-press.
    pub fn hold_duration(&self) -> Duration {
        self.config.hold_duration()
    }

    /// Length of the return-to-rest animation.
    pub fn reset_duration(&self) -> Duration {
        self.config.reset_duration()
    }

    /// Check whether a scale or color animation is running.
    pub fn is_animating(&self) -> bool {
        self.scale_animation.is_running() || self.color_animation.is_running()
    }

    /// Check whether the hold timer is armed.
    pub fn is_hold_timer_armed(&self) -> bool {
        self.hold_timer.is_some_and(|id| self.timers.is_active(id))
    }

    /// The earliest instant at which [`advance`](Self::advance) has work to do.
    ///
    /// Running animations and pending redraws want the next frame, so they
    /// report the current instant. Otherwise the armed hold timer's deadline.
    /// `None` means the button is idle.
    pub fn next_wakeup(&self) -> Option<Instant> {
        if self.redraw_pending || self.is_animating() {
            return Some(self.clock.now());
        }
        self.hold_timer.and_then(|id| self.timers.deadline(id))
    }

    // =========================================================================
    // Gesture handling
    // =========================================================================

    /// A finger went down on the button.
    ///
    /// Restarts the press animations from the current appearance and arms the
    /// hold timer.
    pub fn on_touch_down(&mut self) -> EventResponse {
        let now = self.clock.now();
        self.sync_animations(now);

        self.scale_animation.cancel();
        self.color_animation.cancel();
        self.cancel_hold_timer();

        let hold = self.config.hold_duration();
        self.scale_animation.start(
            Interpolation::new(
                self.scale,
                self.config.pressed_scale,
                now,
                hold,
                Direction::TowardPressed,
            )
            .with_easing(self.config.easing),
        );
        self.color_animation.start(
            Interpolation::new(
                self.fill_color,
                self.config.alert_color,
                now,
                hold,
                Direction::TowardPressed,
            )
            .with_easing(self.config.easing),
        );

        let id = self.timers.start_one_shot(now, hold);
        self.hold_timer = Some(id);
        self.state = PressState::Pressing;

        tracing::debug!(
            target: targets::WIDGET,
            hold_ms = hold.as_millis() as u64,
            from_scale = self.scale,
            "press started, hold timer armed"
        );

        self.pressed.emit(());
        EventResponse::Handled
    }

    /// The finger lifted.
    pub fn on_touch_up(&mut self) -> EventResponse {
        self.on_touch_up_or_cancel(GestureEnd::Released)
    }

    /// The system cancelled the gesture.
    pub fn on_touch_cancel(&mut self) -> EventResponse {
        self.on_touch_up_or_cancel(GestureEnd::Cancelled)
    }

    /// The gesture ended.
    ///
    /// Disarms the hold timer, drops the press animations and animates back to
    /// rest over the reset duration, starting from the current appearance. A
    /// lift that comes before the long-press is reported through `tapped`.
    pub fn on_touch_up_or_cancel(&mut self, end: GestureEnd) -> EventResponse {
        let now = self.clock.now();
        self.sync_animations(now);
        self.cancel_hold_timer();

        let was_tap = end == GestureEnd::Released && self.state == PressState::Pressing;
        self.state = PressState::Idle;
        self.start_reset(now);

        tracing::debug!(target: targets::WIDGET, ?end, was_tap, "press ended");

        if was_tap {
            self.tapped.emit(());
        }
        self.released.emit(());
        EventResponse::Handled
    }

    // =========================================================================
    // Ticking
    // =========================================================================

    /// Run everything that is due at the clock's current instant.
    ///
    /// Fires an expired hold timer, samples the running animations and asks
    /// the host for a redraw when the appearance changed. Returns `true` if a
    /// redraw was requested.
    pub fn advance(&mut self, host: &mut dyn WidgetHost) -> bool {
        let _span = PerfSpan::new(span_names::WIDGET_TICK);
        let now = self.clock.now();

        for id in self.timers.process_expired(now) {
            if self.hold_timer == Some(id) {
                self.hold_timer = None;
                self.on_hold_elapsed(now, host);
            }
        }

        self.sync_animations(now);

        if std::mem::take(&mut self.redraw_pending) {
            host.request_redraw();
            true
        } else {
            false
        }
    }

    fn on_hold_elapsed(&mut self, now: Instant, host: &mut dyn WidgetHost) {
        if self.state != PressState::Pressing {
            tracing::trace!(target: targets::WIDGET, state = ?self.state, "hold timer fired outside a press");
            return;
        }

        self.sync_animations(now);
        self.state = PressState::LongPressFired;
        tracing::debug!(target: targets::WIDGET, "long press fired");

        if let Some(listener) = self.listener.as_mut() {
            listener.on_long_press();
        }

        let performed = host.perform_haptic_feedback(HapticFeedback::LongPress);
        tracing::debug!(
            target: targets::WIDGET,
            feedback = %HapticFeedback::LongPress,
            performed,
            "haptic feedback requested"
        );

        self.start_reset(now);
        self.long_pressed.emit(());
    }

    /// Replace any press animation with a return to rest.
    fn start_reset(&mut self, now: Instant) {
        self.scale_animation.cancel_direction(Direction::TowardPressed);
        self.color_animation.cancel_direction(Direction::TowardPressed);

        let reset = self.config.reset_duration();
        self.scale_animation.start(
            Interpolation::new(self.scale, 1.0, now, reset, Direction::TowardIdle)
                .with_easing(self.config.easing),
        );
        self.color_animation.start(
            Interpolation::new(
                self.fill_color,
                self.config.base_color,
                now,
                reset,
                Direction::TowardIdle,
            )
            .with_easing(self.config.easing),
        );
    }

    /// Sample both animations at `now`, marking a redraw if anything moved.
    fn sync_animations(&mut self, now: Instant) {
        let scale_changed = self.scale_animation.tick(now, &mut self.scale);
        let color_changed = self.color_animation.tick(now, &mut self.fill_color);
        if scale_changed || color_changed {
            tracing::trace!(
                target: targets::ANIMATION,
                scale = self.scale,
                color = %self.fill_color.to_hex(),
                "animation tick"
            );
            self.redraw_pending = true;
        }
    }

    fn cancel_hold_timer(&mut self) {
        let Some(id) = self.hold_timer.take() else {
            return;
        };
        match self.timers.stop(id) {
            Ok(()) => tracing::debug!(target: targets::WIDGET, "hold timer cancelled"),
            Err(err) => tracing::trace!(target: targets::WIDGET, %err, "hold timer already gone"),
        }
    }
}

impl Default for PressHoldButton {
    fn default() -> Self {
        Self::new(String::new())
    }
}

impl std::fmt::Debug for PressHoldButton {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PressHoldButton")
            .field("label", &self.label)
            .field("state", &self.state)
            .field("scale", &self.scale)
            .field("fill_color", &self.fill_color)
            .field("has_listener", &self.listener.is_some())
            .field("hold_timer", &self.hold_timer)
            .field("bounds", &self.bounds)
            .finish_non_exhaustive()
    }
}

impl Drawable for PressHoldButton {
    fn paint(&self, ctx: &mut PaintContext<'_>) {
        let rect = ctx.rect().scaled_about_center(self.scale);
        ctx.renderer().fill_rect(rect, self.fill_color);

        if self.label.is_empty() {
            return;
        }

        let style = TextStyle::new(self.config.text_size, self.config.text_color);
        let metrics = ctx.renderer().measure_text(&self.label, &style);
        let origin = metrics.origin_for_center(rect.center());
        ctx.renderer().draw_text(&self.label, origin, &style);
    }
}

impl Touchable for PressHoldButton {
    fn handle_touch(&mut self, event: &TouchEvent) -> EventResponse {
        match event.phase() {
            TouchPhase::Started => self.on_touch_down(),
            TouchPhase::Ended => self.on_touch_up(),
            TouchPhase::Cancelled => self.on_touch_cancel(),
            TouchPhase::Moved => EventResponse::Handled,
        }
    }
}

impl Accessible for PressHoldButton {
    fn accessible_role(&self) -> AccessibleRole {
        AccessibleRole::Button
    }

    fn accessible_name(&self) -> Option<String> {
        Some(self.label.clone())
    }

    fn accessible_actions(&self) -> Vec<AccessibleAction> {
        vec![AccessibleAction::Click]
    }
}
