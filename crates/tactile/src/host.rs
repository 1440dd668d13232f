//! A windowless host for driving widgets.
//!
//! [`HeadlessHost`] implements [`WidgetHost`] by recording what widgets ask
//! of it, and owns a [`RecordingRenderer`] to paint into. Paired with a
//! [`ManualClock`] it runs a widget frame by frame with no real time passing,
//! which is how the tests and the demo exercise the button.

use std::time::Duration;

use tactile_core::ManualClock;
use tactile_render::{DrawCommand, Rect, RecordingRenderer};

use crate::widget::{Drawable, HapticFeedback, PaintContext, PressHoldButton, WidgetHost};

/// Upper bound on frames a single drive call will run.
const MAX_FRAMES: usize = 100_000;

/// A [`WidgetHost`] with no window behind it.
#[derive(Debug, Clone)]
pub struct HeadlessHost {
    renderer: RecordingRenderer,
    redraw_requests: usize,
    haptics: Vec<HapticFeedback>,
    haptics_enabled: bool,
}

impl Default for HeadlessHost {
    fn default() -> Self {
        Self::new()
    }
}

impl HeadlessHost {
    /// Create a host with haptics enabled.
    pub fn new() -> Self {
        Self {
            renderer: RecordingRenderer::new(),
            redraw_requests: 0,
            haptics: Vec::new(),
            haptics_enabled: true,
        }
    }

    /// Enable or disable the simulated haptic actuator (builder pattern).
    ///
    /// Disabled hosts still record requests but report them as not performed.
    pub fn with_haptics_enabled(mut self, enabled: bool) -> Self {
        self.haptics_enabled = enabled;
        self
    }

    /// Number of redraws requested so far.
    pub fn redraw_requests(&self) -> usize {
        self.redraw_requests
    }

    /// Haptic feedback requested so far, oldest first.
    pub fn haptics(&self) -> &[HapticFeedback] {
        &self.haptics
    }

    /// The recording renderer.
    pub fn renderer(&self) -> &RecordingRenderer {
        &self.renderer
    }

    /// Paint `widget` into a fresh frame and return the recorded commands.
    pub fn paint(&mut self, widget: &dyn Drawable, rect: Rect) -> &[DrawCommand] {
        self.renderer.clear();
        widget.paint(&mut PaintContext::new(&mut self.renderer, rect));
        self.renderer.commands()
    }

    /// Step `clock` in `frame`-sized increments until `button` is idle.
    ///
    /// The button is advanced once before the first step. Returns the number
    /// of frames stepped.
    pub fn drive_until_idle(
        &mut self,
        button: &mut PressHoldButton,
        clock: &ManualClock,
        frame: Duration,
    ) -> usize {
        let mut frames = 0;
        button.advance(self);

        while button.next_wakeup().is_some() {
            if frames == MAX_FRAMES {
                tracing::warn!(target: "tactile::host", frames, "widget never went idle");
                break;
            }
            clock.advance(frame);
            button.advance(self);
            frames += 1;
        }

        tracing::trace!(target: "tactile::host", frames, "widget idle");
        frames
    }

    /// Step `clock` forward by `total` in `frame`-sized increments, advancing
    /// `button` after each step.
    ///
    /// The last step is shortened so the clock moves by exactly `total`.
    pub fn run_for(
        &mut self,
        button: &mut PressHoldButton,
        clock: &ManualClock,
        total: Duration,
        frame: Duration,
    ) {
        let mut remaining = total;
        let mut frames = 0;

        while !remaining.is_zero() && frames < MAX_FRAMES {
            let step = if frame.is_zero() { remaining } else { frame.min(remaining) };
            clock.advance(step);
            button.advance(self);
            remaining -= step;
            frames += 1;
        }
    }
}

impl WidgetHost for HeadlessHost {
    fn request_redraw(&mut self) {
        self.redraw_requests += 1;
    }

    fn perform_haptic_feedback(&mut self, feedback: HapticFeedback) -> bool {
        self.haptics.push(feedback);
        self.haptics_enabled
    }
}
