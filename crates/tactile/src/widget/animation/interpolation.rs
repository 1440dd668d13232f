//! Time-based interpolation as plain data.
//!
//! An [`Interpolation`] is `{from, to, start, duration}` plus an easing curve
//! and a direction tag. Its value at any instant is a pure function of that
//! instant, so there is no hidden animator object to keep in sync: the owner
//! samples it on each tick and writes the result wherever it belongs.
//!
//! [`AnimationSlot`] holds at most one running interpolation of a kind.
//! Starting a new one replaces whatever was running.

use std::time::{Duration, Instant};

use tactile_render::Color;

use super::easing::{Easing, ease};

/// Values that can be blended linearly.
pub trait Lerp: Copy {
    /// Blend from `self` toward `to` by `t` (0.0 = self, 1.0 = to).
    fn lerp(self, to: Self, t: f32) -> Self;
}

impl Lerp for f32 {
    #[inline]
    fn lerp(self, to: Self, t: f32) -> Self {
        self + (to - self) * t
    }
}

impl Lerp for Color {
    #[inline]
    fn lerp(self, to: Self, t: f32) -> Self {
        Color::lerp(self, to, t)
    }
}

/// Which resting state an interpolation is heading toward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Heading toward the fully pressed appearance.
    TowardPressed,
    /// Heading back toward the resting appearance.
    TowardIdle,
}

/// A single interpolation between two values over a fixed time window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interpolation<T> {
    from: T,
    to: T,
    start: Instant,
    duration: Duration,
    easing: Easing,
    direction: Direction,
}

impl<T: Lerp> Interpolation<T> {
    /// Create a linear interpolation starting at `start`.
    pub fn new(from: T, to: T, start: Instant, duration: Duration, direction: Direction) -> Self {
        Self {
            from,
            to,
            start,
            duration,
            easing: Easing::Linear,
            direction,
        }
    }

    /// Set the easing curve (builder pattern).
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// The start value.
    #[inline]
    pub fn from(&self) -> T {
        self.from
    }

    /// The end value.
    #[inline]
    pub fn to(&self) -> T {
        self.to
    }

    /// When the interpolation started.
    #[inline]
    pub fn start(&self) -> Instant {
        self.start
    }

    /// Total running time.
    #[inline]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// When the interpolation reaches its end value.
    #[inline]
    pub fn end(&self) -> Instant {
        self.start + self.duration
    }

    /// The easing curve.
    #[inline]
    pub fn easing(&self) -> Easing {
        self.easing
    }

    /// The direction tag.
    #[inline]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Elapsed fraction of the time window, clamped to `[0, 1]`.
    ///
    /// A zero duration is complete immediately.
    pub fn progress(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.start);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
    }

    /// Check whether the interpolation has reached its end value.
    #[inline]
    pub fn is_finished(&self, now: Instant) -> bool {
        self.progress(now) >= 1.0
    }

    /// The value at `now`. Exactly `to` once finished.
    pub fn sample(&self, now: Instant) -> T {
        let progress = self.progress(now);
        if progress >= 1.0 {
            self.to
        } else {
            self.from.lerp(self.to, ease(self.easing, progress))
        }
    }
}

/// Holder for at most one running interpolation.
#[derive(Debug, Clone)]
pub struct AnimationSlot<T> {
    active: Option<Interpolation<T>>,
}

impl<T> Default for AnimationSlot<T> {
    fn default() -> Self {
        Self { active: None }
    }
}

impl<T: Lerp + PartialEq> AnimationSlot<T> {
    /// Create an empty slot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start `interpolation`, replacing any running one.
    ///
    /// Returns the interpolation that was replaced, if one was running.
    pub fn start(&mut self, interpolation: Interpolation<T>) -> Option<Interpolation<T>> {
        self.active.replace(interpolation)
    }

    /// Stop the running interpolation, leaving the value where it is.
    ///
    /// No-op on an empty slot.
    pub fn cancel(&mut self) -> Option<Interpolation<T>> {
        self.active.take()
    }

    /// Stop the running interpolation only if it heads in `direction`.
    ///
    /// Returns `true` if something was cancelled.
    pub fn cancel_direction(&mut self, direction: Direction) -> bool {
        if self.direction() == Some(direction) {
            self.active = None;
            true
        } else {
            false
        }
    }

    /// Check whether an interpolation is running.
    #[inline]
    pub fn is_running(&self) -> bool {
        self.active.is_some()
    }

    /// Direction of the running interpolation.
    #[inline]
    pub fn direction(&self) -> Option<Direction> {
        self.active.as_ref().map(Interpolation::direction)
    }

    /// The running interpolation.
    #[inline]
    pub fn current(&self) -> Option<&Interpolation<T>> {
        self.active.as_ref()
    }

    /// Sample the running interpolation into `value`.
    ///
    /// A finished interpolation writes its end value and is retired.
    /// Returns `true` if `value` changed.
    pub fn tick(&mut self, now: Instant, value: &mut T) -> bool {
        let Some(interpolation) = self.active else {
            return false;
        };

        let sampled = interpolation.sample(now);
        let changed = sampled != *value;
        *value = sampled;

        if interpolation.is_finished(now) {
            self.active = None;
        }

        changed
    }
}
