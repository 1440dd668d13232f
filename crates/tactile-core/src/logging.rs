//! Logging facilities for Tactile.
//!
//! Tactile uses the `tracing` crate for instrumentation. To see logs,
//! install a tracing subscriber in your application:
//!
//! ```ignore
//! fn main() {
//!     tracing_subscriber::fmt::init();
//!
//!     // Your application code...
//! }
//! ```
//!
//! Filter by subsystem with the constants in [`targets`], for example
//! `RUST_LOG=tactile::widget=debug`.

#[doc(hidden)]
pub use tracing as __tracing;

/// Span names used throughout Tactile for tracing.
pub mod span_names {
    /// Widget tick span.
    pub const WIDGET_TICK: &str = "tactile::widget::tick";
}

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Core framework target.
    pub const CORE: &str = "tactile_core";
    /// Timer system target.
    pub const TIMER: &str = "tactile_core::timer";
    /// Signal/slot system target.
    pub const SIGNAL: &str = "tactile_core::signal";
    /// Widget state transitions.
    pub const WIDGET: &str = "tactile::widget";
    /// Widget animation ticks.
    pub const ANIMATION: &str = "tactile::widget::animation";
}

/// A guard that keeps a tracing span entered until it is dropped.
///
/// This is useful for tracking the duration of operations.
#[derive(Debug)]
pub struct PerfSpan {
    #[allow(dead_code)]
    span: tracing::span::EnteredSpan,
}

impl PerfSpan {
    /// Create a new performance span.
    ///
    /// The span will be active until the guard is dropped.
    pub fn new(name: &'static str) -> Self {
        let span = tracing::trace_span!(target: "tactile::perf", "perf", operation = name);
        Self {
            span: span.entered(),
        }
    }
}

/// Trace-level event under the `tactile_core` target.
#[macro_export]
macro_rules! tactile_trace {
    ($($arg:tt)*) => {
        $crate::logging::__tracing::trace!(target: "tactile_core", $($arg)*)
    };
}

/// Debug-level event under the `tactile_core` target.
#[macro_export]
macro_rules! tactile_debug {
    ($($arg:tt)*) => {
        $crate::logging::__tracing::debug!(target: "tactile_core", $($arg)*)
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_perf_span() {
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();
        let _span = PerfSpan::new("test_operation");
        tactile_debug!(value = 1, "inside span");
    }

    #[test]
    fn test_targets_are_namespaced() {
        assert!(targets::TIMER.starts_with(targets::CORE));
        assert!(targets::ANIMATION.starts_with(targets::WIDGET));
    }
}
