//! Core systems for Tactile.
//!
//! This crate provides the foundational pieces the widget crate builds on:
//!
//! - **Clock**: a swappable monotonic time source ([`SystemClock`], [`ManualClock`])
//! - **Timers**: cooperative one-shot timers ([`TimerManager`])
//! - **Signal/Slot System**: observer callbacks for widget notifications
//! - **Logging**: `tracing` targets and helpers
//!
//! # Timer Example
//!
//! ```
//! use std::time::Duration;
//! use tactile_core::{Clock, ManualClock, TimerManager};
//!
//! let clock = ManualClock::new();
//! let mut timers = TimerManager::new();
//! let id = timers.start_one_shot(clock.now(), Duration::from_millis(500));
//!
//! clock.advance(Duration::from_millis(500));
//! assert_eq!(timers.process_expired(clock.now()), vec![id]);
//! ```

pub mod clock;
mod error;
pub mod logging;
pub mod signal;
pub mod timer;

pub use clock::{Clock, ManualClock, SharedClock, SystemClock};
pub use error::{Result, SignalError, TactileError, TimerError};
pub use logging::PerfSpan;
pub use signal::{ConnectionId, Signal};
pub use timer::{TimerId, TimerManager};

static_assertions::assert_impl_all!(ManualClock: Clock, Clone, Send, Sync);
static_assertions::assert_impl_all!(Signal<()>: Send, Sync);
static_assertions::assert_impl_all!(TimerId: Copy, Send, Sync);
