//! Animation support for Tactile widgets.
//!
//! This module provides easing functions and explicit interpolation state.
//! Widgets own their interpolations as data and sample them from their tick,
//! rather than registering callbacks with a global animator.
//!
//! # Example
//!
//! ```
//! use std::time::{Duration, Instant};
//! use tactile::widget::animation::{AnimationSlot, Direction, Interpolation};
//!
//! let start = Instant::now();
//! let mut scale = 1.0_f32;
//! let mut slot = AnimationSlot::new();
//! slot.start(Interpolation::new(scale, 0.8, start, Duration::from_millis(200), Direction::TowardPressed));
//!
//! slot.tick(start + Duration::from_millis(200), &mut scale);
//! assert_eq!(scale, 0.8);
//! assert!(!slot.is_running());
//! ```

mod easing;
mod interpolation;

pub use easing::{Easing, ease};
pub use interpolation::{AnimationSlot, Direction, Interpolation, Lerp};
