//! Geometry, color and drawing-surface abstractions for Tactile.
//!
//! Widgets draw through the [`Renderer`] trait. A host adapter implements it
//! on top of its toolkit's canvas; [`RecordingRenderer`] is the headless
//! implementation used by tests and demos.
//!
//! # Example
//!
//! ```
//! use tactile_render::{Color, Rect, RecordingRenderer, Renderer};
//!
//! let mut renderer = RecordingRenderer::new();
//! renderer.fill_rect(Rect::new(0.0, 0.0, 100.0, 40.0), Color::YELLOW);
//! assert_eq!(renderer.commands().len(), 1);
//! ```

mod error;
mod renderer;
mod types;

pub use error::ColorParseError;
pub use renderer::{DrawCommand, RecordingRenderer, Renderer, TextMetrics, TextStyle};
pub use types::{Color, Point, Rect, Size};
