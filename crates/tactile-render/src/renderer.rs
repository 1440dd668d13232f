//! The drawing surface widgets paint onto.
//!
//! [`Renderer`] is deliberately small: a host adapter implements it on top of
//! whatever canvas its toolkit provides. [`RecordingRenderer`] is a headless
//! implementation that records every call as a [`DrawCommand`].

use crate::types::{Color, Point, Rect};

/// Text appearance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    /// Font size in pixels.
    pub size: f32,
    /// Text color.
    pub color: Color,
}

impl TextStyle {
    /// Create a text style.
    pub const fn new(size: f32, color: Color) -> Self {
        Self { size, color }
    }
}

impl Default for TextStyle {
    fn default() -> Self {
        Self::new(14.0, Color::BLACK)
    }
}

/// Measurements of a run of text.
///
/// `ascent` is measured upward from the baseline and is therefore negative;
/// `descent` is positive.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TextMetrics {
    /// Advance width.
    pub width: f32,
    /// Distance from baseline to the top of the tallest glyph (negative).
    pub ascent: f32,
    /// Distance from baseline to the bottom of the lowest glyph (positive).
    pub descent: f32,
}

impl TextMetrics {
    /// Baseline y that vertically centers the text on `center_y`.
    #[inline]
    pub fn baseline_for_center(&self, center_y: f32) -> f32 {
        center_y - (self.ascent + self.descent) / 2.0
    }

    /// Origin (left, baseline) that centers the text on `center`.
    #[inline]
    pub fn origin_for_center(&self, center: Point) -> Point {
        Point::new(center.x - self.width / 2.0, self.baseline_for_center(center.y))
    }
}

/// A 2D drawing surface.
pub trait Renderer {
    /// Fill an axis-aligned rectangle.
    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// Draw text with its left edge at `origin.x` and its baseline at `origin.y`.
    fn draw_text(&mut self, text: &str, origin: Point, style: &TextStyle);

    /// Measure text as it would be drawn with `style`.
    fn measure_text(&self, text: &str, style: &TextStyle) -> TextMetrics;
}

/// A single recorded drawing call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// A filled rectangle.
    FillRect {
        /// Rectangle in widget-local coordinates.
        rect: Rect,
        /// Fill color.
        color: Color,
    },
    /// A run of text.
    Text {
        /// The text.
        text: String,
        /// Left edge and baseline.
        origin: Point,
        /// Appearance.
        style: TextStyle,
    },
}

/// A headless renderer that records drawing calls.
///
/// Text is measured with a fixed advance per character (a proportion of the
/// font size) so layouts are deterministic without a font stack.
#[derive(Debug, Clone, Default)]
pub struct RecordingRenderer {
    commands: Vec<DrawCommand>,
}

impl RecordingRenderer {
    /// Horizontal advance per character, as a fraction of the font size.
    pub const ADVANCE_RATIO: f32 = 0.5;
    /// Ascent as a fraction of the font size.
    pub const ASCENT_RATIO: f32 = 0.8;
    /// Descent as a fraction of the font size.
    pub const DESCENT_RATIO: f32 = 0.2;

    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// All commands recorded since the last [`clear`](Self::clear).
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Forget recorded commands.
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Take recorded commands, leaving the recorder empty.
    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Every recorded text run, in drawing order.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|cmd| match cmd {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            DrawCommand::FillRect { .. } => None,
        })
    }
}

impl Renderer for RecordingRenderer {
    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.commands.push(DrawCommand::FillRect { rect, color });
    }

    fn draw_text(&mut self, text: &str, origin: Point, style: &TextStyle) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            origin,
            style: *style,
        });
    }

    fn measure_text(&self, text: &str, style: &TextStyle) -> TextMetrics {
        TextMetrics {
            width: text.chars().count() as f32 * style.size * Self::ADVANCE_RATIO,
            ascent: -style.size * Self::ASCENT_RATIO,
            descent: style.size * Self::DESCENT_RATIO,
        }
    }
}
