//! Error types for the render crate.

use thiserror::Error;

/// Errors from parsing a color string.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorParseError {
    /// The string is not `#RRGGBB` or `#RRGGBBAA`.
    #[error("invalid hex color {0:?}, expected #RRGGBB or #RRGGBBAA")]
    InvalidHex(String),
}
