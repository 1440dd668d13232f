//! Press-and-hold button configuration.
//!
//! Every field has a default, so an empty document is a valid configuration.
//! Colors are written as hex strings.
//!
//! ```
//! use std::time::Duration;
//! use tactile::config::PressHoldConfig;
//!
//! let config = PressHoldConfig::from_toml_str(r##"
//! long_press_timeout_ms = 400
//! alert_color = "#CC0000"
//! "##).unwrap();
//!
//! assert_eq!(config.hold_duration(), Duration::from_millis(1600));
//! assert_eq!(config.reset_duration(), Duration::from_millis(200));
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tactile_render::Color;
use thiserror::Error;

use crate::widget::animation::Easing;

/// Gesture recognizer default for the long-press threshold.
pub const DEFAULT_LONG_PRESS_TIMEOUT_MS: u64 = 500;

/// The hold must last this many long-press thresholds.
pub const DEFAULT_HOLD_MULTIPLIER: u32 = 4;

/// Duration of the return-to-rest animation.
pub const DEFAULT_RESET_DURATION_MS: u64 = 200;

/// Scale the button shrinks to while held.
pub const DEFAULT_PRESSED_SCALE: f32 = 0.8;

/// Label text size in pixels.
pub const DEFAULT_TEXT_SIZE: f32 = 50.0;

/// Longest hold or reset duration a configuration may ask for.
pub const MAX_DURATION: Duration = Duration::from_secs(60 * 60);

/// Errors from loading or validating a [`PressHoldConfig`].
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The document is not valid TOML or does not match the schema.
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    /// The configuration could not be written as TOML.
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// The config file could not be read.
    #[error("failed to read config file {path}: {source}")]
    Io {
        /// Path that was being read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A field holds a value the button cannot use.
    #[error("invalid value for `{field}`: {reason}")]
    Invalid {
        /// Field name as written in the document.
        field: &'static str,
        /// What is wrong with it.
        reason: String,
    },
}

/// Timing and appearance of a [`PressHoldButton`](crate::widget::widgets::PressHoldButton).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PressHoldConfig {
    /// Platform long-press threshold in milliseconds.
    pub long_press_timeout_ms: u64,
    /// Multiplier applied to the threshold to get the hold duration.
    pub hold_multiplier: u32,
    /// Return-to-rest animation length in milliseconds.
    pub reset_duration_ms: u64,
    /// Scale reached at the end of the hold, in `(0, 1]`.
    pub pressed_scale: f32,
    /// Fill color at rest.
    #[serde(with = "hex_color")]
    pub base_color: Color,
    /// Fill color at the end of the hold.
    #[serde(with = "hex_color")]
    pub alert_color: Color,
    /// Label color.
    #[serde(with = "hex_color")]
    pub text_color: Color,
    /// Label size in pixels.
    pub text_size: f32,
    /// Easing curve for the press and reset animations.
    pub easing: Easing,
}

impl Default for PressHoldConfig {
    fn default() -> Self {
        Self {
            long_press_timeout_ms: DEFAULT_LONG_PRESS_TIMEOUT_MS,
            hold_multiplier: DEFAULT_HOLD_MULTIPLIER,
            reset_duration_ms: DEFAULT_RESET_DURATION_MS,
            pressed_scale: DEFAULT_PRESSED_SCALE,
            base_color: Color::YELLOW,
            alert_color: Color::RED,
            text_color: Color::BLACK,
            text_size: DEFAULT_TEXT_SIZE,
            easing: Easing::Linear,
        }
    }
}

impl PressHoldConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(target: "tactile::config", path = %path.display(), "loading press-hold config");
        Self::from_toml_str(&source)
    }

    /// Write the configuration as a TOML document.
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string(self)?)
    }

    /// Check that every field is usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.long_press_timeout_ms == 0 {
            return Err(invalid("long_press_timeout_ms", "must be greater than zero"));
        }
        if self.hold_multiplier == 0 {
            return Err(invalid("hold_multiplier", "must be greater than zero"));
        }
        match self.long_press_timeout().checked_mul(self.hold_multiplier) {
            Some(hold) if hold <= MAX_DURATION => {}
            _ => {
                return Err(invalid(
                    "hold_multiplier",
                    format!(
                        "{} x {} ms exceeds the {} s limit",
                        self.hold_multiplier,
                        self.long_press_timeout_ms,
                        MAX_DURATION.as_secs()
                    ),
                ));
            }
        }
        if Duration::from_millis(self.reset_duration_ms) > MAX_DURATION {
            return Err(invalid(
                "reset_duration_ms",
                format!("exceeds the {} s limit", MAX_DURATION.as_secs()),
            ));
        }
        if !(self.pressed_scale > 0.0 && self.pressed_scale <= 1.0) {
            return Err(invalid(
                "pressed_scale",
                format!("{} is outside (0, 1]", self.pressed_scale),
            ));
        }
        if !(self.text_size > 0.0 && self.text_size.is_finite()) {
            return Err(invalid(
                "text_size",
                format!("{} is not a positive size", self.text_size),
            ));
        }
        Ok(())
    }

    /// The platform long-press threshold.
    pub fn long_press_timeout(&self) -> Duration {
        Duration::from_millis(self.long_press_timeout_ms)
    }

    /// How long the finger must stay down before the long-press fires.
    ///
    /// Clamped to [`MAX_DURATION`] for configurations that skipped validation.
    pub fn hold_duration(&self) -> Duration {
        self.long_press_timeout()
            .checked_mul(self.hold_multiplier)
            .map_or(MAX_DURATION, |hold| hold.min(MAX_DURATION))
    }

    /// Length of the return-to-rest animation, clamped to [`MAX_DURATION`].
    pub fn reset_duration(&self) -> Duration {
        Duration::from_millis(self.reset_duration_ms).min(MAX_DURATION)
    }
}

fn invalid(field: &'static str, reason: impl Into<String>) -> ConfigError {
    ConfigError::Invalid {
        field,
        reason: reason.into(),
    }
}

mod hex_color {
    use serde::{Deserialize, Deserializer, Serializer};
    use tactile_render::Color;

    pub fn serialize<S: Serializer>(color: &Color, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&color.to_hex())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Color, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}
