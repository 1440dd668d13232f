//! Error types for Tactile.

use thiserror::Error;

/// The main error type for Tactile core operations.
#[derive(Debug, Error)]
pub enum TactileError {
    /// Timer-related error.
    #[error("Timer error: {0}")]
    Timer(#[from] TimerError),
    /// Signal-related error.
    #[error("Signal error: {0}")]
    Signal(#[from] SignalError),
}

/// Timer-specific errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TimerError {
    /// The timer ID is invalid or has already fired or been stopped.
    #[error("Invalid or expired timer ID")]
    InvalidTimerId,
}

/// Signal-specific errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SignalError {
    /// The connection ID is invalid or has already been disconnected.
    #[error("Invalid or disconnected connection ID")]
    InvalidConnection,
}

/// A specialized Result type for Tactile core operations.
pub type Result<T> = std::result::Result<T, TactileError>;
