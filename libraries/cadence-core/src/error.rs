//! Core error types for Cadence

use crate::types::MediaLocator;
use thiserror::Error;

/// Result type alias using `CadenceError`
pub type Result<T> = std::result::Result<T, CadenceError>;

/// Errors reported by external collaborators (audio output, media session)
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CadenceError {
    /// The output device could not open the media locator
    #[error("Failed to load {locator}: {reason}")]
    Load {
        /// Locator that failed to open
        locator: MediaLocator,
        /// Device-reported cause
        reason: String,
    },

    /// The output device is unavailable or misbehaving
    #[error("Device error: {0}")]
    Device(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl CadenceError {
    /// Create a load error for `locator`
    pub fn load(locator: &MediaLocator, reason: impl Into<String>) -> Self {
        Self::Load {
            locator: locator.clone(),
            reason: reason.into(),
        }
    }

    /// Create a device error
    pub fn device(msg: impl Into<String>) -> Self {
        Self::Device(msg.into())
    }

    /// Create an invalid input error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}
