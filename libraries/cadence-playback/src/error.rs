//! Error types for playback control

use cadence_core::{CadenceError, MediaLocator};
use thiserror::Error;

/// Playback errors
///
/// Load failures are absorbed by the controller (playback ends) and never
/// show up here; only caller mistakes and configuration problems do.
#[derive(Debug, Error)]
pub enum PlaybackError {
    /// Requested start item is not part of the playlist
    #[error("Item not in playlist: {0}")]
    ItemNotInPlaylist(MediaLocator),

    /// Index out of bounds
    #[error("Index {index} out of bounds for playlist of {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    /// Invalid configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Collaborator error
    #[error(transparent)]
    Core(#[from] CadenceError),
}

/// Result type for playback operations
pub type Result<T> = std::result::Result<T, PlaybackError>;
