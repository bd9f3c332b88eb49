//! Playback item domain types

use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::path::Path;

/// Opaque reference to playable audio content (path, URI or handle)
///
/// Only the audio output device knows how to resolve it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MediaLocator(String);

impl MediaLocator {
    /// Create a new media locator
    pub fn new(locator: impl Into<String>) -> Self {
        Self(locator.into())
    }

    /// Create a locator for a file on disk
    pub fn from_path(path: impl AsRef<Path>) -> Self {
        Self(path.as_ref().to_string_lossy().into_owned())
    }

    /// Get the inner string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MediaLocator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for MediaLocator {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for MediaLocator {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// A single entry of a playlist
///
/// Identity is the media locator: two items are the same track iff their
/// locators match. Every other field is descriptive metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaybackItem {
    /// Where the audio lives
    pub locator: MediaLocator,

    /// Track title
    pub track_name: String,

    /// Album title
    pub album_name: String,

    /// Artist name
    pub artist_name: String,

    /// Artwork reference (image name, path or URI)
    pub artwork: String,
}

impl PlaybackItem {
    /// Create a new playback item
    pub fn new(
        locator: impl Into<MediaLocator>,
        track_name: impl Into<String>,
        album_name: impl Into<String>,
        artist_name: impl Into<String>,
        artwork: impl Into<String>,
    ) -> Self {
        Self {
            locator: locator.into(),
            track_name: track_name.into(),
            album_name: album_name.into(),
            artist_name: artist_name.into(),
            artwork: artwork.into(),
        }
    }

    /// Artwork reference, if one was given
    pub fn artwork(&self) -> Option<&str> {
        if self.artwork.is_empty() {
            None
        } else {
            Some(&self.artwork)
        }
    }
}

impl PartialEq for PlaybackItem {
    fn eq(&self, other: &Self) -> bool {
        self.locator == other.locator
    }
}

impl Eq for PlaybackItem {}

impl Hash for PlaybackItem {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.locator.hash(state);
    }
}
