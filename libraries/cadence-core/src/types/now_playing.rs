//! Now-playing snapshot published to the media-session display

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Structured descriptor shown by an external "now playing" display
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NowPlayingInfo {
    /// Track title
    pub title: String,
    /// Album title
    pub album: String,
    /// Artist name
    pub artist: String,

    /// Artwork reference, absent when the item has none
    pub artwork: Option<String>,

    /// Total duration reported by the output device
    pub duration: Option<Duration>,

    /// Nominal playback rate
    pub playback_rate: f64,

    /// Elapsed time at the moment of publishing
    pub elapsed: Option<Duration>,
}
