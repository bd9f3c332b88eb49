//! Now-playing synchronization
//!
//! Keeps the external display in step with the controller. Two kinds of
//! update:
//! - full refresh when the current item changes or playback ends
//! - elapsed-only refresh on play, pause and seek, which patches the last
//!   published snapshot instead of rebuilding it

use cadence_core::{NowPlayingCenter, NowPlayingInfo, PlaybackItem};
use std::time::Duration;

/// Publishes now-playing snapshots to a `NowPlayingCenter`
pub struct NowPlayingSynchronizer {
    center: Box<dyn NowPlayingCenter>,
    /// Last snapshot handed to the center
    published: Option<NowPlayingInfo>,
    playback_rate: f64,
    publish_artwork: bool,
}

impl NowPlayingSynchronizer {
    pub fn new(
        center: Box<dyn NowPlayingCenter>,
        playback_rate: f64,
        publish_artwork: bool,
    ) -> Self {
        Self {
            center,
            published: None,
            playback_rate,
            publish_artwork,
        }
    }

    /// Rebuild the snapshot for `item`
    ///
    /// `None` clears the display.
    pub fn refresh(
        &mut self,
        item: Option<&PlaybackItem>,
        duration: Option<Duration>,
        elapsed: Option<Duration>,
    ) {
        let info = item.map(|item| NowPlayingInfo {
            title: item.track_name.clone(),
            album: item.album_name.clone(),
            artist: item.artist_name.clone(),
            artwork: if self.publish_artwork {
                item.artwork().map(str::to_owned)
            } else {
                None
            },
            duration,
            playback_rate: self.playback_rate,
            elapsed,
        });

        self.publish(info);
    }

    /// Patch the elapsed time of the last snapshot
    ///
    /// Does nothing when no snapshot is published or the device reports no
    /// position.
    pub fn refresh_elapsed(&mut self, elapsed: Option<Duration>) {
        let Some(elapsed) = elapsed else {
            return;
        };
        let Some(mut info) = self.published.clone() else {
            return;
        };

        info.elapsed = Some(elapsed);
        self.publish(Some(info));
    }

    /// Clear the display
    pub fn clear(&mut self) {
        self.publish(None);
    }

    /// Snapshot most recently published
    pub fn current(&self) -> Option<&NowPlayingInfo> {
        self.published.as_ref()
    }

    fn publish(&mut self, info: Option<NowPlayingInfo>) {
        self.center.publish(info.clone());
        self.published = info;
    }
}

impl std::fmt::Debug for NowPlayingSynchronizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NowPlayingSynchronizer")
            .field("published", &self.published)
            .field("playback_rate", &self.playback_rate)
            .finish_non_exhaustive()
    }
}
