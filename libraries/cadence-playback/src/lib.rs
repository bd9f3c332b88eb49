//! Cadence - Playback Control
//!
//! Playlist-driven playback controller that keeps an external "now playing"
//! display and a remote command surface in step with actual playback.
//!
//! This crate provides:
//! - Playlist navigation (next, previous, positional start)
//! - Transport control (play, pause, toggle, seek)
//! - Now-playing metadata sync, including elapsed-time updates
//! - Remote command routing with next/previous enablement
//! - Synchronous, ordered event fan-out to observers
//!
//! # Architecture
//!
//! `cadence-playback` does not talk to any platform API. The audio engine,
//! the OS media session and the OS remote command source are provided
//! through the traits in `cadence-core`.
//!
//! # Example
//!
//! ```rust
//! use cadence_core::{
//!     AudioOutput, MediaLocator, NowPlayingCenter, NowPlayingInfo, PlaybackItem, Playlist,
//!     RemoteCommand, RemoteCommandCenter, RemoteCommandHandler,
//! };
//! use cadence_playback::{PlaybackController, PlayerConfig, PlayerDependencies, PlayerEvent};
//! use std::sync::Arc;
//! use std::time::Duration;
//!
//! # #[derive(Default)]
//! # struct SilentOutput { loaded: bool, playing: bool }
//! # impl AudioOutput for SilentOutput {
//! #     fn load(&mut self, _: &MediaLocator) -> cadence_core::Result<()> { self.loaded = true; Ok(()) }
//! #     fn play(&mut self) { self.playing = self.loaded; }
//! #     fn pause(&mut self) { self.playing = false; }
//! #     fn seek(&mut self, _: Duration) {}
//! #     fn stop(&mut self) { self.loaded = false; self.playing = false; }
//! #     fn current_time(&self) -> Option<Duration> { self.loaded.then_some(Duration::ZERO) }
//! #     fn duration(&self) -> Option<Duration> { self.loaded.then_some(Duration::from_secs(180)) }
//! #     fn is_playing(&self) -> bool { self.playing }
//! # }
//! # struct Display;
//! # impl NowPlayingCenter for Display { fn publish(&mut self, _: Option<NowPlayingInfo>) {} }
//! # struct Commands;
//! # impl RemoteCommandCenter for Commands {
//! #     fn add_handler(&mut self, _: RemoteCommand, _: Arc<dyn RemoteCommandHandler>) {}
//! #     fn set_enabled(&mut self, _: RemoteCommand, _: bool) {}
//! # }
//! let mut controller = PlaybackController::new(
//!     PlayerConfig::default(),
//!     PlayerDependencies {
//!         output: Box::new(SilentOutput::default()),
//!         now_playing: Box::new(Display),
//!         commands: Box::new(Commands),
//!     },
//! );
//!
//! controller.subscribe(PlayerEvent::TrackChanged, |_, player| {
//!     println!("Now playing: {:?}", player.current_item().map(|i| &i.track_name));
//! });
//!
//! let playlist = Playlist::new(vec![
//!     PlaybackItem::new("file:///music/one.mp3", "One", "Album", "Artist", "cover"),
//!     PlaybackItem::new("file:///music/two.mp3", "Two", "Album", "Artist", "cover"),
//! ]);
//! controller.play_items(playlist, None).unwrap();
//! controller.next();
//!
//! assert_eq!(controller.current_item().unwrap().track_name, "Two");
//! ```

mod controller;
mod error;
pub mod events;
mod now_playing;
mod remote;
mod settings;
pub mod time;

// Public exports
pub use controller::{
    AudioOutputEvent, PlaybackController, PlaybackStatus, PlayerDependencies, SharedController,
};
pub use error::{PlaybackError, Result};
pub use events::{EventBus, PlayerEvent, SubscriptionId};
pub use now_playing::NowPlayingSynchronizer;
pub use remote::{RemoteCommandRouter, TransportControl, TransportHandler};
pub use settings::PlayerConfig;
pub use time::{format_remaining, format_time, PlaybackProgress};
