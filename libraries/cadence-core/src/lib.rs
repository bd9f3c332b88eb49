//! Cadence Core
//!
//! Data model and collaborator traits for the Cadence playback controller.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `PlaybackItem`, `MediaLocator`, `Playlist`, `NowPlayingInfo`
//! - **Collaborator Traits**: `AudioOutput`, `NowPlayingCenter`, `RemoteCommandCenter`
//! - **Error Handling**: `CadenceError` and `Result`
//!
//! # Example
//!
//! ```rust
//! use cadence_core::{PlaybackItem, Playlist};
//!
//! let playlist = Playlist::new(vec![
//!     PlaybackItem::new("file:///music/one.mp3", "One", "Album", "Artist", "cover"),
//!     PlaybackItem::new("file:///music/two.mp3", "Two", "Album", "Artist", "cover"),
//! ]);
//!
//! assert_eq!(playlist.len(), 2);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod traits;
pub mod types;

pub use error::{CadenceError, Result};
pub use traits::{AudioOutput, NowPlayingCenter, RemoteCommandCenter, RemoteCommandHandler};
pub use types::{
    CommandStatus, MediaLocator, NowPlayingInfo, PlaybackItem, Playlist, RemoteCommand,
};
