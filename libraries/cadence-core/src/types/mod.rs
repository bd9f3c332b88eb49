//! Domain types

mod command;
mod item;
mod now_playing;
mod playlist;

pub use command::{CommandStatus, RemoteCommand};
pub use item::{MediaLocator, PlaybackItem};
pub use now_playing::NowPlayingInfo;
pub use playlist::Playlist;
