//! Remote command types

use serde::{Deserialize, Serialize};
use std::fmt;

/// Transport request issued from outside the app (lock screen, headset, media keys)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RemoteCommand {
    /// Start or resume playback
    Play,
    /// Pause playback
    Pause,
    /// Skip to the next item
    NextTrack,
    /// Go back to the previous item
    PreviousTrack,
}

impl RemoteCommand {
    /// Every command the router binds
    pub const ALL: [RemoteCommand; 4] = [
        RemoteCommand::Play,
        RemoteCommand::Pause,
        RemoteCommand::NextTrack,
        RemoteCommand::PreviousTrack,
    ];

    /// Stable snake_case name
    pub fn as_str(&self) -> &'static str {
        match self {
            RemoteCommand::Play => "play",
            RemoteCommand::Pause => "pause",
            RemoteCommand::NextTrack => "next_track",
            RemoteCommand::PreviousTrack => "previous_track",
        }
    }
}

impl fmt::Display for RemoteCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome reported back to the command source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CommandStatus {
    /// The command was carried out
    Success,
    /// The handler could not reach its target
    CommandFailed,
}

impl CommandStatus {
    /// True for `Success`
    pub fn is_success(&self) -> bool {
        matches!(self, CommandStatus::Success)
    }
}
