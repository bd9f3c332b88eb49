//! Collaborator traits for Cadence
//!
//! The playback controller drives these; concrete implementations live with
//! the platform (audio engine, OS media session, OS remote command source).

use crate::error::Result;
use crate::types::{CommandStatus, MediaLocator, NowPlayingInfo, RemoteCommand};
use std::sync::Arc;
use std::time::Duration;

/// Audio output device
///
/// Loads one media locator at a time and produces audible output.
/// Completion and interruption are reported separately, through
/// `AudioOutputEvent` values marshaled onto the controller's context.
pub trait AudioOutput: Send {
    /// Open `locator`, replacing whatever was loaded
    ///
    /// Resolves synchronously: the device either succeeds or fails immediately.
    ///
    /// # Errors
    /// Returns `CadenceError::Load` if the locator cannot be opened
    fn load(&mut self, locator: &MediaLocator) -> Result<()>;

    /// Start or resume output of the loaded media
    fn play(&mut self);

    /// Pause output, keeping the position
    fn pause(&mut self);

    /// Move the playback position
    fn seek(&mut self, position: Duration);

    /// Release the loaded media
    ///
    /// Afterwards `current_time` and `duration` are absent and `is_playing` is false.
    fn stop(&mut self);

    /// Current position, absent when nothing is loaded
    fn current_time(&self) -> Option<Duration>;

    /// Total duration, absent when nothing is loaded
    fn duration(&self) -> Option<Duration>;

    /// Whether output is currently audible
    fn is_playing(&self) -> bool;
}

/// External "now playing" display (media session, lock screen)
pub trait NowPlayingCenter: Send {
    /// Replace the displayed snapshot; `None` clears it
    fn publish(&mut self, info: Option<NowPlayingInfo>);
}

/// Handler invoked by a remote command source
pub trait RemoteCommandHandler: Send + Sync {
    /// Act on `command` and report the outcome to the source
    fn handle(&self, command: RemoteCommand) -> CommandStatus;
}

/// External remote command source
pub trait RemoteCommandCenter: Send {
    /// Register `handler` as the target of `command`
    fn add_handler(&mut self, command: RemoteCommand, handler: Arc<dyn RemoteCommandHandler>);

    /// Enable or disable a command in the external surface
    fn set_enabled(&mut self, command: RemoteCommand, enabled: bool);
}
