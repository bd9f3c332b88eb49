//! Remote command routing
//!
//! Binds the external command source (lock screen, headset buttons, media
//! keys) to the controller and keeps command enablement in step with the
//! playlist position.

use cadence_core::{CommandStatus, RemoteCommand, RemoteCommandCenter, RemoteCommandHandler};
use std::sync::{Arc, Mutex, Weak};
use tracing::{debug, warn};

/// Transport operations reachable from a remote command
pub trait TransportControl: Send {
    fn play(&mut self);
    fn pause(&mut self);
    fn next(&mut self);
    fn previous(&mut self);
}

/// Handler holding a weak reference to its target
///
/// Reports `CommandFailed` once the target has been dropped.
pub struct TransportHandler<T> {
    target: Weak<Mutex<T>>,
}

impl<T> TransportHandler<T> {
    pub fn new(target: Weak<Mutex<T>>) -> Self {
        Self { target }
    }
}

impl<T: TransportControl> RemoteCommandHandler for TransportHandler<T> {
    fn handle(&self, command: RemoteCommand) -> CommandStatus {
        let Some(target) = self.target.upgrade() else {
            warn!(%command, "Remote command target is gone");
            return CommandStatus::CommandFailed;
        };
        let Ok(mut target) = target.lock() else {
            warn!(%command, "Remote command target lock is poisoned");
            return CommandStatus::CommandFailed;
        };

        debug!(%command, "Handling remote command");
        match command {
            RemoteCommand::Play => target.play(),
            RemoteCommand::Pause => target.pause(),
            RemoteCommand::NextTrack => target.next(),
            RemoteCommand::PreviousTrack => target.previous(),
        }

        CommandStatus::Success
    }
}

/// Owns the remote command center on behalf of the controller
pub struct RemoteCommandRouter {
    center: Box<dyn RemoteCommandCenter>,
}

impl RemoteCommandRouter {
    pub fn new(center: Box<dyn RemoteCommandCenter>) -> Self {
        Self { center }
    }

    /// Register one handler per command, all targeting `target`
    pub fn bind<T: TransportControl + 'static>(&mut self, target: Weak<Mutex<T>>) {
        let handler: Arc<dyn RemoteCommandHandler> = Arc::new(TransportHandler::new(target));
        for command in RemoteCommand::ALL {
            self.center.add_handler(command, Arc::clone(&handler));
        }
    }

    /// Recompute "previous" / "next" enablement
    pub fn update_enablement(&mut self, has_previous: bool, has_next: bool) {
        self.center
            .set_enabled(RemoteCommand::PreviousTrack, has_previous);
        self.center.set_enabled(RemoteCommand::NextTrack, has_next);
    }
}

impl std::fmt::Debug for RemoteCommandRouter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RemoteCommandRouter").finish_non_exhaustive()
    }
}
