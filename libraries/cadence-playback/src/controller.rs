//! Playback controller - the transport state machine
//!
//! Owns the playback session (playlist, current position) and drives the
//! audio output. Every change of current item is followed, in this order,
//! by a now-playing refresh, a command enablement update and finally a
//! `TrackChanged` event, so observers always see consistent state.

use crate::{
    error::{PlaybackError, Result},
    events::{EventBus, PlayerEvent, SubscriptionId},
    now_playing::NowPlayingSynchronizer,
    remote::{RemoteCommandRouter, TransportControl},
    settings::PlayerConfig,
    time::PlaybackProgress,
};
use cadence_core::{AudioOutput, NowPlayingCenter, PlaybackItem, Playlist, RemoteCommandCenter};
use crossbeam_channel::Receiver;
use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tracing::{debug, info, warn};

/// Controller shared with remote command handlers
pub type SharedController = Arc<Mutex<PlaybackController>>;

/// Transport status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlaybackStatus {
    /// Nothing loaded
    Idle,
    Playing,
    Paused,
}

/// Asynchronous notifications from the audio output
///
/// The device marshals these onto the controller's context and hands them
/// to `PlaybackController::handle_output_event`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioOutputEvent {
    /// Loaded item played to the end
    FinishedPlaying,

    /// Device paused itself (call, alarm, another app)
    InterruptionBegan,

    /// Interruption is over
    InterruptionEnded { should_resume: bool },
}

/// External collaborators the controller drives
pub struct PlayerDependencies {
    pub output: Box<dyn AudioOutput>,
    pub now_playing: Box<dyn NowPlayingCenter>,
    pub commands: Box<dyn RemoteCommandCenter>,
}

/// Mutable playback state
///
/// `current_index` is `Some` iff something is loaded, and always a valid
/// position in `playlist`.
#[derive(Debug, Default)]
struct PlaybackSession {
    playlist: Playlist,
    current_index: Option<usize>,
}

/// Playlist-driven playback controller
///
/// Not meant for concurrent mutation: transport calls and device callbacks
/// must be serialized onto one context. `into_shared` wraps the controller
/// for handing to remote command handlers.
pub struct PlaybackController {
    session: PlaybackSession,
    output: Box<dyn AudioOutput>,
    now_playing: NowPlayingSynchronizer,
    remote: RemoteCommandRouter,
    events: EventBus<PlaybackController>,
    config: PlayerConfig,
}

impl PlaybackController {
    /// Create a controller with nothing loaded
    pub fn new(config: PlayerConfig, dependencies: PlayerDependencies) -> Self {
        let PlayerDependencies {
            output,
            now_playing,
            commands,
        } = dependencies;

        Self {
            session: PlaybackSession::default(),
            output,
            now_playing: NowPlayingSynchronizer::new(
                now_playing,
                config.playback_rate,
                config.publish_artwork,
            ),
            remote: RemoteCommandRouter::new(commands),
            events: EventBus::new(),
            config,
        }
    }

    /// Wrap the controller for sharing and bind remote command handlers to it
    ///
    /// Handlers hold a weak reference: once every `SharedController` is
    /// dropped, remote commands report `CommandFailed`.
    pub fn into_shared(self) -> SharedController {
        Arc::new_cyclic(|weak| {
            let mut controller = self;
            controller.remote.bind(weak.clone());
            Mutex::new(controller)
        })
    }

    // ===== Playlist =====

    /// Replace the playlist and start playing
    ///
    /// Starts at `first_item` (its first occurrence) or at the head of the
    /// playlist. An empty playlist ends playback whatever `first_item` is.
    ///
    /// # Errors
    /// `ItemNotInPlaylist` if `first_item` is not part of a non-empty
    /// `playlist`; the session is left untouched.
    pub fn play_items(
        &mut self,
        playlist: Playlist,
        first_item: Option<&PlaybackItem>,
    ) -> Result<()> {
        if playlist.is_empty() {
            self.replace_playlist(playlist);
            self.end_playback();
            return Ok(());
        }

        let start = match first_item {
            Some(item) => playlist
                .position_of(item)
                .ok_or_else(|| PlaybackError::ItemNotInPlaylist(item.locator.clone()))?,
            None => 0,
        };

        self.replace_playlist(playlist);
        self.play_index(start);
        Ok(())
    }

    /// Replace the playlist and start playing at `index`
    ///
    /// # Errors
    /// `IndexOutOfBounds` if `index` is not a position in `playlist`; the
    /// session is left untouched.
    pub fn play_items_from(&mut self, playlist: Playlist, index: usize) -> Result<()> {
        if index >= playlist.len() {
            return Err(PlaybackError::IndexOutOfBounds {
                index,
                len: playlist.len(),
            });
        }

        self.replace_playlist(playlist);
        self.play_index(index);
        Ok(())
    }

    /// Play an item of the current playlist
    ///
    /// # Errors
    /// `ItemNotInPlaylist` if `item` is not part of the current playlist.
    pub fn play_item(&mut self, item: &PlaybackItem) -> Result<()> {
        let index = self
            .session
            .playlist
            .position_of(item)
            .ok_or_else(|| PlaybackError::ItemNotInPlaylist(item.locator.clone()))?;

        self.play_index(index);
        Ok(())
    }

    // ===== Transport =====

    pub fn toggle_play_pause(&mut self) {
        if self.is_playing() {
            self.pause();
        } else {
            self.play();
        }
    }

    /// Start or resume output
    pub fn play(&mut self) {
        if self.has_current_item() {
            self.output.play();
        }
        self.now_playing.refresh_elapsed(self.output.current_time());
        self.notify(PlayerEvent::PlaybackStateChanged);
    }

    pub fn pause(&mut self) {
        if self.has_current_item() {
            self.output.pause();
        }
        self.now_playing.refresh_elapsed(self.output.current_time());
        self.notify(PlayerEvent::PlaybackStateChanged);
    }

    /// Skip to the next item; no-op at the end of the playlist
    pub fn next(&mut self) {
        if let Some(index) = self.next_index() {
            self.play_index(index);
        }
    }

    /// Go back to the previous item; no-op at the head of the playlist
    pub fn previous(&mut self) {
        if let Some(index) = self.previous_index() {
            self.play_index(index);
        }
    }

    /// Move the position within the current item
    ///
    /// Not a track or state change, so no event is emitted.
    pub fn seek_to(&mut self, position: Duration) {
        if self.has_current_item() {
            self.output.seek(position);
        }
        self.now_playing.refresh_elapsed(self.output.current_time());
    }

    /// Seek to a fraction (`0.0..=1.0`) of the current item's duration
    pub fn seek_to_fraction(&mut self, fraction: f32) {
        let Some(duration) = self.duration() else {
            return;
        };
        let fraction = f64::from(fraction.clamp(0.0, 1.0));
        self.seek_to(duration.mul_f64(fraction));
    }

    // ===== Device callbacks =====

    /// Dispatch a device notification
    pub fn handle_output_event(&mut self, event: AudioOutputEvent) {
        match event {
            AudioOutputEvent::FinishedPlaying => self.on_finished_playing(),
            AudioOutputEvent::InterruptionBegan => self.on_interruption_begin(),
            AudioOutputEvent::InterruptionEnded { should_resume } => {
                self.on_interruption_end(should_resume);
            }
        }
    }

    /// Current item played to the end: advance, or end playback
    pub fn on_finished_playing(&mut self) {
        match self.next_index() {
            Some(index) => self.play_index(index),
            None => self.end_playback(),
        }
    }

    /// Device paused itself; only observers need to know
    pub fn on_interruption_begin(&mut self) {
        debug!("Playback interrupted");
        self.notify(PlayerEvent::PlaybackStateChanged);
    }

    pub fn on_interruption_end(&mut self, should_resume: bool) {
        debug!(should_resume, "Interruption ended");
        if should_resume && self.config.resume_after_interruption {
            self.play();
        }
    }

    // ===== Observers =====

    /// Subscribe to one kind of event
    ///
    /// The observer receives the controller itself and should re-query the
    /// state it needs.
    pub fn subscribe<F>(&mut self, event: PlayerEvent, observer: F) -> SubscriptionId
    where
        F: FnMut(PlayerEvent, &PlaybackController) + Send + 'static,
    {
        self.events.subscribe(event, observer)
    }

    /// Subscribe to every event
    pub fn subscribe_all<F>(&mut self, observer: F) -> SubscriptionId
    where
        F: FnMut(PlayerEvent, &PlaybackController) + Send + 'static,
    {
        self.events.subscribe_all(observer)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.events.unsubscribe(id)
    }

    /// Forward every event into a channel, for observers on another thread
    ///
    /// The subscription is dropped on the first event after the receiver
    /// is gone.
    pub fn event_channel(&mut self) -> (SubscriptionId, Receiver<PlayerEvent>) {
        let (tx, rx) = crossbeam_channel::unbounded();
        let id = self
            .events
            .subscribe_while(move |event, _| tx.send(event).is_ok());
        (id, rx)
    }

    // ===== Queries =====

    pub fn playlist(&self) -> &Playlist {
        &self.session.playlist
    }

    pub fn current_index(&self) -> Option<usize> {
        self.session.current_index
    }

    pub fn current_item(&self) -> Option<&PlaybackItem> {
        self.session
            .current_index
            .and_then(|index| self.session.playlist.get(index))
    }

    pub fn next_item(&self) -> Option<&PlaybackItem> {
        self.next_index()
            .and_then(|index| self.session.playlist.get(index))
    }

    pub fn previous_item(&self) -> Option<&PlaybackItem> {
        self.previous_index()
            .and_then(|index| self.session.playlist.get(index))
    }

    pub fn has_next(&self) -> bool {
        self.next_index().is_some()
    }

    pub fn has_previous(&self) -> bool {
        self.previous_index().is_some()
    }

    /// Position reported by the output device
    pub fn current_time(&self) -> Option<Duration> {
        self.output.current_time()
    }

    /// Duration reported by the output device
    pub fn duration(&self) -> Option<Duration> {
        self.output.duration()
    }

    pub fn is_playing(&self) -> bool {
        self.output.is_playing()
    }

    /// Transport status, mirrored from the device while an item is loaded
    pub fn status(&self) -> PlaybackStatus {
        if !self.has_current_item() {
            PlaybackStatus::Idle
        } else if self.output.is_playing() {
            PlaybackStatus::Playing
        } else {
            PlaybackStatus::Paused
        }
    }

    /// Elapsed/remaining snapshot, absent unless the device reports both times
    pub fn progress(&self) -> Option<PlaybackProgress> {
        Some(PlaybackProgress::new(
            self.output.current_time()?,
            self.output.duration()?,
        ))
    }

    pub fn config(&self) -> &PlayerConfig {
        &self.config
    }

    // ===== Internal =====

    fn has_current_item(&self) -> bool {
        self.session.current_index.is_some()
    }

    fn next_index(&self) -> Option<usize> {
        let index = self.session.current_index? + 1;
        (index < self.session.playlist.len()).then_some(index)
    }

    fn previous_index(&self) -> Option<usize> {
        self.session.current_index?.checked_sub(1)
    }

    fn replace_playlist(&mut self, playlist: Playlist) {
        info!(len = playlist.len(), "Replacing playlist");
        self.session.playlist = playlist;
        self.session.current_index = None;
    }

    /// Load and start the item at `index`; a load failure ends playback
    fn play_index(&mut self, index: usize) {
        let Some(item) = self.session.playlist.get(index) else {
            warn!(index, "Playlist position out of bounds");
            self.end_playback();
            return;
        };

        debug!(index, locator = %item.locator, "Loading item");
        if let Err(e) = self.output.load(&item.locator) {
            warn!(error = %e, "Failed to load item, ending playback");
            self.end_playback();
            return;
        }

        self.session.current_index = Some(index);
        self.output.play();

        self.sync_current_item();
        self.notify(PlayerEvent::TrackChanged);
    }

    /// Back to idle: nothing loaded, display cleared
    fn end_playback(&mut self) {
        info!("Playback ended");
        self.session.current_index = None;
        self.output.stop();

        self.sync_current_item();
        self.notify(PlayerEvent::TrackChanged);
    }

    /// Now-playing refresh and command enablement for the current item
    fn sync_current_item(&mut self) {
        let item = self
            .session
            .current_index
            .and_then(|index| self.session.playlist.get(index));

        match item {
            Some(item) => self.now_playing.refresh(
                Some(item),
                self.output.duration(),
                self.output.current_time(),
            ),
            None => self.now_playing.clear(),
        }

        let (has_previous, has_next) = (self.has_previous(), self.has_next());
        self.remote.update_enablement(has_previous, has_next);
    }

    fn notify(&mut self, event: PlayerEvent) {
        // Observers get `&self`, so the bus is detached while delivering
        let mut events = std::mem::take(&mut self.events);
        events.emit(event, self);
        self.events = events;
    }
}

impl TransportControl for PlaybackController {
    fn play(&mut self) {
        PlaybackController::play(self);
    }

    fn pause(&mut self) {
        PlaybackController::pause(self);
    }

    fn next(&mut self) {
        PlaybackController::next(self);
    }

    fn previous(&mut self) {
        PlaybackController::previous(self);
    }
}

impl std::fmt::Debug for PlaybackController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlaybackController")
            .field("session", &self.session)
            .field("now_playing", &self.now_playing)
            .field("events", &self.events)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
