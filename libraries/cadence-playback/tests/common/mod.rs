//! Shared fakes for controller integration tests
#![allow(dead_code)]

use cadence_core::{
    AudioOutput, CadenceError, CommandStatus, MediaLocator, NowPlayingCenter, NowPlayingInfo,
    PlaybackItem, Playlist, RemoteCommand, RemoteCommandCenter, RemoteCommandHandler,
};
use cadence_playback::{PlaybackController, PlayerConfig, PlayerDependencies};
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex, Once};
use std::time::Duration;

static INIT: Once = Once::new();

pub fn init_tracing() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_test_writer()
            .with_max_level(tracing::Level::DEBUG)
            .try_init();
    });
}

/// Ordered record of everything the controller did to its collaborators
pub type Journal = Arc<Mutex<Vec<String>>>;

fn record(journal: &Journal, entry: impl Into<String>) {
    journal.lock().unwrap().push(entry.into());
}

// ===== Audio output =====

#[derive(Debug)]
pub struct OutputState {
    pub loaded: Option<MediaLocator>,
    pub playing: bool,
    pub position: Duration,
    pub duration: Duration,
    /// Locators that fail to load
    pub unplayable: HashSet<MediaLocator>,
    pub loads: Vec<MediaLocator>,
}

impl Default for OutputState {
    fn default() -> Self {
        Self {
            loaded: None,
            playing: false,
            position: Duration::ZERO,
            duration: Duration::from_secs(180),
            unplayable: HashSet::new(),
            loads: Vec::new(),
        }
    }
}

pub struct FakeOutput {
    state: Arc<Mutex<OutputState>>,
    journal: Journal,
}

impl AudioOutput for FakeOutput {
    fn load(&mut self, locator: &MediaLocator) -> cadence_core::Result<()> {
        record(&self.journal, format!("load:{}", locator));
        let mut state = self.state.lock().unwrap();
        state.loads.push(locator.clone());
        if state.unplayable.contains(locator) {
            state.loaded = None;
            state.playing = false;
            return Err(CadenceError::load(locator, "unsupported format"));
        }
        state.loaded = Some(locator.clone());
        state.playing = false;
        state.position = Duration::ZERO;
        Ok(())
    }

    fn play(&mut self) {
        record(&self.journal, "play");
        let mut state = self.state.lock().unwrap();
        state.playing = state.loaded.is_some();
    }

    fn pause(&mut self) {
        record(&self.journal, "pause");
        self.state.lock().unwrap().playing = false;
    }

    fn seek(&mut self, position: Duration) {
        record(&self.journal, "seek");
        let mut state = self.state.lock().unwrap();
        state.position = position.min(state.duration);
    }

    fn stop(&mut self) {
        record(&self.journal, "stop");
        let mut state = self.state.lock().unwrap();
        state.loaded = None;
        state.playing = false;
        state.position = Duration::ZERO;
    }

    fn current_time(&self) -> Option<Duration> {
        let state = self.state.lock().unwrap();
        state.loaded.as_ref().map(|_| state.position)
    }

    fn duration(&self) -> Option<Duration> {
        let state = self.state.lock().unwrap();
        state.loaded.as_ref().map(|_| state.duration)
    }

    fn is_playing(&self) -> bool {
        self.state.lock().unwrap().playing
    }
}

// ===== Now playing =====

pub struct FakeDisplay {
    published: Arc<Mutex<Vec<Option<NowPlayingInfo>>>>,
    journal: Journal,
}

impl NowPlayingCenter for FakeDisplay {
    fn publish(&mut self, info: Option<NowPlayingInfo>) {
        let entry = match &info {
            Some(info) => format!("publish:{}", info.title),
            None => "publish:none".to_string(),
        };
        record(&self.journal, entry);
        self.published.lock().unwrap().push(info);
    }
}

// ===== Remote commands =====

#[derive(Default)]
pub struct CommandState {
    pub handlers: HashMap<RemoteCommand, Arc<dyn RemoteCommandHandler>>,
    pub enabled: HashMap<RemoteCommand, bool>,
}

pub struct FakeCommands {
    state: Arc<Mutex<CommandState>>,
    journal: Journal,
}

impl RemoteCommandCenter for FakeCommands {
    fn add_handler(&mut self, command: RemoteCommand, handler: Arc<dyn RemoteCommandHandler>) {
        self.state.lock().unwrap().handlers.insert(command, handler);
    }

    fn set_enabled(&mut self, command: RemoteCommand, enabled: bool) {
        record(&self.journal, format!("enable:{}={}", command, enabled));
        self.state.lock().unwrap().enabled.insert(command, enabled);
    }
}

// ===== Fixture =====

/// Handles onto the fakes after they are moved into a controller
#[derive(Clone)]
pub struct Probe {
    pub output: Arc<Mutex<OutputState>>,
    pub published: Arc<Mutex<Vec<Option<NowPlayingInfo>>>>,
    pub commands: Arc<Mutex<CommandState>>,
    pub journal: Journal,
}

impl Probe {
    /// Last snapshot the display received
    pub fn last_published(&self) -> Option<NowPlayingInfo> {
        self.published.lock().unwrap().last().cloned().flatten()
    }

    pub fn publish_count(&self) -> usize {
        self.published.lock().unwrap().len()
    }

    pub fn is_enabled(&self, command: RemoteCommand) -> Option<bool> {
        self.commands.lock().unwrap().enabled.get(&command).copied()
    }

    /// Fire a remote command the way the OS command source would
    pub fn fire(&self, command: RemoteCommand) -> CommandStatus {
        let handler = self.commands.lock().unwrap().handlers.get(&command).cloned();
        match handler {
            Some(handler) => handler.handle(command),
            None => CommandStatus::CommandFailed,
        }
    }

    pub fn mark_unplayable(&self, item: &PlaybackItem) {
        self.output
            .lock()
            .unwrap()
            .unplayable
            .insert(item.locator.clone());
    }

    pub fn entries(&self) -> Vec<String> {
        self.journal.lock().unwrap().clone()
    }

    pub fn clear_journal(&self) {
        self.journal.lock().unwrap().clear();
    }

    /// Number of journal entries equal to `entry`
    pub fn count(&self, entry: &str) -> usize {
        self.journal
            .lock()
            .unwrap()
            .iter()
            .filter(|e| e.as_str() == entry)
            .count()
    }
}

/// Build a controller wired to fakes; events are journaled as `event:<kind>`
pub fn controller_with(config: PlayerConfig) -> (PlaybackController, Probe) {
    init_tracing();

    let probe = Probe {
        output: Arc::new(Mutex::new(OutputState::default())),
        published: Arc::new(Mutex::new(Vec::new())),
        commands: Arc::new(Mutex::new(CommandState::default())),
        journal: Journal::default(),
    };

    let mut controller = PlaybackController::new(
        config,
        PlayerDependencies {
            output: Box::new(FakeOutput {
                state: Arc::clone(&probe.output),
                journal: Arc::clone(&probe.journal),
            }),
            now_playing: Box::new(FakeDisplay {
                published: Arc::clone(&probe.published),
                journal: Arc::clone(&probe.journal),
            }),
            commands: Box::new(FakeCommands {
                state: Arc::clone(&probe.commands),
                journal: Arc::clone(&probe.journal),
            }),
        },
    );

    let journal = Arc::clone(&probe.journal);
    controller.subscribe_all(move |event, _| record(&journal, format!("event:{:?}", event)));

    (controller, probe)
}

pub fn controller() -> (PlaybackController, Probe) {
    controller_with(PlayerConfig::default())
}

pub fn item(name: &str) -> PlaybackItem {
    PlaybackItem::new(
        format!("file:///music/{}.mp3", name),
        format!("Track {}", name),
        "Test Album",
        "Test Artist",
        format!("{}.jpg", name),
    )
}

pub fn playlist(names: &[&str]) -> Playlist {
    names.iter().map(|name| item(name)).collect()
}
