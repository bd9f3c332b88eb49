//! Playback Events
//!
//! Synchronous, ordered fan-out of controller notifications.
//! Events carry no payload: observers receive the source alongside the
//! event and re-query whatever state they need.

use serde::{Deserialize, Serialize};

/// Events emitted by the playback controller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerEvent {
    /// Current item changed (new track, or nothing playing anymore)
    TrackChanged,

    /// Transport state changed (play, pause, interruption)
    PlaybackStateChanged,
}

/// Handle returned by `EventBus::subscribe`, used to unsubscribe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Observer callback; receives the event and the emitting source
///
/// Returning false drops the subscription after delivery.
pub type Observer<S> = Box<dyn FnMut(PlayerEvent, &S) -> bool + Send>;

struct Subscription<S> {
    id: SubscriptionId,
    /// `None` listens to every event
    filter: Option<PlayerEvent>,
    observer: Observer<S>,
}

/// Observer registry with insertion-ordered delivery
pub struct EventBus<S> {
    subscriptions: Vec<Subscription<S>>,
    next_id: u64,
}

impl<S> Default for EventBus<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> EventBus<S> {
    pub fn new() -> Self {
        Self {
            subscriptions: Vec::new(),
            next_id: 0,
        }
    }

    /// Listen to one kind of event
    pub fn subscribe<F>(&mut self, event: PlayerEvent, observer: F) -> SubscriptionId
    where
        F: FnMut(PlayerEvent, &S) + Send + 'static,
    {
        self.insert(Some(event), keep_subscribed(observer))
    }

    /// Listen to every event
    pub fn subscribe_all<F>(&mut self, observer: F) -> SubscriptionId
    where
        F: FnMut(PlayerEvent, &S) + Send + 'static,
    {
        self.insert(None, keep_subscribed(observer))
    }

    /// Listen to every event until the observer returns false
    pub fn subscribe_while<F>(&mut self, observer: F) -> SubscriptionId
    where
        F: FnMut(PlayerEvent, &S) -> bool + Send + 'static,
    {
        self.insert(None, Box::new(observer))
    }

    /// Remove a subscription
    ///
    /// Returns false if `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscriptions.len();
        self.subscriptions.retain(|sub| sub.id != id);
        self.subscriptions.len() != before
    }

    pub fn len(&self) -> usize {
        self.subscriptions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subscriptions.is_empty()
    }

    /// Deliver `event` to every matching observer, in subscription order
    pub fn emit(&mut self, event: PlayerEvent, source: &S) {
        self.subscriptions.retain_mut(|sub| {
            if sub.filter.is_some_and(|filter| filter != event) {
                return true;
            }
            (sub.observer)(event, source)
        });
    }

    fn insert(&mut self, filter: Option<PlayerEvent>, observer: Observer<S>) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.subscriptions.push(Subscription {
            id,
            filter,
            observer,
        });
        id
    }
}

fn keep_subscribed<S, F>(mut observer: F) -> Observer<S>
where
    F: FnMut(PlayerEvent, &S) + Send + 'static,
{
    Box::new(move |event, source| {
        observer(event, source);
        true
    })
}

impl<S> std::fmt::Debug for EventBus<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field("subscriptions", &self.subscriptions.len())
            .finish()
    }
}
