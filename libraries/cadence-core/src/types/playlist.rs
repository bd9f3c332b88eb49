//! Playlist domain type

use crate::types::PlaybackItem;
use serde::{Deserialize, Serialize};
use std::ops::Index;

/// Ordered sequence of playback items
///
/// Navigation is positional. Duplicate locators are allowed; lookups by
/// item resolve to the first occurrence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Playlist {
    items: Vec<PlaybackItem>,
}

impl Playlist {
    /// Create a new playlist
    pub fn new(items: Vec<PlaybackItem>) -> Self {
        Self { items }
    }

    /// Create an empty playlist
    pub fn empty() -> Self {
        Self::default()
    }

    /// Number of items
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True if the playlist has no items
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Item at `index`, if in bounds
    pub fn get(&self, index: usize) -> Option<&PlaybackItem> {
        self.items.get(index)
    }

    /// Head of the playlist
    pub fn first(&self) -> Option<&PlaybackItem> {
        self.items.first()
    }

    /// Tail of the playlist
    pub fn last(&self) -> Option<&PlaybackItem> {
        self.items.last()
    }

    /// Position of the first item whose locator matches `item`
    pub fn position_of(&self, item: &PlaybackItem) -> Option<usize> {
        self.items.iter().position(|candidate| candidate == item)
    }

    /// True if an item with the same locator is present
    pub fn contains(&self, item: &PlaybackItem) -> bool {
        self.position_of(item).is_some()
    }

    /// Iterate items in order
    pub fn iter(&self) -> std::slice::Iter<'_, PlaybackItem> {
        self.items.iter()
    }

    /// Items as a slice
    pub fn as_slice(&self) -> &[PlaybackItem] {
        &self.items
    }
}

impl Index<usize> for Playlist {
    type Output = PlaybackItem;

    fn index(&self, index: usize) -> &Self::Output {
        &self.items[index]
    }
}

impl From<Vec<PlaybackItem>> for Playlist {
    fn from(items: Vec<PlaybackItem>) -> Self {
        Self::new(items)
    }
}

impl FromIterator<PlaybackItem> for Playlist {
    fn from_iter<I: IntoIterator<Item = PlaybackItem>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Playlist {
    type Item = &'a PlaybackItem;
    type IntoIter = std::slice::Iter<'a, PlaybackItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
