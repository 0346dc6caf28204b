//! FIFO buffer of tracks awaiting playback.

use std::collections::VecDeque;

use crate::catalog::Track;
use crate::error::PlayerError;

/// Ordered pending tracks, first-in first-out.
///
/// The currently playing track is never a member: it is removed the
/// moment it becomes current. The same track may be queued more than
/// once.
#[derive(Debug, Default)]
pub struct PlayQueue {
    items: VecDeque<Track>,
}

impl PlayQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a track to the tail. No de-duplication.
    pub fn enqueue(&mut self, track: Track) {
        self.items.push_back(track);
    }

    /// Remove and return the head, preserving the order of the rest.
    pub fn dequeue_head(&mut self) -> Result<Track, PlayerError> {
        self.items.pop_front().ok_or(PlayerError::EmptyQueue)
    }

    /// Drop every pending track. The current track is unaffected.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Track> {
        self.items.iter()
    }
}
