//! Mutable state of the single "now playing" session.

use crate::catalog::Track;

/// Lifecycle phase of the playback session.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum Phase {
    /// No track has ever been made current.
    #[default]
    Idle,
    /// A start was commanded; metadata has not arrived yet.
    Loading,
    Playing,
    Paused,
    /// The last track finished with nothing queued. The track stays
    /// current so callers can keep showing it.
    Ended,
}

/// The single playback session's state.
///
/// Exactly one of these exists per process; it is mutated only by
/// `PlaybackController` commands and clock-event handling.
#[derive(Debug, Clone)]
pub struct PlaybackState {
    pub current: Option<Track>,
    pub phase: Phase,
    /// Elapsed seconds into the current track, `0.0..=duration`.
    pub current_time: f64,
    /// Total seconds of the current track; 0 until metadata arrives.
    pub duration: f64,
    /// Output volume in `[0, 1]`.
    pub volume: f32,
    pub shuffled: bool,
    pub repeated: bool,
}

impl PlaybackState {
    pub fn new(volume: f32, shuffled: bool, repeated: bool) -> Self {
        Self {
            current: None,
            phase: Phase::Idle,
            current_time: 0.0,
            duration: 0.0,
            volume: volume.clamp(0.0, 1.0),
            shuffled,
            repeated,
        }
    }

    /// True while the session is audibly (or imminently) rendering.
    pub fn is_playing(&self) -> bool {
        matches!(self.phase, Phase::Playing | Phase::Loading)
    }
}
