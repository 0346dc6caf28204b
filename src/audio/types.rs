//! Commands out, clock events in: the shape of the audio boundary.

use std::sync::mpsc::Sender;

use crate::catalog::MediaRef;
use crate::error::PlayerError;

/// Signals a rendering backend emits while a track renders.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ClockEvent {
    /// Playback position advanced to the given absolute time (seconds).
    TimeProgressed(f64),
    /// Media metadata became known; carries the total duration (seconds).
    MetadataReady(f64),
    /// The current track finished rendering.
    Ended,
}

/// Channel end a backend publishes its [`ClockEvent`]s on.
pub type ClockEventSender = Sender<ClockEvent>;

/// Outbound command surface of an audio rendering backend.
///
/// Implementations are handed a [`ClockEventSender`] at construction
/// and report progress, metadata and end-of-track through it. Commands
/// must return promptly; long-running work belongs on the backend's
/// own threads.
pub trait RenderBackend {
    /// Ensure `media` is rendering.
    ///
    /// When `media` is already loaded and merely halted, rendering
    /// resumes at the current position; otherwise it starts from the
    /// beginning, superseding whatever was playing before.
    fn start_rendering(&mut self, media: &MediaRef) -> Result<(), PlayerError>;

    /// Halt rendering without discarding the current position.
    fn stop_rendering(&mut self);

    /// Relocate the playback position (absolute seconds).
    fn set_position(&mut self, seconds: f64);

    /// Set the output volume, `0.0..=1.0`.
    fn set_volume(&mut self, level: f32);
}
