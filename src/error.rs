//! Error kinds surfaced by the playback core.

use thiserror::Error;

/// Failures produced by the playback core.
///
/// None of these are fatal to the process: callers degrade to a safe,
/// visible state instead (skip becomes a no-op, a failed start falls
/// back to `Paused`). Out-of-range seek/volume inputs are silently
/// clamped and never produce an error at all.
#[derive(Debug, Error)]
pub enum PlayerError {
    /// `dequeue_head` was called on an empty queue.
    #[error("play queue is empty")]
    EmptyQueue,

    /// The rendering backend refused to start (missing file, decode
    /// failure, platform restriction).
    #[error("failed to start rendering: {0}")]
    RenderingStartFailed(String),

    /// No usable audio output device was found when the backend was
    /// constructed.
    #[error("audio output unavailable: {0}")]
    OutputUnavailable(String),
}
