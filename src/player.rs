//! Playback core: session state, play queue and the controller.

mod controller;
mod queue;
mod state;

pub use controller::PlaybackController;
pub use queue::PlayQueue;
pub use state::{Phase, PlaybackState};
