//! `MediaClock`: the pass-through adapter in front of the backend.

use crate::catalog::MediaRef;
use crate::error::PlayerError;

use super::types::RenderBackend;

/// Direct pass-through between `PlaybackController` and the rendering
/// backend.
///
/// Commands are forwarded verbatim, never buffered or reordered;
/// events travel the other way on the channel the backend was built
/// with. The indirection exists so controller logic never names a
/// concrete rendering technology.
pub struct MediaClock {
    backend: Box<dyn RenderBackend>,
}

impl MediaClock {
    pub fn new(backend: Box<dyn RenderBackend>) -> Self {
        Self { backend }
    }

    pub fn start_rendering(&mut self, media: &MediaRef) -> Result<(), PlayerError> {
        self.backend.start_rendering(media)
    }

    pub fn stop_rendering(&mut self) {
        self.backend.stop_rendering();
    }

    pub fn set_position(&mut self, seconds: f64) {
        self.backend.set_position(seconds);
    }

    pub fn set_volume(&mut self, level: f32) {
        self.backend.set_volume(level);
    }
}
