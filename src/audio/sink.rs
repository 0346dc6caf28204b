//! Utilities for creating `rodio` sinks from media locators.

use std::fs::File;
use std::io::BufReader;
use std::time::Duration;

use rodio::{Decoder, OutputStream, Sink, Source};

use crate::catalog::MediaRef;
use crate::error::PlayerError;

/// Create a paused `Sink` for `media` that starts playback at
/// `start_at`. Open/decode failures surface as `RenderingStartFailed`.
pub(super) fn create_sink_at(
    handle: &OutputStream,
    media: &MediaRef,
    start_at: Duration,
) -> Result<Sink, PlayerError> {
    let path = media.as_path();
    let file = File::open(path)
        .map_err(|e| PlayerError::RenderingStartFailed(format!("{}: {e}", path.display())))?;

    let source = Decoder::new(BufReader::new(file))
        .map_err(|e| PlayerError::RenderingStartFailed(format!("{}: {e}", path.display())))?
        // `skip_duration` is our seeking primitive; even Duration::ZERO is fine.
        .skip_duration(start_at);

    let sink = Sink::connect_new(handle.mixer());
    sink.append(source);
    sink.pause();
    Ok(sink)
}
