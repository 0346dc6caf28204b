//! Rodio-backed rendering capability.

use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

use lofty::file::AudioFile;
use rodio::{OutputStream, OutputStreamBuilder, Sink};
use tracing::warn;

use crate::catalog::MediaRef;
use crate::error::PlayerError;

use super::sink::create_sink_at;
use super::types::{ClockEvent, ClockEventSender, RenderBackend};

const TICK: Duration = Duration::from_millis(500);

struct Shared {
    sink: Option<Sink>,
    elapsed: Duration,
    playing: bool,
    ended_sent: bool,
}

/// Renders media through rodio.
///
/// A ticker thread publishes `TimeProgressed` every [`TICK`] while
/// rendering and reports `Ended` exactly once when the sink drains.
/// Seeking rebuilds the sink and skips into the file, the same trick a
/// paused resume relies on to keep its position.
pub struct RodioBackend {
    stream: OutputStream,
    shared: Arc<Mutex<Shared>>,
    current: Option<MediaRef>,
    volume: f32,
    events: ClockEventSender,
}

impl RodioBackend {
    /// Open the default output device and start the progress ticker.
    pub fn new(events: ClockEventSender) -> Result<Self, PlayerError> {
        let mut stream = OutputStreamBuilder::open_default_stream()
            .map_err(|e| PlayerError::OutputUnavailable(e.to_string()))?;
        // rodio logs to stderr when OutputStream is dropped. Useful in
        // debugging, noisy in normal runs.
        stream.log_on_drop(false);

        let shared = Arc::new(Mutex::new(Shared {
            sink: None,
            elapsed: Duration::ZERO,
            playing: false,
            ended_sent: false,
        }));

        let ticker_shared = shared.clone();
        let ticker_events = events.clone();
        thread::spawn(move || {
            loop {
                thread::sleep(TICK);
                let Ok(mut sh) = ticker_shared.lock() else {
                    break;
                };
                if !sh.playing {
                    continue;
                }
                sh.elapsed += TICK;
                if ticker_events
                    .send(ClockEvent::TimeProgressed(sh.elapsed.as_secs_f64()))
                    .is_err()
                {
                    break;
                }
                let drained = sh.sink.as_ref().map(|s| s.empty()).unwrap_or(false);
                if drained && !sh.ended_sent {
                    sh.ended_sent = true;
                    sh.playing = false;
                    if ticker_events.send(ClockEvent::Ended).is_err() {
                        break;
                    }
                }
            }
        });

        Ok(Self {
            stream,
            shared,
            current: None,
            volume: 1.0,
            events,
        })
    }

    fn load(&mut self, media: &MediaRef, start_at: Duration) -> Result<(), PlayerError> {
        let new_sink = create_sink_at(&self.stream, media, start_at)?;
        new_sink.set_volume(self.volume);
        new_sink.play();

        if let Ok(mut sh) = self.shared.lock() {
            if let Some(old) = sh.sink.take() {
                old.stop();
            }
            sh.sink = Some(new_sink);
            sh.elapsed = start_at;
            sh.playing = true;
            sh.ended_sent = false;
        }
        self.current = Some(media.clone());
        Ok(())
    }
}

impl RenderBackend for RodioBackend {
    fn start_rendering(&mut self, media: &MediaRef) -> Result<(), PlayerError> {
        // Resume in place when the same media is loaded and not drained.
        if self.current.as_ref() == Some(media) {
            if let Ok(mut sh) = self.shared.lock() {
                let resumable =
                    !sh.ended_sent && sh.sink.as_ref().map(|s| !s.empty()).unwrap_or(false);
                if resumable {
                    if let Some(s) = sh.sink.as_ref() {
                        s.play();
                    }
                    sh.playing = true;
                    return Ok(());
                }
            }
        }

        // Fresh start: probe metadata first so the duration is known
        // before the first tick.
        match lofty::read_from_path(media.as_path()) {
            Ok(tagged) => {
                let duration = tagged.properties().duration().as_secs_f64();
                let _ = self.events.send(ClockEvent::MetadataReady(duration));
            }
            Err(e) => {
                warn!(media = %media.as_path().display(), error = %e, "metadata probe failed");
            }
        }

        self.load(media, Duration::ZERO)
    }

    fn stop_rendering(&mut self) {
        if let Ok(mut sh) = self.shared.lock() {
            if let Some(s) = sh.sink.as_ref() {
                s.pause();
            }
            sh.playing = false;
        }
    }

    fn set_position(&mut self, seconds: f64) {
        let Some(media) = self.current.clone() else {
            return;
        };
        let start_at = Duration::from_secs_f64(seconds.max(0.0));

        let was_playing = self.shared.lock().map(|sh| sh.playing).unwrap_or(false);
        match create_sink_at(&self.stream, &media, start_at) {
            Ok(new_sink) => {
                new_sink.set_volume(self.volume);
                if was_playing {
                    new_sink.play();
                }
                if let Ok(mut sh) = self.shared.lock() {
                    if let Some(old) = sh.sink.take() {
                        old.stop();
                    }
                    sh.sink = Some(new_sink);
                    sh.elapsed = start_at;
                    sh.ended_sent = false;
                }
            }
            Err(e) => {
                warn!(media = %media.as_path().display(), error = %e, "seek rebuild failed");
            }
        }
    }

    fn set_volume(&mut self, level: f32) {
        self.volume = level;
        if let Ok(sh) = self.shared.lock() {
            if let Some(s) = sh.sink.as_ref() {
                s.set_volume(level);
            }
        }
    }
}
