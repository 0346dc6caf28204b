//! `PlaybackController`: the state machine driving the session.

use tracing::{debug, warn};

use crate::audio::{ClockEvent, MediaClock};
use crate::catalog::Track;
use crate::config::PlaybackSettings;

use super::queue::PlayQueue;
use super::state::{Phase, PlaybackState};

/// Owns the session state and the play queue, and drives the rendering
/// backend through [`MediaClock`].
///
/// Every method is synchronous and returns immediately; asynchronous
/// feedback from the backend arrives via [`handle_clock`](Self::handle_clock).
pub struct PlaybackController {
    state: PlaybackState,
    queue: PlayQueue,
    clock: MediaClock,
    /// Seconds into a track beyond which "previous" is an explicit
    /// restart rather than an attempt to step back.
    restart_threshold: f64,
}

impl PlaybackController {
    pub fn new(clock: MediaClock, settings: &PlaybackSettings) -> Self {
        Self {
            state: PlaybackState::new(settings.volume, settings.shuffle, settings.repeat),
            queue: PlayQueue::new(),
            clock,
            restart_threshold: settings.previous_restart_secs,
        }
    }

    pub fn state(&self) -> &PlaybackState {
        &self.state
    }

    pub fn queue(&self) -> &PlayQueue {
        &self.queue
    }

    /// Make `track` current and start rendering it.
    ///
    /// Calling this with the already-current track while it is playing
    /// (or still loading) is a no-op; callers wanting toggle semantics
    /// use [`toggle_play_pause`](Self::toggle_play_pause).
    pub fn play(&mut self, track: Track) {
        let already_current = self.state.current.as_ref().map(|t| t.id) == Some(track.id);
        if already_current && self.state.is_playing() {
            return;
        }
        self.begin(track);
    }

    /// Halt rendering, keeping the current position. Only meaningful
    /// while playing.
    pub fn pause(&mut self) {
        if !self.state.is_playing() {
            return;
        }
        self.state.phase = Phase::Paused;
        self.clock.stop_rendering();
    }

    /// Flip Playing <-> Paused. No-op when nothing is current.
    pub fn toggle_play_pause(&mut self) {
        if self.state.is_playing() {
            self.pause();
            return;
        }
        let Some(track) = self.state.current.clone() else {
            return;
        };
        self.command_start(&track, Phase::Playing);
    }

    /// Relocate playback. `time` is clamped to `[0, duration]` and the
    /// stored position updates optimistically instead of waiting for
    /// the next clock tick.
    pub fn seek_to(&mut self, time: f64) {
        if self.state.current.is_none() {
            return;
        }
        let time = time.clamp(0.0, self.state.duration);
        self.state.current_time = time;
        self.clock.set_position(time);
    }

    /// Set the output volume. Out-of-range input is clamped, never an
    /// error.
    pub fn set_volume_level(&mut self, level: f32) {
        let level = level.clamp(0.0, 1.0);
        self.state.volume = level;
        self.clock.set_volume(level);
    }

    /// Advance to the head of the queue. With nothing queued this is a
    /// no-op, not a stop: current track and position stay untouched.
    pub fn skip_to_next(&mut self) {
        let Ok(next) = self.queue.dequeue_head() else {
            return;
        };
        debug!(title = %next.title, "advancing to queued track");
        self.begin(next);
    }

    /// Restart the current track from the beginning, keeping the
    /// playing/paused phase as it was.
    ///
    /// Past the restart threshold that is the explicit meaning of
    /// "previous". Below it the intent would be the prior track, but no
    /// play history is retained, so stepping back degrades to the same
    /// restart.
    pub fn skip_to_previous(&mut self) {
        if self.state.current.is_none() {
            return;
        }
        if self.state.current_time <= self.restart_threshold {
            debug!("no play history; restarting current track");
        }
        self.state.current_time = 0.0;
        self.clock.set_position(0.0);
    }

    /// Record the shuffle preference. Flag only: the pending queue
    /// order is not re-sequenced.
    pub fn set_shuffled(&mut self, shuffled: bool) {
        self.state.shuffled = shuffled;
    }

    pub fn set_repeated(&mut self, repeated: bool) {
        self.state.repeated = repeated;
    }

    pub fn enqueue(&mut self, track: Track) {
        self.queue.enqueue(track);
    }

    pub fn clear_queue(&mut self) {
        self.queue.clear();
    }

    /// Apply one rendering-backend signal.
    pub fn handle_clock(&mut self, event: ClockEvent) {
        match event {
            ClockEvent::TimeProgressed(time) => {
                // The backend is authoritative here; no clamping.
                self.state.current_time = time;
            }
            ClockEvent::MetadataReady(duration) => {
                self.state.duration = duration;
                if self.state.phase == Phase::Loading {
                    self.state.phase = Phase::Playing;
                }
            }
            ClockEvent::Ended => self.on_ended(),
        }
    }

    fn on_ended(&mut self) {
        if self.state.repeated {
            let Some(track) = self.state.current.clone() else {
                return;
            };
            self.state.current_time = 0.0;
            self.clock.set_position(0.0);
            self.command_start(&track, Phase::Playing);
            return;
        }

        if let Ok(next) = self.queue.dequeue_head() {
            debug!(title = %next.title, "track ended, playing next from queue");
            self.begin(next);
            return;
        }

        // Nothing queued: come to rest, keeping the track current so
        // callers can keep showing it.
        self.state.phase = Phase::Ended;
        self.state.current_time = 0.0;
    }

    // Shared start path for play, skip and queue advance.
    fn begin(&mut self, track: Track) {
        self.state.current_time = 0.0;
        self.state.duration = 0.0;
        self.command_start(&track, Phase::Loading);
        self.state.current = Some(track);
    }

    // Command the backend; settle on `on_ok` or, on failure, Paused
    // with the position unchanged.
    fn command_start(&mut self, track: &Track, on_ok: Phase) {
        match self.clock.start_rendering(&track.media) {
            Ok(()) => {
                self.clock.set_volume(self.state.volume);
                self.state.phase = on_ok;
            }
            Err(e) => {
                warn!(title = %track.title, error = %e, "rendering start failed");
                self.state.phase = Phase::Paused;
            }
        }
    }
}
