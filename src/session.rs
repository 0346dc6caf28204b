//! The single per-process playback session.
//!
//! `Session` is the explicit service object the rest of the
//! application drives: it owns the catalog, the playback controller
//! (with its queue) and the debounced search, and it exposes the whole
//! command surface plus read access for rendering. It is constructed
//! once and passed by reference; there is no ambient global state.

use std::time::{Duration, Instant};

use crate::audio::{ClockEvent, MediaClock};
use crate::catalog::{CatalogStore, PlaylistId, Track, TrackId};
use crate::config::Settings;
use crate::player::{PlayQueue, PlaybackController, PlaybackState};
use crate::search::SearchCoordinator;

pub struct Session {
    catalog: CatalogStore,
    controller: PlaybackController,
    search: SearchCoordinator,
}

impl Session {
    pub fn new(catalog: CatalogStore, clock: MediaClock, settings: &Settings) -> Self {
        Self {
            catalog,
            controller: PlaybackController::new(clock, &settings.playback),
            search: SearchCoordinator::new(Duration::from_millis(settings.search.debounce_ms)),
        }
    }

    // Read access for rendering.

    pub fn catalog(&self) -> &CatalogStore {
        &self.catalog
    }

    pub fn playback(&self) -> &PlaybackState {
        self.controller.state()
    }

    pub fn queue(&self) -> &PlayQueue {
        self.controller.queue()
    }

    pub fn search_query(&self) -> &str {
        self.search.query()
    }

    pub fn search_results(&self) -> &[Track] {
        self.search.results()
    }

    pub fn is_searching(&self) -> bool {
        self.search.is_searching()
    }

    // Playback commands.

    pub fn play(&mut self, track: Track) {
        self.controller.play(track);
    }

    /// Play a catalog track by id. Returns false when the id is
    /// unknown.
    pub fn play_id(&mut self, id: TrackId) -> bool {
        let Some(track) = self.catalog.track(id).cloned() else {
            return false;
        };
        self.controller.play(track);
        true
    }

    pub fn pause(&mut self) {
        self.controller.pause();
    }

    pub fn toggle_play_pause(&mut self) {
        self.controller.toggle_play_pause();
    }

    pub fn seek_to(&mut self, time: f64) {
        self.controller.seek_to(time);
    }

    pub fn set_volume_level(&mut self, level: f32) {
        self.controller.set_volume_level(level);
    }

    pub fn set_shuffled(&mut self, shuffled: bool) {
        self.controller.set_shuffled(shuffled);
    }

    pub fn set_repeated(&mut self, repeated: bool) {
        self.controller.set_repeated(repeated);
    }

    pub fn skip_to_next(&mut self) {
        self.controller.skip_to_next();
    }

    pub fn skip_to_previous(&mut self) {
        self.controller.skip_to_previous();
    }

    // Queue management.

    pub fn enqueue(&mut self, track: Track) {
        self.controller.enqueue(track);
    }

    /// Queue a catalog track by id. Returns false when the id is
    /// unknown.
    pub fn enqueue_id(&mut self, id: TrackId) -> bool {
        let Some(track) = self.catalog.track(id).cloned() else {
            return false;
        };
        self.controller.enqueue(track);
        true
    }

    pub fn clear_queue(&mut self) {
        self.controller.clear_queue();
    }

    // Search.

    /// Schedule a debounced lookup; returns its generation token.
    pub fn search(&mut self, query: &str) -> u64 {
        self.search.search(query)
    }

    // Playlist management.

    pub fn create_playlist(&mut self, name: &str, description: Option<&str>) -> PlaylistId {
        self.catalog.create_playlist(name, description)
    }

    pub fn add_to_playlist(&mut self, playlist: PlaylistId, track: TrackId) {
        self.catalog.add_to_playlist(playlist, track);
    }

    pub fn remove_from_playlist(&mut self, playlist: PlaylistId, track: TrackId) {
        self.catalog.remove_from_playlist(playlist, track);
    }

    // Event pump.

    /// Apply one rendering-backend signal.
    pub fn handle_clock(&mut self, event: ClockEvent) {
        self.controller.handle_clock(event);
    }

    /// Periodic housekeeping: completes a search lookup whose settle
    /// deadline has passed.
    pub fn poll(&mut self, now: Instant) {
        self.search.poll_due(now, &self.catalog);
    }
}
