//! Process wiring: settings, catalog scan, backend and the event loop.

use std::env;
use std::path::Path;
use std::sync::mpsc;

use crate::audio::{ClockEvent, MediaClock, RodioBackend};
use crate::catalog::{self, CatalogStore};
use crate::session::Session;

mod event_loop;
mod settings;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let settings = settings::load_settings();

    let dir = env::args().nth(1).unwrap_or_else(|| {
        env::current_dir()
            .ok()
            .and_then(|p| p.to_str().map(|s| s.to_string()))
            .unwrap_or_else(|| "Music".to_string())
    });

    let tracks = catalog::scan(Path::new(&dir), &settings.library);
    let catalog = CatalogStore::from_tracks(tracks);

    let (clock_tx, clock_rx) = mpsc::channel::<ClockEvent>();
    let backend = RodioBackend::new(clock_tx)?;
    let clock = MediaClock::new(Box::new(backend));
    let mut session = Session::new(catalog, clock, &settings);

    event_loop::run(&mut session, clock_rx)
}
