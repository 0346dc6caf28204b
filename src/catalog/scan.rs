//! Directory scanner that builds the track catalog from disk.

use std::path::Path;

use lofty::file::{AudioFile, TaggedFileExt};
use lofty::tag::ItemKey;
use walkdir::WalkDir;

use crate::config::LibrarySettings;

use super::model::{MediaRef, Track, TrackId};

fn is_audio_file(path: &Path, settings: &LibrarySettings) -> bool {
    let exts: Vec<String> = settings
        .extensions
        .iter()
        .map(|e| e.trim().trim_start_matches('.').to_ascii_lowercase())
        .filter(|e| !e.is_empty())
        .collect();

    path.extension()
        .and_then(|s| s.to_str())
        .map(|ext| {
            let ext = ext.to_ascii_lowercase();
            exts.iter().any(|e| e == &ext)
        })
        .unwrap_or(false)
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|s| s.to_str())
        .map(|name| name.starts_with('.'))
        .unwrap_or(false)
}

/// Walk `dir` and build catalog tracks from every audio file found.
///
/// Metadata comes from the file's tags where available; the title
/// falls back to the file stem. Tracks are sorted by title
/// (case-insensitive) and ids are assigned in that final order.
pub fn scan(dir: &Path, settings: &LibrarySettings) -> Vec<Track> {
    let mut tracks: Vec<Track> = Vec::new();

    let mut walker = WalkDir::new(dir).follow_links(settings.follow_links);
    if !settings.recursive {
        walker = walker.max_depth(1);
    } else if let Some(depth) = settings.max_depth {
        walker = walker.max_depth(depth);
    }

    for entry in walker.into_iter().filter_map(Result::ok) {
        let path = entry.path();
        if !path.is_file() || !is_audio_file(path, settings) {
            continue;
        }
        if !settings.include_hidden && is_hidden(path) {
            continue;
        }

        let mut title = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("UNKNOWN")
            .to_string();
        let mut artist = String::new();
        let mut album = String::new();
        let mut genre = String::new();
        let mut duration_secs = 0;

        if let Ok(tagged) = lofty::read_from_path(path) {
            duration_secs = tagged.properties().duration().as_secs();

            if let Some(tag) = tagged.primary_tag().or_else(|| tagged.first_tag()) {
                if let Some(v) = tag.get_string(&ItemKey::TrackTitle) {
                    if !v.trim().is_empty() {
                        title = v.trim().to_string();
                    }
                }
                if let Some(v) = tag.get_string(&ItemKey::TrackArtist) {
                    artist = v.trim().to_string();
                }
                if let Some(v) = tag.get_string(&ItemKey::AlbumTitle) {
                    album = v.trim().to_string();
                }
                if let Some(v) = tag.get_string(&ItemKey::Genre) {
                    genre = v.trim().to_string();
                }
            }
        }

        tracks.push(Track {
            // Assigned after sorting.
            id: TrackId(0),
            title,
            artist,
            album,
            duration_secs,
            genre,
            media: MediaRef::new(path),
        });
    }

    tracks.sort_by(|a, b| a.title.to_lowercase().cmp(&b.title.to_lowercase()));
    for (i, track) in tracks.iter_mut().enumerate() {
        track.id = TrackId(i as u64 + 1);
    }
    tracks
}
