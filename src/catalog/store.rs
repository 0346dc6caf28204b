//! `CatalogStore`: read-only holder of the reference entities.

use super::model::{Album, AlbumId, Genre, Playlist, PlaylistId, Track, TrackId};

/// Holds the reference catalog.
///
/// Tracks, albums and genres are fixed for the process lifetime;
/// playlists may be created and edited. There is no logic here beyond
/// lookup and filter-by-field.
#[derive(Debug, Default)]
pub struct CatalogStore {
    tracks: Vec<Track>,
    playlists: Vec<Playlist>,
    albums: Vec<Album>,
    genres: Vec<Genre>,
    next_playlist_id: u64,
}

impl CatalogStore {
    pub fn new(
        tracks: Vec<Track>,
        playlists: Vec<Playlist>,
        albums: Vec<Album>,
        genres: Vec<Genre>,
    ) -> Self {
        let next_playlist_id = playlists.iter().map(|p| p.id.0 + 1).max().unwrap_or(1);
        Self {
            tracks,
            playlists,
            albums,
            genres,
            next_playlist_id,
        }
    }

    /// Catalog with tracks only, as produced by the scanner.
    pub fn from_tracks(tracks: Vec<Track>) -> Self {
        Self::new(tracks, Vec::new(), Vec::new(), Vec::new())
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    pub fn playlists(&self) -> &[Playlist] {
        &self.playlists
    }

    pub fn albums(&self) -> &[Album] {
        &self.albums
    }

    pub fn genres(&self) -> &[Genre] {
        &self.genres
    }

    pub fn track(&self, id: TrackId) -> Option<&Track> {
        self.tracks.iter().find(|t| t.id == id)
    }

    pub fn playlist(&self, id: PlaylistId) -> Option<&Playlist> {
        self.playlists.iter().find(|p| p.id == id)
    }

    /// Tracks of a playlist in playlist order; ids that no longer
    /// resolve are skipped.
    pub fn playlist_tracks(&self, id: PlaylistId) -> Vec<&Track> {
        self.playlist(id)
            .map(|p| p.tracks.iter().filter_map(|&tid| self.track(tid)).collect())
            .unwrap_or_default()
    }

    /// Tracks of an album in album order; unresolved ids are skipped.
    pub fn album_tracks(&self, id: AlbumId) -> Vec<&Track> {
        self.albums
            .iter()
            .find(|a| a.id == id)
            .map(|a| a.tracks.iter().filter_map(|&tid| self.track(tid)).collect())
            .unwrap_or_default()
    }

    /// Tracks whose genre equals `name`, case-insensitively.
    pub fn tracks_by_genre(&self, name: &str) -> Vec<&Track> {
        self.tracks
            .iter()
            .filter(|t| t.genre.eq_ignore_ascii_case(name))
            .collect()
    }

    /// Create an empty playlist and return its id.
    pub fn create_playlist(&mut self, name: &str, description: Option<&str>) -> PlaylistId {
        let id = PlaylistId(self.next_playlist_id);
        self.next_playlist_id += 1;
        self.playlists.push(Playlist {
            id,
            name: name.to_string(),
            description: description.unwrap_or_default().to_string(),
            tracks: Vec::new(),
        });
        id
    }

    /// Append a track to a playlist. Unknown playlists are ignored; the
    /// track id is not checked against the catalog.
    pub fn add_to_playlist(&mut self, playlist: PlaylistId, track: TrackId) {
        if let Some(p) = self.playlists.iter_mut().find(|p| p.id == playlist) {
            p.tracks.push(track);
        }
    }

    /// Remove every occurrence of a track from a playlist.
    pub fn remove_from_playlist(&mut self, playlist: PlaylistId, track: TrackId) {
        if let Some(p) = self.playlists.iter_mut().find(|p| p.id == playlist) {
            p.tracks.retain(|&tid| tid != track);
        }
    }
}
