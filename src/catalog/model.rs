//! Catalog data model: tracks, playlists, albums and genres.

use std::path::{Path, PathBuf};

/// Identity of a [`Track`] within the catalog.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TrackId(pub u64);

/// Identity of a [`Playlist`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct PlaylistId(pub u64);

/// Identity of an [`Album`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct AlbumId(pub u64);

/// Identity of a [`Genre`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct GenreId(pub u64);

/// Opaque locator handed to the rendering backend.
///
/// The playback core never looks inside it; only the backend knows how
/// to turn it into audio.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaRef(PathBuf);

impl MediaRef {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self(path.into())
    }

    pub fn as_path(&self) -> &Path {
        &self.0
    }
}

/// An addressable piece of media with its metadata.
///
/// Immutable once created; the catalog owns the canonical copy and the
/// queue/playback state hold clones.
#[derive(Debug, Clone)]
pub struct Track {
    pub id: TrackId,
    pub title: String,
    pub artist: String,
    pub album: String,
    /// Tagged duration in whole seconds; 0 when unknown.
    pub duration_secs: u64,
    pub genre: String,
    pub media: MediaRef,
}

/// User-curated ordered list of track ids.
///
/// Lives for the process lifetime (no persistence); tracks may be
/// appended or removed after creation.
#[derive(Debug, Clone)]
pub struct Playlist {
    pub id: PlaylistId,
    pub name: String,
    pub description: String,
    pub tracks: Vec<TrackId>,
}

#[derive(Debug, Clone)]
pub struct Album {
    pub id: AlbumId,
    pub title: String,
    pub artist: String,
    pub year: u32,
    pub tracks: Vec<TrackId>,
}

#[derive(Debug, Clone)]
pub struct Genre {
    pub id: GenreId,
    pub name: String,
}
