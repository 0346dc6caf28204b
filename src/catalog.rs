//! The reference catalog: data model, store and disk scanner.
//!
//! The store is a read-only holder of tracks, albums and genres;
//! playlists are the one user-editable entity. Playback and the queue
//! reference tracks by cloning them out of here, never by mutating
//! them in place.

mod model;
mod scan;
mod store;

pub use model::*;
pub use scan::scan;
pub use store::CatalogStore;
