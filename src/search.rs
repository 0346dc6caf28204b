//! Debounced catalog search.

mod coordinator;

pub use coordinator::SearchCoordinator;
