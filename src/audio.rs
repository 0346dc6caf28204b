//! The rendering-capability boundary.
//!
//! `RenderBackend` is the outbound command surface, `ClockEvent` the
//! inbound signal vocabulary, and `MediaClock` the pass-through seam
//! that keeps the controller independent of the concrete rendering
//! technology. `RodioBackend` is the shipped implementation.

mod backend;
mod clock;
mod sink;
mod types;

pub use backend::RodioBackend;
pub use clock::MediaClock;
pub use types::{ClockEvent, ClockEventSender, RenderBackend};
