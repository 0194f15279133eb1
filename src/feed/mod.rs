//! Demo snapshot feed.
//!
//! A toy generator that produces random (but invariant-respecting) game
//! snapshots, wrapped with team names as a [`SnapshotFrame`] for transport
//! to a display client. With the `feed` feature enabled, [`server`] streams
//! frames over SSE.
//!
//! None of this feeds back into the transition engine; it exists so a
//! display client can be developed against live-looking data.

mod rng;
mod snapshot;

#[cfg(feature = "feed")]
pub mod server;

pub use rng::FeedRng;
pub use snapshot::{random_snapshot, SnapshotFrame};
