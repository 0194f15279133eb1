//! # scoreboard
//!
//! A live baseball scoreboard engine: a reactive state store for a single
//! game with a cascading transition engine.
//!
//! ## Design Principles
//!
//! 1. **Immutable snapshots**: [`GameState`] is plain `Copy` data. Every
//!    transition produces a new value; the engine holds exactly one
//!    current state and no history.
//!
//! 2. **Statically wired cascade**: handler emissions are dispatched by a
//!    single loop over an explicit event chain, not implicit callback
//!    subscriptions, so the total order of one cascade is auditable and
//!    testable as one atomic step.
//!
//! 3. **Total transitions**: inputs are closed enumerations and every
//!    overflow is reset by the cascade, so no error type exists in the
//!    core.
//!
//! ## Architecture
//!
//! One external trigger (strike, ball, hit, steal, runner out) starts one
//! synchronous cascade that runs to completion before the next trigger:
//! three strikes cascade into a batter out, an out count, a possible
//! inning flip, and a possible game over. Observers only ever see
//! post-cascade states.
//!
//! ## Modules
//!
//! - `state`: The immutable game-state record and derived projections
//! - `engine`: Triggers, transition handlers, cascade dispatcher, and the
//!   [`Scoreboard`] engine instance
//! - `observe`: Subscribe/notify registry for published states
//! - `feed`: Demo snapshot generator and (with the `feed` feature) an SSE
//!   server streaming random snapshots

pub mod engine;
pub mod feed;
pub mod observe;
pub mod state;

// Re-export commonly used types
pub use crate::engine::{CascadeTrace, Followup, Hit, Runner, Scoreboard, Trigger};
pub use crate::feed::{random_snapshot, FeedRng, SnapshotFrame};
pub use crate::observe::{ObserverId, ObserverRegistry};
pub use crate::state::GameState;
