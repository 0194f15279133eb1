//! Game state model.
//!
//! A [`GameState`] is an immutable snapshot of one game at one moment.
//! Transitions never mutate a state in place; they produce a new value.

mod game;

pub use game::GameState;
