//! The game-state transition engine.
//!
//! ## Scoreboard
//!
//! The [`Scoreboard`] owns the single current [`GameState`] and serializes
//! external triggers: each trigger takes `&mut self`, runs its full cascade
//! to completion, then publishes the result to observers. No concurrent
//! cascades, no observable intermediate states.
//!
//! ## Handlers and the cascade
//!
//! Five external triggers (strike, ball, hit, steal, runner out) feed a
//! statically wired chain of pure transition functions; the remaining
//! handlers (batter out, out, inning change, score, win) are private and
//! reachable only through the cascade. See [`cascade`] for the wiring.

pub mod cascade;
mod transition;
mod trigger;

pub use cascade::{CascadeTrace, Followup};
pub use trigger::{Hit, Runner, Trigger};

use crate::observe::{ObserverId, ObserverRegistry};
use crate::state::GameState;

/// The scoreboard engine: one current game state plus its observers.
///
/// Constructed by the embedding application; there is no ambient global
/// instance.
#[derive(Default)]
pub struct Scoreboard {
    current: GameState,
    observers: ObserverRegistry,
}

impl Scoreboard {
    /// Create an engine at game start.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an engine resuming from an existing state.
    #[must_use]
    pub fn with_state(state: GameState) -> Self {
        Self {
            current: state,
            observers: ObserverRegistry::new(),
        }
    }

    /// The current published state.
    #[must_use]
    pub fn state(&self) -> GameState {
        self.current
    }

    /// Submit an external trigger: run its cascade to completion and
    /// publish the resulting state.
    ///
    /// Returns the new current state. Once the game is final, triggers
    /// leave the state untouched (observers are still notified so a
    /// late subscriber converges on the final state).
    pub fn apply(&mut self, trigger: Trigger) -> GameState {
        self.current = cascade::run(self.current, trigger);
        self.observers.notify(&self.current);
        self.current
    }

    /// Submit a trigger and also return the cascade's follow-on events.
    pub fn apply_traced(&mut self, trigger: Trigger) -> (GameState, CascadeTrace) {
        let (state, trace) = cascade::run_traced(self.current, trigger);
        self.current = state;
        self.observers.notify(&self.current);
        (state, trace)
    }

    // === External trigger points ===

    /// A strike against the batter.
    pub fn strike(&mut self) -> GameState {
        self.apply(Trigger::Strike)
    }

    /// A ball against the batter.
    pub fn ball(&mut self) -> GameState {
        self.apply(Trigger::Ball)
    }

    /// A batted hit.
    pub fn hit(&mut self, hit: Hit) -> GameState {
        self.apply(Trigger::Hit(hit))
    }

    /// A steal attempt by the runner on the given base.
    pub fn steal(&mut self, runner: Runner) -> GameState {
        self.apply(Trigger::Steal(runner))
    }

    /// The runner on the given base is out.
    pub fn runner_out(&mut self, runner: Runner) -> GameState {
        self.apply(Trigger::RunnerOut(runner))
    }

    // === Observers ===

    /// Subscribe to published states.
    ///
    /// The callback immediately receives the current state (last-value
    /// cache), then every post-cascade state until unsubscribed.
    pub fn subscribe(&mut self, observer: impl FnMut(&GameState) + 'static) -> ObserverId {
        self.observers.subscribe_with_current(observer, &self.current)
    }

    /// Remove an observer. Returns true if it was registered.
    pub fn unsubscribe(&mut self, id: ObserverId) -> bool {
        self.observers.unsubscribe(id)
    }

    /// Number of registered observers.
    #[must_use]
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }
}
