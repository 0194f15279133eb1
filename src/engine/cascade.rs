//! The event cascade dispatcher.
//!
//! A fixed wiring graph connects handler emissions to the next handler's
//! input:
//!
//! ```text
//! strike ─→ batter out ─→ out ─→ inning change ─→ win
//! runner out ──────────→ out
//! ball ─→ hit (walk) ─→ score ─→ win
//! hit ─────────────────→ score ─→ win
//! steal ───────────────→ score ─→ win
//! ```
//!
//! One external trigger starts one cascade; the dispatcher loop runs every
//! chained emission synchronously, so intermediate states (three strikes on
//! the board, four balls) are never observable from outside. The chain is
//! strictly linear: no handler has more than one downstream subscriber and
//! no handler is re-entered within a cascade.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::state::GameState;

use super::transition;
use super::trigger::{Hit, Trigger};

/// A follow-on event emitted by one handler and consumed by the next.
///
/// These are observable in a [`CascadeTrace`] for auditing but cannot be
/// injected from outside; only a [`Trigger`] starts a cascade.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Followup {
    /// Third strike: the batter is out.
    BatterOut,
    /// An out is recorded.
    Out,
    /// Third out: the half-inning ends.
    InningChange,
    /// Fourth ball: the batter walks, advancing like a single.
    Walk,
    /// Runs crossed the plate.
    Score(u32),
    /// The game is over.
    Win,
}

/// The ordered follow-on events of one completed cascade.
///
/// The longest chain is four events (strike → batter out → out → inning
/// change → win), so the trace stays inline.
pub type CascadeTrace = SmallVec<[Followup; 4]>;

/// Run one full cascade and return the resulting state.
///
/// If the game is already final the trigger is rejected and the state is
/// returned unchanged.
#[must_use]
pub fn run(state: GameState, trigger: Trigger) -> GameState {
    run_traced(state, trigger).0
}

/// Run one full cascade, also returning the ordered follow-on events.
#[must_use]
pub fn run_traced(state: GameState, trigger: Trigger) -> (GameState, CascadeTrace) {
    let mut trace = CascadeTrace::new();

    // Post-final guard: a finished game accepts no further triggers.
    if state.is_final {
        return (state, trace);
    }

    let mut step = match trigger {
        Trigger::Strike => transition::strike(state),
        Trigger::Ball => transition::ball(state),
        Trigger::Hit(hit) => transition::hit(state, hit),
        Trigger::Steal(runner) => transition::steal(state, runner),
        Trigger::RunnerOut(runner) => transition::runner_out(state, runner),
    };

    while let Some(followup) = step.emit.take() {
        trace.push(followup);
        step = match followup {
            Followup::BatterOut => transition::batter_out(step.state),
            Followup::Out => transition::out(step.state),
            Followup::InningChange => transition::inning_change(step.state),
            Followup::Walk => transition::hit(step.state, Hit::Single),
            Followup::Score(runs) => transition::score(step.state, runs),
            Followup::Win => transition::win(step.state),
        };
    }

    (step.state, trace)
}
