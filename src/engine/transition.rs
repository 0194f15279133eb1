//! Individual transition handlers.
//!
//! Each handler is a pure, total function from the current state (and
//! sometimes a typed input) to a [`Step`]: the next state plus an optional
//! follow-on event for the cascade dispatcher. No handler fails; inputs are
//! closed enumerations, so no invalid-input path exists.
//!
//! Handlers that overflow a count (4 balls, 3 strikes, 3 outs) return the
//! overflow value in their state; the emitted follow-on handler is the one
//! that resets it. The dispatcher guarantees the follow-on runs before any
//! observer sees the intermediate state.

use crate::state::GameState;

use super::cascade::Followup;
use super::trigger::{Hit, Runner};

/// Result of one transition: the new state and an optional emission.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Step {
    pub(crate) state: GameState,
    pub(crate) emit: Option<Followup>,
}

impl Step {
    fn new(state: GameState) -> Self {
        Self { state, emit: None }
    }

    fn emitting(state: GameState, followup: Followup) -> Self {
        Self { state, emit: Some(followup) }
    }
}

/// A strike against the batter. Three strikes put the batter out.
pub(crate) fn strike(state: GameState) -> Step {
    let strikes = state.strikes + 1;
    let next = GameState { strikes, ..state };
    if strikes > 2 {
        Step::emitting(next, Followup::BatterOut)
    } else {
        Step::new(next)
    }
}

/// The batter is out: the count resets and an out is recorded.
pub(crate) fn batter_out(state: GameState) -> Step {
    let next = GameState {
        balls: 0,
        strikes: 0,
        ..state
    };
    Step::emitting(next, Followup::Out)
}

/// A runner is tagged or forced out: the base clears and an out is recorded.
pub(crate) fn runner_out(state: GameState, runner: Runner) -> Step {
    let next = GameState {
        base1: if matches!(runner, Runner::First) { false } else { state.base1 },
        base2: if matches!(runner, Runner::Second) { false } else { state.base2 },
        base3: if matches!(runner, Runner::Third) { false } else { state.base3 },
        ..state
    };
    Step::emitting(next, Followup::Out)
}

/// Record an out. The third out ends the half-inning.
pub(crate) fn out(state: GameState) -> Step {
    let outs = state.outs + 1;
    let next = GameState { outs, ..state };
    if outs > 2 {
        Step::emitting(next, Followup::InningChange)
    } else {
        Step::new(next)
    }
}

/// Flip to the next half-inning, resetting counts and bases.
///
/// If the game-over predicate holds, the half-inning counter stays where it
/// is and a win is emitted instead of advancing.
pub(crate) fn inning_change(state: GameState) -> Step {
    let game_over = state.game_over_on_inning_change();
    let next = GameState {
        half_inning: if game_over { state.half_inning } else { state.half_inning + 1 },
        balls: 0,
        strikes: 0,
        outs: 0,
        base1: false,
        base2: false,
        base3: false,
        ..state
    };
    if game_over {
        Step::emitting(next, Followup::Win)
    } else {
        Step::new(next)
    }
}

/// A ball against the batter. Four balls walk the batter, which advances
/// runners exactly like a single.
pub(crate) fn ball(state: GameState) -> Step {
    let balls = state.balls + 1;
    let next = GameState { balls, ..state };
    if balls > 3 {
        Step::emitting(next, Followup::Walk)
    } else {
        Step::new(next)
    }
}

/// A batted hit: every runner (and the batter) advances by the hit's bases.
///
/// Conceptually the occupancy list `[base3, base2, base1, batter]` is pushed
/// forward; every occupant pushed past third scores. The new occupancy is a
/// 3-wide window over `[base2, base1, batter, -, -, -]` starting at the hit
/// index, read as `[base3, base2, base1]`.
pub(crate) fn hit(state: GameState, hit: Hit) -> Step {
    let index = hit.index();

    let occupants = [state.base3, state.base2, state.base1, true];
    let runs_scored = occupants[..=index].iter().filter(|&&occupied| occupied).count() as u32;

    let pushed = [state.base2, state.base1, true, false, false, false];
    let next = GameState {
        balls: 0,
        strikes: 0,
        base3: pushed[index],
        base2: pushed[index + 1],
        base1: pushed[index + 2],
        ..state
    };

    if runs_scored > 0 {
        Step::emitting(next, Followup::Score(runs_scored))
    } else {
        Step::new(next)
    }
}

/// A steal attempt. Succeeds when the destination base is open; a steal of
/// home always succeeds and scores. A failed attempt changes nothing — no
/// out is charged in this model.
pub(crate) fn steal(state: GameState, runner: Runner) -> Step {
    let stolen = match runner {
        Runner::First => !state.base2,
        Runner::Second => !state.base3,
        Runner::Third => true,
    };

    if !stolen {
        return Step::new(state);
    }

    let next = match runner {
        Runner::First => GameState {
            base1: false,
            base2: true,
            ..state
        },
        Runner::Second => GameState {
            base2: false,
            base3: true,
            ..state
        },
        Runner::Third => GameState {
            base3: false,
            ..state
        },
    };

    if matches!(runner, Runner::Third) {
        Step::emitting(next, Followup::Score(1))
    } else {
        Step::new(next)
    }
}

/// Add runs to the batting team's score.
///
/// The home team taking the lead in the bottom of the 9th or later ends the
/// game immediately (walk-off).
pub(crate) fn score(state: GameState, runs_scored: u32) -> Step {
    let away_score = if state.away_is_batting() {
        state.away_score + runs_scored
    } else {
        state.away_score
    };
    let home_score = if state.home_is_batting() {
        state.home_score + runs_scored
    } else {
        state.home_score
    };

    let next = GameState {
        away_score,
        home_score,
        ..state
    };

    let walk_off = state.home_is_batting()
        && home_score > away_score
        && state.half_inning > GameState::TOP_OF_THE_9TH;
    if walk_off {
        Step::emitting(next, Followup::Win)
    } else {
        Step::new(next)
    }
}

/// Mark the game final. Terminal: never emits.
pub(crate) fn win(state: GameState) -> Step {
    Step::new(GameState {
        is_final: true,
        ..state
    })
}
