//! Cascade integration tests.
//!
//! These drive the public `Scoreboard` API through the scenarios a real
//! game produces: strikeouts, walks, inning flips, walk-offs, and the
//! post-final freeze.

use scoreboard::{Followup, GameState, Hit, Runner, Scoreboard, Trigger};

#[test]
fn test_three_strikes_records_an_out() {
    let mut board = Scoreboard::new();
    board.ball();
    board.strike();
    board.strike();

    let state = board.strike();

    assert_eq!(state.balls, 0);
    assert_eq!(state.strikes, 0);
    assert_eq!(state.outs, 1);
}

#[test]
fn test_four_balls_walks_the_batter() {
    let mut board = Scoreboard::new();
    for _ in 0..4 {
        board.ball();
    }

    let state = board.state();
    assert_eq!(state.balls, 0);
    assert_eq!(state.strikes, 0);
    assert!(state.base1);
}

#[test]
fn test_walk_equals_single() {
    // From the same base state, four balls and a single must agree.
    let start = GameState {
        base1: true,
        base2: true,
        base3: true,
        ..GameState::new()
    };

    let mut walked = Scoreboard::with_state(start);
    for _ in 0..4 {
        walked.ball();
    }

    let mut singled = Scoreboard::with_state(start);
    singled.hit(Hit::Single);

    assert_eq!(walked.state(), singled.state());
    assert_eq!(walked.state().away_score, 1); // forced run from third
}

#[test]
fn test_three_outs_flip_half_inning() {
    let mut board = Scoreboard::with_state(GameState {
        base1: true,
        balls: 2,
        ..GameState::new()
    });

    board.runner_out(Runner::First);
    board.apply(Trigger::RunnerOut(Runner::First)); // base already empty, still an out
    let before_flip = board.state();
    assert_eq!(before_flip.outs, 2);
    assert_eq!(before_flip.half_inning, 0);

    // Third out via a strikeout.
    board.strike();
    board.strike();
    let state = board.strike();

    assert_eq!(state.half_inning, 1);
    assert!(state.home_is_batting());
    assert_eq!((state.balls, state.strikes, state.outs), (0, 0, 0));
    assert!(!state.base1 && !state.base2 && !state.base3);
}

#[test]
fn test_bases_loaded_home_run_scores_four() {
    let mut board = Scoreboard::with_state(GameState {
        base1: true,
        base2: true,
        base3: true,
        ..GameState::new()
    });

    let state = board.hit(Hit::HomeRun);

    assert_eq!(state.away_score, 4);
    assert!(!state.base1 && !state.base2 && !state.base3);
}

#[test]
fn test_steal_third_always_scores_one() {
    let mut board = Scoreboard::with_state(GameState {
        base1: true,
        base2: true,
        base3: true,
        ..GameState::new()
    });

    let state = board.steal(Runner::Third);

    assert_eq!(state.away_score, 1);
    assert!(!state.base3);
    assert!(state.base1 && state.base2);
}

#[test]
fn test_failed_steal_changes_nothing() {
    let start = GameState {
        base1: true,
        base2: true,
        ..GameState::new()
    };
    let mut board = Scoreboard::with_state(start);

    let state = board.steal(Runner::First);

    // No advance and, in this model, no out either.
    assert_eq!(state, start);
}

#[test]
fn test_walk_off_hit_ends_game() {
    // Bottom of the 9th, away up 3-3; a double with a runner on second wins it.
    let mut board = Scoreboard::with_state(GameState {
        half_inning: 17,
        away_score: 3,
        home_score: 3,
        base2: true,
        ..GameState::new()
    });

    let (state, trace) = board.apply_traced(Trigger::Hit(Hit::Double));

    assert_eq!(trace.as_slice(), &[Followup::Score(1), Followup::Win]);
    assert_eq!(state.home_score, 4);
    assert!(state.is_final);
}

#[test]
fn test_walk_off_steal_of_home() {
    let mut board = Scoreboard::with_state(GameState {
        half_inning: 17,
        away_score: 2,
        home_score: 2,
        base3: true,
        ..GameState::new()
    });

    let state = board.steal(Runner::Third);

    assert_eq!(state.home_score, 3);
    assert!(state.is_final);
}

#[test]
fn test_away_win_after_home_final_out() {
    // Bottom of the 9th, away ahead: the third out ends the game without
    // advancing the half-inning.
    let mut board = Scoreboard::with_state(GameState {
        half_inning: 17,
        away_score: 5,
        home_score: 3,
        outs: 2,
        strikes: 2,
        ..GameState::new()
    });

    let (state, trace) = board.apply_traced(Trigger::Strike);

    assert_eq!(
        trace.as_slice(),
        &[
            Followup::BatterOut,
            Followup::Out,
            Followup::InningChange,
            Followup::Win
        ]
    );
    assert_eq!(state.half_inning, 17);
    assert!(state.is_final);
}

#[test]
fn test_tie_game_goes_to_extras() {
    let mut board = Scoreboard::with_state(GameState {
        half_inning: 17,
        away_score: 4,
        home_score: 4,
        outs: 2,
        ..GameState::new()
    });

    board.runner_out(Runner::First);
    let state = board.state();

    assert_eq!(state.half_inning, 18); // top of the 10th
    assert!(!state.is_final);
}

#[test]
fn test_post_final_freeze() {
    let mut board = Scoreboard::with_state(GameState {
        half_inning: 17,
        away_score: 3,
        home_score: 3,
        ..GameState::new()
    });
    board.hit(Hit::HomeRun);
    let finished = board.state();
    assert!(finished.is_final);

    board.strike();
    board.ball();
    board.hit(Hit::HomeRun);
    board.steal(Runner::Third);
    board.runner_out(Runner::First);

    assert_eq!(board.state(), finished);
}

#[test]
fn test_no_triggers_leaves_state_identical() {
    let board = Scoreboard::new();
    assert_eq!(board.state(), GameState::new());
    assert_eq!(board.state(), board.state());
}

#[test]
fn test_scripted_half_inning() {
    let mut board = Scoreboard::new();

    // Leadoff single, steal of second, then a run-scoring double.
    board.hit(Hit::Single);
    board.steal(Runner::First);
    let state = board.hit(Hit::Double);
    assert_eq!(state.away_score, 1);
    assert!(state.base2);

    // Three strikeouts end the half.
    for _ in 0..9 {
        board.strike();
    }
    let state = board.state();

    assert_eq!(state.half_inning, 1);
    assert_eq!(state.away_score, 1);
    assert_eq!(state.home_score, 0);
    assert!(!state.base2);
}

#[test]
fn test_observers_see_only_published_states() {
    use std::cell::RefCell;
    use std::rc::Rc;

    let mut board = Scoreboard::new();
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    board.subscribe(move |state| sink.borrow_mut().push(*state));

    for _ in 0..4 {
        board.ball(); // walk cascade on the fourth
    }
    for _ in 0..3 {
        board.strike(); // strikeout cascade on the third
    }

    for state in seen.borrow().iter() {
        assert!(state.balls <= 3, "observer saw mid-cascade state: {state:?}");
        assert!(state.strikes <= 2);
        assert!(state.outs <= 2);
    }
}
