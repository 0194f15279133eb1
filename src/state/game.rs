//! The scoreboard state record.
//!
//! ## GameState
//!
//! One game at one moment:
//! - Score per team
//! - Half-inning counter (even = away batting, odd = home batting)
//! - Base occupancy
//! - Balls / strikes / outs
//! - Final flag
//!
//! The struct is plain `Copy` data. Every transition replaces the whole
//! value; the engine holds exactly one current state and no history.
//!
//! ## Count bounds
//!
//! At rest (between cascades) `balls <= 3`, `strikes <= 2`, `outs <= 2`.
//! The overflow values (4 balls, 3 strikes, 3 outs) exist only transiently
//! inside a cascade, between the handler that increments the count and the
//! follow-on handler that resets it.

use serde::{Deserialize, Serialize};

/// Immutable snapshot of a single baseball game.
///
/// Serialized with the wire field names used by display clients
/// (`awayScore`, `halfInning`, `final`, ...).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameState {
    /// Runs scored by the away team.
    pub away_score: u32,

    /// Runs scored by the home team.
    pub home_score: u32,

    /// Half-inning counter, starting at 0 (top of the 1st).
    /// Even = away batting ("top"), odd = home batting ("bottom").
    pub half_inning: u32,

    /// Runner on first base.
    pub base1: bool,

    /// Runner on second base.
    pub base2: bool,

    /// Runner on third base.
    pub base3: bool,

    /// Balls against the current batter.
    pub balls: u8,

    /// Strikes against the current batter.
    pub strikes: u8,

    /// Outs in the current half-inning.
    pub outs: u8,

    /// True once the game has ended. No transition may change the
    /// score or half-inning afterwards.
    #[serde(rename = "final")]
    pub is_final: bool,
}

impl GameState {
    /// Half-inning index at which the top of the 9th begins
    /// (`inning = 16 / 2 + 1 = 9`).
    pub const TOP_OF_THE_9TH: u32 = 16;

    /// Create the state at game start: 0-0, top of the 1st, bases empty.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // === Derived projections ===

    /// Whether the away team is batting (even half-inning).
    #[must_use]
    pub const fn away_is_batting(&self) -> bool {
        self.half_inning % 2 == 0
    }

    /// Whether the home team is batting.
    #[must_use]
    pub const fn home_is_batting(&self) -> bool {
        !self.away_is_batting()
    }

    /// Whether this is the top half of an inning.
    #[must_use]
    pub const fn top_inning(&self) -> bool {
        self.away_is_batting()
    }

    /// Current inning number, starting at 1.
    #[must_use]
    pub const fn inning(&self) -> u32 {
        self.half_inning / 2 + 1
    }

    /// Whether ending the current half-inning ends the game.
    ///
    /// - The away team has finished its final plate appearance (bottom of
    ///   the 9th or later) while leading: the home team already had its
    ///   chance, so the game is over.
    /// - The home team leads at or past the top of the 9th: walk-off, the
    ///   half-inning does not need to finish.
    #[must_use]
    pub const fn game_over_on_inning_change(&self) -> bool {
        if self.half_inning > Self::TOP_OF_THE_9TH
            && self.away_score > self.home_score
            && !self.away_is_batting()
        {
            return true;
        }
        self.half_inning >= Self::TOP_OF_THE_9TH && self.home_score > self.away_score
    }
}
