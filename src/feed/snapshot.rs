//! Random snapshot generation and the wire record.

use serde::{Deserialize, Serialize};

use crate::state::GameState;

use super::rng::FeedRng;

/// A game snapshot wrapped with team names, as sent to display clients.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotFrame {
    /// Away team short name.
    pub away_team: String,

    /// Home team short name.
    pub home_team: String,

    /// The snapshot itself.
    pub data: GameState,
}

impl SnapshotFrame {
    /// Wrap a state with team names.
    pub fn new(away_team: impl Into<String>, home_team: impl Into<String>, data: GameState) -> Self {
        Self {
            away_team: away_team.into(),
            home_team: home_team.into(),
            data,
        }
    }
}

/// Generate a random mid-game snapshot.
///
/// Scores up to 14, half-inning anywhere from the 1st through extras, and
/// counts within their at-rest bounds, so the snapshot looks like a state
/// the engine could actually publish.
#[must_use]
pub fn random_snapshot(rng: &mut FeedRng) -> GameState {
    GameState {
        away_score: rng.gen_range(0..15),
        home_score: rng.gen_range(0..15),
        half_inning: rng.gen_range(0..21),
        base1: rng.gen_bool(0.5),
        base2: rng.gen_bool(0.5),
        base3: rng.gen_bool(0.5),
        balls: rng.gen_range(0..4) as u8,
        strikes: rng.gen_range(0..3) as u8,
        outs: rng.gen_range(0..3) as u8,
        is_final: false,
    }
}
