//! External trigger vocabulary.
//!
//! The five triggers are the only way into the transition engine. Every
//! internal handler (batter out, out count, inning change, score, win) is
//! reachable solely through the cascade.

use serde::{Deserialize, Serialize};

/// A batted hit, in ascending order of bases advanced.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Hit {
    Single,
    Double,
    Triple,
    HomeRun,
}

impl Hit {
    /// Extra bases beyond first that this hit advances everyone:
    /// 0 for a single up to 3 for a home run.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Hit::Single => 0,
            Hit::Double => 1,
            Hit::Triple => 2,
            Hit::HomeRun => 3,
        }
    }
}

/// A base runner, identified by the base currently occupied.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Runner {
    First,
    Second,
    Third,
}

/// An external input event submitted to the engine.
///
/// One trigger starts one cascade; the cascade runs to completion before
/// the next trigger is accepted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Trigger {
    /// A strike against the batter.
    Strike,
    /// A ball against the batter.
    Ball,
    /// A batted hit.
    Hit(Hit),
    /// A steal attempt by the runner on the given base.
    Steal(Runner),
    /// The runner on the given base is tagged or forced out.
    RunnerOut(Runner),
}
