use serde::{Deserialize, Serialize};

/// States in the election lifecycle.
///
/// The phase only ever advances `NotStarted -> Started -> Ended`; there is
/// no skip and no way back, and `Ended` is terminal.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ElectionPhase {
    /// Under construction: candidates may be registered, no votes accepted.
    NotStarted,
    /// Polling is open: votes accepted, the candidate registry is frozen.
    Started,
    /// Polling is closed for good. Only reads remain legal.
    Ended,
}

impl ElectionPhase {
    /// Has the election ever been started? Remains true once ended.
    pub fn started(self) -> bool {
        self != Self::NotStarted
    }

    /// Has the election ended?
    pub fn ended(self) -> bool {
        self == Self::Ended
    }
}
