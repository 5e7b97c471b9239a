use serde::{Deserialize, Serialize};

/// Per-identity voter registry entry.
///
/// Every identity implicitly has a record; until it is touched by
/// `authorize_voter` or a successful vote, the record is the default
/// `{authorized: false, voted: false}`. Looking up an unknown identity
/// therefore never fails.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoterRecord {
    /// Whether the authority has authorized this identity to vote.
    pub authorized: bool,
    /// Whether this identity has consumed its one vote. Never reverts.
    pub voted: bool,
}
