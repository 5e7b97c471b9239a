use serde::{Deserialize, Serialize};

use super::CandidateId;

/// A single entry in the candidate registry.
///
/// The id is assigned at registration and never changes; the vote count
/// only ever grows, by exactly one per accepted vote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    /// Registry id, contiguous from zero in registration order.
    pub id: CandidateId,
    /// Ballot name.
    pub name: String,
    /// Number of votes cast for this candidate so far.
    pub vote_count: u64,
}

impl Candidate {
    /// Create a new zero-tally candidate.
    pub fn new(id: CandidateId, name: String) -> Self {
        Self {
            id,
            name,
            vote_count: 0,
        }
    }
}
