use serde::{Deserialize, Serialize};

use crate::model::election::{CandidateId, Identity};

/// A candidate the authority wishes to register.
#[derive(Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCandidate {
    pub name: String,
}

/// An identity the authority wishes to authorize.
#[derive(Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorizeRequest {
    pub identity: Identity,
}

/// A vote the caller wishes to cast for a specific candidate.
#[derive(Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteRequest {
    pub candidate: CandidateId,
}
