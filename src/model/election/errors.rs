use thiserror::Error;

use super::CandidateId;

/// Ways an engine operation can fail.
///
/// Every failure is returned to the caller before any state is touched, so
/// a failed operation leaves the election exactly as it found it. The
/// display strings are the reasons handed back to external callers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ElectionError {
    /// An administrative operation was invoked by somebody other than the
    /// election authority.
    #[error("Only the election owner can perform this action")]
    PermissionDenied,
    /// The operation is not legal in the current lifecycle phase.
    #[error("{0}")]
    InvalidState(&'static str),
    /// `start` was called with an empty candidate registry.
    #[error("Add at least one candidate before starting")]
    NoCandidates,
    /// A vote arrived before the election was started.
    #[error("Election has not started yet")]
    NotYetStarted,
    /// A vote arrived after the election was ended.
    #[error("Election has already ended")]
    AlreadyEnded,
    /// The voter registry does not authorize this identity.
    #[error("You are not authorized to vote")]
    NotAuthorized,
    /// This identity has already consumed its vote.
    #[error("You have already voted")]
    AlreadyVoted,
    /// A vote named a candidate id outside the registry.
    #[error("Invalid candidate ID")]
    InvalidCandidate,
    /// A candidate lookup named an id outside the registry.
    #[error("No candidate with ID {0}")]
    NotFound(CandidateId),
}
