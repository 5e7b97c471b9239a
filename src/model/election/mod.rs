pub use candidate::Candidate;
pub use election_core::{Election, ElectionStatus};
pub use errors::ElectionError;
pub use identity::Identity;
pub use phase::ElectionPhase;
pub use voter::VoterRecord;

mod candidate;
mod election_core;
mod errors;
mod identity;
mod phase;
mod voter;

/// Candidate ids are small sequential integers assigned by the registry.
pub type CandidateId = u32;

/// The single engine instance, shared through rocket managed state.
///
/// Each mutating operation runs under the write lock, which is what makes
/// it atomic and serialized with respect to every other mutation; reads
/// share the read lock.
pub type SharedElection = rocket::tokio::sync::RwLock<Election>;
