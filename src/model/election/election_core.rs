use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::model::audit::{AuditEvent, AuditRecord, AuditTrail};

use super::{Candidate, CandidateId, ElectionError, ElectionPhase, Identity, VoterRecord};

/// A snapshot of the election's top-level progress, as shown to the world.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElectionStatus {
    /// True from the moment the election starts, including after it ends.
    pub started: bool,
    /// True once the election has ended.
    pub ended: bool,
    /// Total number of accepted votes across all candidates.
    pub total_votes: u64,
}

/// The election engine.
///
/// A single-authority election over a fixed name: a candidate registry that
/// is append-only before the start, a lazily-materialized voter registry,
/// and a vote tally, all gated by a strict three-phase lifecycle. Every
/// mutating operation either fully applies and appends one audit record, or
/// fails before touching anything.
///
/// The engine is a plain synchronous state transformer; whoever owns it is
/// responsible for serializing mutating calls (in this server, the write
/// half of the lock it lives behind).
#[derive(Debug)]
pub struct Election {
    /// The only identity allowed to administer the election. Fixed at creation.
    authority: Identity,
    /// Election name. Fixed at creation.
    name: String,
    phase: ElectionPhase,
    candidates: Vec<Candidate>,
    voters: HashMap<Identity, VoterRecord>,
    total_votes: u64,
    audit: AuditTrail,
}

impl Election {
    /// Create a new election in the `NotStarted` phase, with empty
    /// registries and an empty audit trail.
    pub fn new(authority: Identity, name: String) -> Self {
        Self {
            authority,
            name,
            phase: ElectionPhase::NotStarted,
            candidates: Vec::new(),
            voters: HashMap::new(),
            total_votes: 0,
            audit: AuditTrail::new(),
        }
    }

    /// Fail with `PermissionDenied` unless `caller` is the authority.
    fn check_authority(&self, caller: &Identity) -> Result<(), ElectionError> {
        if caller == &self.authority {
            Ok(())
        } else {
            Err(ElectionError::PermissionDenied)
        }
    }

    /// Register a candidate and return its id.
    ///
    /// Authority-only, and only legal before the election starts; ids are
    /// assigned contiguously from zero in registration order.
    pub fn add_candidate(
        &mut self,
        caller: &Identity,
        name: String,
    ) -> Result<CandidateId, ElectionError> {
        self.check_authority(caller)?;
        if self.phase != ElectionPhase::NotStarted {
            return Err(ElectionError::InvalidState(
                "Cannot add candidates after election has started",
            ));
        }

        let id = self.candidates.len() as CandidateId;
        self.candidates.push(Candidate::new(id, name.clone()));
        self.audit.append(AuditEvent::CandidateAdded { id, name });
        Ok(id)
    }

    /// Authorize an identity to vote.
    ///
    /// Authority-only. Re-authorizing an already-authorized identity is a
    /// no-op success and appends no audit record. Late authorization while
    /// the election is running is deliberately legal; once the election has
    /// ended the authorization could never be consumed, so it is rejected.
    pub fn authorize_voter(
        &mut self,
        caller: &Identity,
        identity: Identity,
    ) -> Result<(), ElectionError> {
        self.check_authority(caller)?;
        if self.phase == ElectionPhase::Ended {
            return Err(ElectionError::InvalidState(
                "Cannot authorize voters after election has ended",
            ));
        }

        let record = self.voters.entry(identity.clone()).or_default();
        if record.authorized {
            return Ok(());
        }
        record.authorized = true;
        self.audit.append(AuditEvent::VoterAuthorized { identity });
        Ok(())
    }

    /// Open the election for voting.
    ///
    /// Authority-only, legal only from `NotStarted`, and requires at least
    /// one registered candidate.
    pub fn start(&mut self, caller: &Identity) -> Result<(), ElectionError> {
        self.check_authority(caller)?;
        if self.phase != ElectionPhase::NotStarted {
            return Err(ElectionError::InvalidState("Election has already started"));
        }
        if self.candidates.is_empty() {
            return Err(ElectionError::NoCandidates);
        }

        self.phase = ElectionPhase::Started;
        self.audit.append(AuditEvent::ElectionStarted);
        Ok(())
    }

    /// Close the election for good.
    ///
    /// Authority-only and legal only from `Started`; `Ended` is terminal.
    pub fn end(&mut self, caller: &Identity) -> Result<(), ElectionError> {
        self.check_authority(caller)?;
        if self.phase != ElectionPhase::Started {
            return Err(ElectionError::InvalidState("Election is not in progress"));
        }

        self.phase = ElectionPhase::Ended;
        self.audit.append(AuditEvent::ElectionEnded);
        Ok(())
    }

    /// Cast `caller`'s one vote for the given candidate.
    ///
    /// Not authority-gated; instead gated by the voter registry.
    /// Preconditions are checked in a fixed order, first failure wins:
    /// the phase, then the caller's authorization, then their unconsumed
    /// vote, then the candidate id. On success the candidate's count, the
    /// total, and the caller's consumed flag all move as one unit.
    pub fn vote(
        &mut self,
        caller: &Identity,
        candidate_id: CandidateId,
    ) -> Result<(), ElectionError> {
        match self.phase {
            ElectionPhase::NotStarted => return Err(ElectionError::NotYetStarted),
            ElectionPhase::Ended => return Err(ElectionError::AlreadyEnded),
            ElectionPhase::Started => {}
        }
        let record = self.voter(caller);
        if !record.authorized {
            return Err(ElectionError::NotAuthorized);
        }
        if record.voted {
            return Err(ElectionError::AlreadyVoted);
        }
        let candidate = self
            .candidates
            .get_mut(candidate_id as usize)
            .ok_or(ElectionError::InvalidCandidate)?;

        candidate.vote_count += 1;
        self.total_votes += 1;
        // The record exists: `authorized` was true above.
        self.voters.entry(caller.clone()).or_default().voted = true;
        self.audit.append(AuditEvent::VoteCast {
            identity: caller.clone(),
            candidate: candidate_id,
        });
        Ok(())
    }

    /// Look up a single candidate by id.
    pub fn candidate(&self, id: CandidateId) -> Result<&Candidate, ElectionError> {
        self.candidates
            .get(id as usize)
            .ok_or(ElectionError::NotFound(id))
    }

    /// All candidates, in id order.
    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    pub fn candidate_count(&self) -> u32 {
        self.candidates.len() as u32
    }

    /// The voter record for any identity; unknown identities get the
    /// default record.
    pub fn voter(&self, identity: &Identity) -> VoterRecord {
        self.voters.get(identity).copied().unwrap_or_default()
    }

    pub fn status(&self) -> ElectionStatus {
        ElectionStatus {
            started: self.phase.started(),
            ended: self.phase.ended(),
            total_votes: self.total_votes,
        }
    }

    pub fn phase(&self) -> ElectionPhase {
        self.phase
    }

    pub fn owner(&self) -> &Identity {
        &self.authority
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn total_votes(&self) -> u64 {
        self.total_votes
    }

    /// The full audit trail, oldest first.
    pub fn audit(&self) -> &[AuditRecord] {
        self.audit.records()
    }

    /// Audit records with `seq >= since`.
    pub fn audit_since(&self, since: u64) -> &[AuditRecord] {
        self.audit.since(since)
    }
}
