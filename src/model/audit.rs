use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::election::{CandidateId, Identity};

/// One observable state change.
///
/// Exactly one event is appended per successful mutating operation; failed
/// operations and no-ops leave no trace here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum AuditEvent {
    /// A candidate was registered.
    CandidateAdded { id: CandidateId, name: String },
    /// An identity was authorized to vote.
    VoterAuthorized { identity: Identity },
    /// The election moved from `NotStarted` to `Started`.
    ElectionStarted,
    /// The election moved from `Started` to `Ended`.
    ElectionEnded,
    /// An authorized voter consumed their vote.
    VoteCast {
        identity: Identity,
        candidate: CandidateId,
    },
}

/// An [`AuditEvent`] as recorded: sequence-numbered and timestamped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditRecord {
    /// Position in the trail, contiguous from zero.
    pub seq: u64,
    /// When the mutation was applied.
    pub at: DateTime<Utc>,
    #[serde(flatten)]
    pub event: AuditEvent,
}

/// The append-only audit trail.
///
/// Only the engine appends, synchronously inside the mutating operation
/// that produced the record; everybody else gets read-only slices, so
/// consumers can tail it by sequence number and replay it at will.
#[derive(Debug, Default)]
pub struct AuditTrail {
    records: Vec<AuditRecord>,
}

impl AuditTrail {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an event, stamping it with the next sequence number.
    pub fn append(&mut self, event: AuditEvent) {
        self.records.push(AuditRecord {
            seq: self.records.len() as u64,
            at: Utc::now(),
            event,
        });
    }

    /// The full trail, oldest first.
    pub fn records(&self) -> &[AuditRecord] {
        &self.records
    }

    /// All records with `seq >= since`; the tailing cursor for pollers.
    pub fn since(&self, since: u64) -> &[AuditRecord] {
        let start = (since as usize).min(self.records.len());
        &self.records[start..]
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequence_numbers_are_contiguous() {
        let mut trail = AuditTrail::new();
        trail.append(AuditEvent::ElectionStarted);
        trail.append(AuditEvent::VoteCast {
            identity: Identity::new("voter"),
            candidate: 0,
        });
        trail.append(AuditEvent::ElectionEnded);

        let seqs = trail.records().iter().map(|r| r.seq).collect::<Vec<_>>();
        assert_eq!(seqs, vec![0, 1, 2]);
    }

    #[test]
    fn since_is_a_tail_cursor() {
        let mut trail = AuditTrail::new();
        assert!(trail.since(0).is_empty());

        trail.append(AuditEvent::ElectionStarted);
        trail.append(AuditEvent::ElectionEnded);

        assert_eq!(trail.since(0).len(), 2);
        assert_eq!(trail.since(1).len(), 1);
        assert_eq!(trail.since(1)[0].event, AuditEvent::ElectionEnded);
        // Cursors past the end are legal and empty.
        assert!(trail.since(2).is_empty());
        assert!(trail.since(100).is_empty());
    }
}
