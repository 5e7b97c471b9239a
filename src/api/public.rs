use rocket::{serde::json::Json, Route, State};

use crate::{
    error::Result,
    model::{
        audit::AuditRecord,
        election::{Candidate, CandidateId, ElectionStatus, Identity, SharedElection, VoterRecord},
    },
};

pub fn routes() -> Vec<Route> {
    routes![
        get_all_candidates,
        get_candidate_count,
        get_candidate,
        get_election_status,
        get_election_name,
        get_owner,
        get_voter,
        get_audit_trail,
    ]
}

/// All candidates in id order. Never fails.
#[get("/candidates")]
async fn get_all_candidates(election: &State<SharedElection>) -> Json<Vec<Candidate>> {
    Json(election.read().await.candidates().to_vec())
}

#[get("/candidates/count")]
async fn get_candidate_count(election: &State<SharedElection>) -> Json<u32> {
    Json(election.read().await.candidate_count())
}

/// A single candidate, or 404 for an id the registry never assigned.
#[get("/candidates/<id>")]
async fn get_candidate(
    id: CandidateId,
    election: &State<SharedElection>,
) -> Result<Json<Candidate>> {
    let candidate = election.read().await.candidate(id)?.clone();
    Ok(Json(candidate))
}

#[get("/election")]
async fn get_election_status(election: &State<SharedElection>) -> Json<ElectionStatus> {
    Json(election.read().await.status())
}

#[get("/election/name")]
async fn get_election_name(election: &State<SharedElection>) -> Json<String> {
    Json(election.read().await.name().to_string())
}

#[get("/election/owner")]
async fn get_owner(election: &State<SharedElection>) -> Json<Identity> {
    Json(election.read().await.owner().clone())
}

/// The voter record for any identity; unknown identities read as the
/// default record rather than failing.
#[get("/voters/<identity>")]
async fn get_voter(identity: Identity, election: &State<SharedElection>) -> Json<VoterRecord> {
    Json(election.read().await.voter(&identity))
}

/// The audit trail from `since` onwards (the whole trail by default).
/// Pollers pass the next sequence number they have not seen yet.
#[get("/election/audit?<since>")]
async fn get_audit_trail(
    since: Option<u64>,
    election: &State<SharedElection>,
) -> Json<Vec<AuditRecord>> {
    Json(
        election
            .read()
            .await
            .audit_since(since.unwrap_or(0))
            .to_vec(),
    )
}
