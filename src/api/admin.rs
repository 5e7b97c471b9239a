use rocket::{serde::json::Json, Route, State};

use crate::{
    error::Result,
    model::{
        api::{
            caller::Caller,
            election::{AuthorizeRequest, NewCandidate},
        },
        election::{Candidate, SharedElection},
    },
};

pub fn routes() -> Vec<Route> {
    routes![add_candidate, authorize_voter, start_election, end_election]
}

/// Register a candidate. Authority-only; the registry freezes on start.
#[post("/candidates", data = "<candidate>", format = "json")]
async fn add_candidate(
    caller: Caller,
    candidate: Json<NewCandidate>,
    election: &State<SharedElection>,
) -> Result<Json<Candidate>> {
    let mut election = election.write().await;
    let id = election.add_candidate(caller.identity(), candidate.0.name)?;
    // Lookup cannot fail; the id was just assigned.
    let candidate = election.candidate(id)?.clone();
    info!("Registered candidate {} \"{}\"", candidate.id, candidate.name);
    Ok(Json(candidate))
}

/// Authorize an identity to vote. Authority-only, idempotent.
#[post("/voters/authorize", data = "<request>", format = "json")]
async fn authorize_voter(
    caller: Caller,
    request: Json<AuthorizeRequest>,
    election: &State<SharedElection>,
) -> Result<()> {
    let identity = request.0.identity;
    election
        .write()
        .await
        .authorize_voter(caller.identity(), identity.clone())?;
    info!("Authorized voter \"{identity}\"");
    Ok(())
}

/// Open the election for voting.
#[post("/election/start")]
async fn start_election(caller: Caller, election: &State<SharedElection>) -> Result<()> {
    election.write().await.start(caller.identity())?;
    info!("Election started");
    Ok(())
}

/// Close the election; this is irreversible.
#[post("/election/end")]
async fn end_election(caller: Caller, election: &State<SharedElection>) -> Result<()> {
    election.write().await.end(caller.identity())?;
    info!("Election ended");
    Ok(())
}
