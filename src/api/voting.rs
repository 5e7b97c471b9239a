use rocket::{serde::json::Json, Route, State};

use crate::{
    error::Result,
    model::{
        api::{caller::Caller, election::VoteRequest},
        election::SharedElection,
    },
};

pub fn routes() -> Vec<Route> {
    routes![cast_vote]
}

/// Cast the caller's one vote.
///
/// Not authority-gated: any identity the voter registry authorizes may
/// vote, exactly once, while the election is running. The write lock is
/// held across the whole check-then-tally, so a vote either lands in full
/// or not at all.
#[post("/votes", data = "<vote>", format = "json")]
async fn cast_vote(
    caller: Caller,
    vote: Json<VoteRequest>,
    election: &State<SharedElection>,
) -> Result<()> {
    let candidate = vote.0.candidate;
    election.write().await.vote(caller.identity(), candidate)?;
    info!("Vote cast for candidate {candidate}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use rocket::{
        http::{ContentType, Header, Status},
        local::asynchronous::{Client, LocalResponse},
        serde::json::serde_json,
    };

    use crate::model::api::caller::CALLER_HEADER;
    use crate::model::api::election::{AuthorizeRequest, NewCandidate};
    use crate::model::election::CandidateId;
    use crate::TEST_AUTHORITY;

    use super::*;

    /// Register Alice and Bob, authorize V1 and V2, and start the election.
    async fn set_up_election(client: &Client) {
        for name in ["Alice", "Bob"] {
            let response = client
                .post("/candidates")
                .header(ContentType::JSON)
                .header(Header::new(CALLER_HEADER, TEST_AUTHORITY))
                .body(serde_json::to_string(&NewCandidate { name: name.to_string() }).unwrap())
                .dispatch()
                .await;
            assert_eq!(Status::Ok, response.status());
        }
        for identity in ["V1", "V2"] {
            let response = client
                .post("/voters/authorize")
                .header(ContentType::JSON)
                .header(Header::new(CALLER_HEADER, TEST_AUTHORITY))
                .body(serde_json::to_string(&AuthorizeRequest { identity: identity.into() }).unwrap())
                .dispatch()
                .await;
            assert_eq!(Status::Ok, response.status());
        }
        let response = client
            .post("/election/start")
            .header(Header::new(CALLER_HEADER, TEST_AUTHORITY))
            .dispatch()
            .await;
        assert_eq!(Status::Ok, response.status());
    }

    async fn end_election(client: &Client) {
        let response = client
            .post("/election/end")
            .header(Header::new(CALLER_HEADER, TEST_AUTHORITY))
            .dispatch()
            .await;
        assert_eq!(Status::Ok, response.status());
    }

    fn shared_election(client: &Client) -> &SharedElection {
        client.rocket().state::<SharedElection>().unwrap()
    }

    async fn vote(client: &Client, caller: &str, candidate: CandidateId) {
        vote_expect_status(client, caller, candidate, Status::Ok).await;
    }

    async fn vote_expect_status<'c>(
        client: &'c Client,
        caller: &str,
        candidate: CandidateId,
        status: Status,
    ) -> LocalResponse<'c> {
        let response = client
            .post(uri!(cast_vote))
            .header(ContentType::JSON)
            .header(Header::new(CALLER_HEADER, caller.to_string()))
            .body(serde_json::to_string(&VoteRequest { candidate }).unwrap())
            .dispatch()
            .await;
        assert_eq!(status, response.status());
        response
    }

    #[backend_test]
    async fn authorized_voters_can_vote(client: Client) {
        set_up_election(&client).await;

        vote(&client, "V1", 0).await;

        let election = shared_election(&client).read().await;
        assert_eq!(election.candidate(0).unwrap().vote_count, 1);
        assert_eq!(election.total_votes(), 1);
        assert!(election.voter(&"V1".into()).voted);
    }

    #[backend_test]
    async fn double_voting_is_rejected(client: Client) {
        set_up_election(&client).await;

        vote(&client, "V1", 0).await;
        let response =
            vote_expect_status(&client, "V1", 1, Status::UnprocessableEntity).await;
        assert_eq!(
            "You have already voted",
            response.into_string().await.unwrap()
        );

        let election = shared_election(&client).read().await;
        assert_eq!(election.total_votes(), 1);
        assert_eq!(election.candidate(1).unwrap().vote_count, 0);
    }

    #[backend_test]
    async fn unauthorized_voters_are_rejected(client: Client) {
        set_up_election(&client).await;

        let response =
            vote_expect_status(&client, "mallory", 0, Status::Forbidden).await;
        assert_eq!(
            "You are not authorized to vote",
            response.into_string().await.unwrap()
        );

        let election = shared_election(&client).read().await;
        assert_eq!(election.total_votes(), 0);
    }

    #[backend_test]
    async fn invalid_candidate_is_rejected(client: Client) {
        set_up_election(&client).await;

        let response =
            vote_expect_status(&client, "V1", 99, Status::UnprocessableEntity).await;
        assert_eq!("Invalid candidate ID", response.into_string().await.unwrap());

        // V1's vote was not consumed by the failed attempt.
        let election = shared_election(&client).read().await;
        assert_eq!(election.total_votes(), 0);
        assert!(!election.voter(&"V1".into()).voted);
    }

    #[backend_test]
    async fn voting_outside_the_election_is_rejected(client: Client) {
        // Before the start.
        let response =
            vote_expect_status(&client, "V1", 0, Status::UnprocessableEntity).await;
        assert_eq!(
            "Election has not started yet",
            response.into_string().await.unwrap()
        );

        set_up_election(&client).await;
        end_election(&client).await;

        // After the end.
        let response =
            vote_expect_status(&client, "V1", 0, Status::UnprocessableEntity).await;
        assert_eq!(
            "Election has already ended",
            response.into_string().await.unwrap()
        );

        let election = shared_election(&client).read().await;
        assert_eq!(election.total_votes(), 0);
    }

    #[backend_test]
    async fn votes_require_an_identity(client: Client) {
        set_up_election(&client).await;

        let response = client
            .post(uri!(cast_vote))
            .header(ContentType::JSON)
            .body(serde_json::to_string(&VoteRequest { candidate: 0 }).unwrap())
            .dispatch()
            .await;
        assert_eq!(Status::Unauthorized, response.status());
    }
}
