use rocket::{http::Status, response::status::Custom, response::Responder};
use thiserror::Error;

use crate::model::election::ElectionError;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Election(#[from] ElectionError),
}

impl Error {
    /// The HTTP status a failure maps to.
    fn status(&self) -> Status {
        match self {
            Self::Election(err) => match err {
                ElectionError::PermissionDenied | ElectionError::NotAuthorized => Status::Forbidden,
                ElectionError::NotFound(_) => Status::NotFound,
                ElectionError::InvalidState(_)
                | ElectionError::NoCandidates
                | ElectionError::NotYetStarted
                | ElectionError::AlreadyEnded
                | ElectionError::AlreadyVoted
                | ElectionError::InvalidCandidate => Status::UnprocessableEntity,
            },
        }
    }
}

impl<'r, 'o: 'r> Responder<'r, 'o> for Error {
    /// Respond with the mapped status; the body carries the human-readable
    /// reason so callers never have to guess why they were refused.
    fn respond_to(self, req: &'r rocket::Request<'_>) -> rocket::response::Result<'o> {
        warn!("{self}");
        Custom(self.status(), self.to_string()).respond_to(req)
    }
}
