use rocket::{
    http::Status,
    request::{FromRequest, Outcome},
    Request,
};

use crate::model::election::Identity;

/// The header the session layer uses to hand us the caller's identity.
pub const CALLER_HEADER: &str = "X-Caller-Identity";

/// Request guard for the caller's identity.
///
/// Every mutating route takes one of these; the engine then decides what
/// that identity is allowed to do. We do not authenticate the identity
/// ourselves, that is the session layer's job. A request with no identity
/// header cannot be attributed to anyone and is rejected outright.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Caller(pub Identity);

impl Caller {
    pub fn identity(&self) -> &Identity {
        &self.0
    }
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for Caller {
    type Error = ();

    async fn from_request(req: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        match req.headers().get_one(CALLER_HEADER) {
            Some(value) if !value.is_empty() => Outcome::Success(Caller(Identity::new(value))),
            _ => Outcome::Failure((Status::Unauthorized, ())),
        }
    }
}
