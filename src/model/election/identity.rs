use std::convert::Infallible;
use std::fmt::{Display, Formatter};

use rocket::http::uri::fmt::{self, FromUriParam, Path, UriDisplay};
use rocket::request::FromParam;
use serde::{Deserialize, Serialize};

/// An opaque caller identity.
///
/// Identities are handed to us by the session layer on every request; the
/// engine only ever compares them for equality, so the contents are not
/// interpreted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Identity(String);

impl Identity {
    pub fn new(identity: impl Into<String>) -> Self {
        Self(identity.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for Identity {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Identity {
    fn from(identity: &str) -> Self {
        Self::new(identity)
    }
}

/// Allow identities to appear directly in route paths, e.g. `/voters/<identity>`.
impl<'a> FromParam<'a> for Identity {
    type Error = Infallible;

    fn from_param(param: &'a str) -> Result<Self, Self::Error> {
        Ok(Self::new(param))
    }
}

/// Allow identities in `uri!()` invocations.
impl UriDisplay<Path> for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_, Path>) -> std::fmt::Result {
        f.write_value(&self.0)
    }
}

impl<'a> FromUriParam<Path, &'a str> for Identity {
    type Target = Identity;

    fn from_uri_param(param: &'a str) -> Identity {
        Identity::new(param)
    }
}
