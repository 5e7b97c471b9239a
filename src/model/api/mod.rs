//! Types that exist for the API surface: request guards and the bodies of
//! requests and responses. Everything here is serialised exactly as it
//! appears on the wire.

pub mod caller;
pub mod election;
